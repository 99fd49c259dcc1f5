use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use tracing::{Level, debug, instrument};

use crate::{error::IndexError, models::events::SoundEventItem};

/// Builds the Japanese collator used for display ordering.
pub fn display_collator() -> Result<Collator, IndexError> {
    Collator::try_new(&locale!("ja").into(), CollatorOptions::new())
        .map_err(|err| IndexError::Collation(err.to_string()))
}

/// Drops events without sounds and orders the rest by display name.
///
/// The sort is stable, so events with equal names keep their manifest order.
#[instrument(level = Level::TRACE, skip_all)]
pub fn collate(events: Vec<SoundEventItem>) -> Result<Vec<SoundEventItem>, IndexError> {
    let collator = display_collator()?;

    let mut events: Vec<SoundEventItem> = events
        .into_iter()
        .filter(|event| !event.sounds.is_empty())
        .collect();
    events.sort_by(|a, b| collator.compare(&a.display_name, &b.display_name));

    debug!("Collated {} events", events.len());
    Ok(events)
}

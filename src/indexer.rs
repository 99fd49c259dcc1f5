use tracing::{Level, error, info, instrument};

use crate::{
    collator,
    error::IndexError,
    loader::{self, Sources},
    models::{events::SoundEventItem, settings::Settings},
    resolver,
};

/// Indexes the sound events described by `settings`.
///
/// Fails only when a mandatory input is missing or malformed. Events whose sounds are
/// all absent from the asset index or the object store are left out.
#[instrument(level = Level::TRACE, skip_all)]
pub fn index_sound_data(settings: &Settings) -> Result<Vec<SoundEventItem>, IndexError> {
    let Sources {
        asset_index,
        manifest,
        localization,
    } = loader::load_sources(settings)?;

    let events: Vec<SoundEventItem> = manifest
        .iter()
        .filter_map(|(event_id, entry)| {
            resolver::resolve_event(
                event_id,
                entry,
                &asset_index,
                &settings.objects_dir,
                &localization,
            )
        })
        .collect();

    info!(
        "Resolved {} of {} sound events",
        events.len(),
        manifest.len()
    );

    collator::collate(events)
}

/// Like [`index_sound_data`], but logs a failure and returns an empty list instead.
pub fn index_or_empty(settings: &Settings) -> Vec<SoundEventItem> {
    index_sound_data(settings).unwrap_or_else(|err| {
        error!("Error indexing sound data: {}", err);
        Vec::new()
    })
}

use std::path::Path;

use tracing::{Level, instrument, trace};

use crate::{
    constants::{
        Action, NAMESPACE, REGISTRY_CATEGORIES, SOUND_ASSET_EXT, SOUND_ASSET_PREFIX,
        SUBTITLED_CATEGORIES, SUBTITLES_PREFIX, UNKNOWN_CATEGORY,
    },
    models::{
        events::{SoundEventItem, SoundVariant},
        indexes::AssetIndex,
        language::LocalizationMap,
        sounds::SoundEventEntry,
    },
    utils,
};

/// The first dot-delimited segment of an event id, or `unknown` for ids without one.
pub fn extract_category(event_id: &str) -> &str {
    match event_id.split_once('.') {
        Some((category, _)) if !category.is_empty() => category,
        _ => UNKNOWN_CATEGORY,
    }
}

/// Virtual asset path of a sound name inside the asset index.
pub fn sound_asset_path(sound_name: &str) -> String {
    format!("{SOUND_ASSET_PREFIX}{sound_name}{SOUND_ASSET_EXT}")
}

/// Resolves one sound name to a file in the object store.
///
/// Returns `None` when the asset index has no entry for the sound or when the store
/// does not hold the object. Neither is an error: stores are often partial.
pub fn resolve_variant(
    sound_name: &str,
    asset_index: &AssetIndex,
    objects_dir: &Path,
) -> Option<SoundVariant> {
    let asset_path = sound_asset_path(sound_name);
    let Some(object) = asset_index.get(&asset_path) else {
        trace!("No asset index entry for {}", asset_path);
        return None;
    };

    let Some(absolute_path) = object.object_path(objects_dir) else {
        trace!("Unusable hash {:?} for {}", object.hash, asset_path);
        return None;
    };
    if !absolute_path.exists() {
        trace!("Object {} for {} is not in the store", object.hash, asset_path);
        return None;
    }

    Some(SoundVariant {
        name: utils::last_segment(sound_name).to_owned(),
        hash: object.hash.clone(),
        absolute_path,
    })
}

/// Candidate localization keys for an event, most specific first.
///
/// The order is significant: the first key present in the localization map names the
/// event. `parts` is `event_id` split on `.`.
pub fn search_patterns(parts: &[&str], event_id: &str) -> Vec<String> {
    let mut patterns = Vec::new();

    if parts.len() >= 2 {
        let category = parts[0];
        // Everything between the category and the trailing action.
        let object = parts[1..parts.len() - 1].join("_");

        if REGISTRY_CATEGORIES.contains(&category) {
            patterns.push(format!("{category}.{NAMESPACE}.{object}"));
            patterns.push(format!("{category}.{NAMESPACE}.{}", object.replace('_', "")));

            if let Some((simplified, _)) = object.split_once('_') {
                patterns.push(format!("{category}.{NAMESPACE}.{simplified}"));
            }

            patterns.push(format!("{category}.{NAMESPACE}.{}", parts[1]));
        }

        if SUBTITLED_CATEGORIES.contains(&category) {
            patterns.push(format!("{SUBTITLES_PREFIX}.{event_id}"));
        }
    }

    patterns.push(format!("{SUBTITLES_PREFIX}.{}", parts.join(".")));
    patterns
}

/// The action named by the last segment of an event id, if any.
pub fn extract_action(event_id: &str) -> Option<Action> {
    event_id.rsplit('.').next()?.parse().ok()
}

/// Renders an event id for display when no translation exists:
/// `custom.made.up.id` becomes `Custom Made Up Id`.
pub fn format_event_id(event_id: &str) -> String {
    event_id
        .split('.')
        .map(utils::capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolves the human readable name of an event.
///
/// The action suffix is only ever attached to a translated name.
pub fn resolve_display_name(event_id: &str, localization: &LocalizationMap) -> String {
    let parts: Vec<&str> = event_id.split('.').collect();

    let translated = search_patterns(&parts, event_id)
        .iter()
        .find_map(|pattern| localization.get(pattern));

    match translated {
        Some(base) => match extract_action(event_id) {
            Some(action) => format!("{base} ({})", action.label()),
            None => base.to_owned(),
        },
        None => format_event_id(event_id),
    }
}

/// Builds the indexed item for one manifest event.
///
/// Returns `None` if none of the event's sounds resolve to a stored file.
#[instrument(level = Level::TRACE, skip(entry, asset_index, localization))]
pub fn resolve_event(
    event_id: &str,
    entry: &SoundEventEntry,
    asset_index: &AssetIndex,
    objects_dir: &Path,
    localization: &LocalizationMap,
) -> Option<SoundEventItem> {
    let sounds: Vec<SoundVariant> = entry
        .sounds
        .iter()
        .filter_map(|sound| resolve_variant(sound.name(), asset_index, objects_dir))
        .collect();

    if sounds.is_empty() {
        trace!("Dropping {} with no resolvable sounds", event_id);
        return None;
    }

    Some(SoundEventItem {
        id: event_id.to_owned(),
        display_name: resolve_display_name(event_id, localization),
        category: extract_category(event_id).to_owned(),
        sounds,
    })
}

use tracing::{Level, debug, info, instrument, warn};

use crate::{
    error::IndexError,
    models::{
        indexes::AssetIndex, language::LocalizationMap, settings::Settings, shared::Parseable,
        sounds::SoundManifest,
    },
};

/// The three parsed documents an indexing run works from.
#[derive(Debug, Default)]
pub struct Sources {
    pub asset_index: AssetIndex,
    pub manifest: SoundManifest,
    pub localization: LocalizationMap,
}

/// Reads the asset index, the sound manifest and the optional localization file.
///
/// Both mandatory inputs are checked for existence before either is parsed. The
/// objects directory is not touched here.
#[instrument(level = Level::TRACE, skip_all)]
pub fn load_sources(settings: &Settings) -> Result<Sources, IndexError> {
    for (kind, path) in [
        (AssetIndex::KIND, &settings.asset_index_path),
        (SoundManifest::KIND, &settings.sounds_json_path),
    ] {
        if !path.exists() {
            return Err(IndexError::missing_input(kind, path));
        }
    }

    debug!("Parsing asset index at {:?}", settings.asset_index_path);
    let asset_index = AssetIndex::parse_from_path(&settings.asset_index_path)?;
    debug!("Parsing sound manifest at {:?}", settings.sounds_json_path);
    let manifest = SoundManifest::parse_from_path(&settings.sounds_json_path)?;
    let localization = load_localization(settings)?;

    info!(
        "Loaded {} assets, {} sound events and {} translations",
        asset_index.objects.len(),
        manifest.len(),
        localization.len()
    );

    Ok(Sources {
        asset_index,
        manifest,
        localization,
    })
}

/// An unset or nonexistent localization file yields an empty map.
#[instrument(level = Level::TRACE, skip_all)]
pub fn load_localization(settings: &Settings) -> Result<LocalizationMap, IndexError> {
    match settings.language_json() {
        Some(path) if path.exists() => {
            debug!("Parsing localization file at {:?}", path);
            LocalizationMap::parse_from_path(path)
        }
        Some(path) => {
            warn!(
                "Localization file not found at {:?}, falling back to formatted names",
                path
            );
            Ok(LocalizationMap::default())
        }
        None => {
            debug!("No localization file configured");
            Ok(LocalizationMap::default())
        }
    }
}

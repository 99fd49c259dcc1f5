use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{error::SourceKind, models::shared::Parseable};

/// The four paths an indexing run reads from.
///
/// Deserializes from the persisted settings document; unrelated keys are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub asset_index_path: PathBuf,
    pub objects_dir: PathBuf,
    pub sounds_json_path: PathBuf,
    pub language_json_path: PathBuf,
}

impl Settings {
    /// Names of the paths an indexing run cannot do without that are left unset.
    pub fn unset_paths(&self) -> Vec<&'static str> {
        [
            ("assetIndexPath", &self.asset_index_path),
            ("objectsDir", &self.objects_dir),
            ("soundsJsonPath", &self.sounds_json_path),
        ]
        .into_iter()
        .filter(|(_, path)| path.as_os_str().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// The localization file, if one was configured.
    pub fn language_json(&self) -> Option<&Path> {
        if self.language_json_path.as_os_str().is_empty() {
            None
        } else {
            Some(&self.language_json_path)
        }
    }
}

impl Parseable for Settings {
    const KIND: SourceKind = SourceKind::Settings;
}

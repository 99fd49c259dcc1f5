use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single audio file backing a sound event.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SoundVariant {
    /// Base file name of the variant with any namespace stripped.
    pub name: String,
    pub hash: String,
    pub absolute_path: PathBuf,
}

/// An indexed sound event. `sounds` is never empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SoundEventItem {
    pub id: String,
    pub display_name: String,
    pub category: String,
    pub sounds: Vec<SoundVariant>,
}

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::SourceKind, models::shared::Parseable};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssetObject {
    pub hash: String,
    /// Informational only; unreadable sizes become zero.
    #[serde(default, deserialize_with = "lenient_size")]
    pub size: u64,
}

fn lenient_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().unwrap_or_default())
}

impl AssetObject {
    /// Location of this object in a content-addressed store sharded by the first two
    /// characters of its hash. Hashes too short to shard have no location.
    pub fn object_path(&self, objects_dir: &Path) -> Option<PathBuf> {
        let prefix = self.hash.get(..2)?;
        Some(objects_dir.join(prefix).join(&self.hash))
    }
}

/// Represents an asset index file, mapping virtual asset paths to stored objects.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetIndex {
    pub objects: HashMap<String, AssetObject>,
}

impl AssetIndex {
    pub fn get(&self, virtual_path: &str) -> Option<&AssetObject> {
        self.objects.get(virtual_path)
    }
}

impl Parseable for AssetIndex {
    const KIND: SourceKind = SourceKind::AssetIndex;
}

use std::collections::HashMap;

use serde::Deserialize;

use crate::{error::SourceKind, models::shared::Parseable};

/// Flat localization key to translated string map, e.g. `ja_jp.json`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct LocalizationMap {
    entries: HashMap<String, String>,
}

impl LocalizationMap {
    /// Empty translations count as missing.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizationMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Parseable for LocalizationMap {
    const KIND: SourceKind = SourceKind::Localization;
}

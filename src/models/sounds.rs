use indexmap::IndexMap;
use serde::Deserialize;

use crate::{error::SourceKind, models::shared::Parseable};

/// One entry of an event's `sounds` list. Playback attributes such as `volume` and
/// `pitch` are not read.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SoundEntry {
    Name(String),
    Detailed { name: String },
}

impl SoundEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Detailed { name, .. } => name,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundEventEntry {
    #[serde(default)]
    pub sounds: Vec<SoundEntry>,
}

/// The sound event manifest (`sounds.json`). Events keep their document order.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct SoundManifest {
    pub events: IndexMap<String, SoundEventEntry>,
}

impl SoundManifest {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SoundEventEntry)> {
        self.events.iter()
    }
}

impl Parseable for SoundManifest {
    const KIND: SourceKind = SourceKind::SoundManifest;
}

use std::{fmt, path::PathBuf};

/// The JSON documents an indexing run reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    AssetIndex,
    SoundManifest,
    Localization,
    Settings,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AssetIndex => "asset index",
            Self::SoundManifest => "sound manifest",
            Self::Localization => "localization file",
            Self::Settings => "settings file",
        })
    }
}

/// Errors that abort an indexing run.
///
/// Per-variant and per-event misses are never reported here; they only exclude
/// the affected unit from the result.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Required {kind} not found at {}", .path.display())]
    MissingInput { kind: SourceKind, path: PathBuf },

    #[error("Failed to parse {kind} at {}: {source}", .path.display())]
    Parse {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {kind} at {}: {source}", .path.display())]
    Io {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load collation data: {0}")]
    Collation(String),
}

impl IndexError {
    pub fn missing_input(kind: SourceKind, path: impl Into<PathBuf>) -> Self {
        Self::MissingInput {
            kind,
            path: path.into(),
        }
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

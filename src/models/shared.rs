use std::{
    any::type_name,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use serde::Deserialize;
use tracing::debug;

use crate::error::{IndexError, SourceKind};

/// A JSON document that can be read from a reader, an open file or a path on disk.
pub trait Parseable: Sized + for<'de> Deserialize<'de> {
    const KIND: SourceKind;

    fn parse_from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        debug!("Parsing {} object from reader", type_name::<Self>());
        serde_json::from_reader(reader)
    }

    fn parse_from_file(file: &File) -> serde_json::Result<Self> {
        let reader = BufReader::new(file);
        Self::parse_from_reader(reader)
    }

    /// Fails with [`IndexError::MissingInput`] when nothing exists at `path`.
    fn parse_from_path(path: &Path) -> Result<Self, IndexError> {
        if !path.exists() {
            return Err(IndexError::missing_input(Self::KIND, path));
        }

        let file = File::open(path).map_err(|source| IndexError::Io {
            kind: Self::KIND,
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_from_file(&file).map_err(|source| IndexError::Parse {
            kind: Self::KIND,
            path: path.to_path_buf(),
            source,
        })
    }
}

//! Indexes a game's sound assets into a searchable, display-ordered list of sound
//! events with translated names and verified object store paths.

pub mod collator;
pub mod constants;
pub mod error;
pub mod filter;
pub mod indexer;
pub mod loader;
pub mod models;
pub mod resolver;
pub mod utils;

#[cfg(test)]
mod tests;

pub use error::{IndexError, SourceKind};
pub use indexer::{index_or_empty, index_sound_data};
pub use models::{
    events::{SoundEventItem, SoundVariant},
    settings::Settings,
};

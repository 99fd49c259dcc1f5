pub mod events;
pub mod indexes;
pub mod language;
pub mod settings;
pub mod shared;
pub mod sounds;

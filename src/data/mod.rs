//! Game log loading and per-athlete indexing

pub mod csv_loader;
pub mod game_log;

// Re-export commonly used types
pub use csv_loader::LoadError;
pub use game_log::{GameLogEntry, GameLogSource, IndexedGameLogs};

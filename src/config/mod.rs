//! Configuration management for coinbook
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::CoinbookPaths;
pub use settings::Settings;

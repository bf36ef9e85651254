//! coinbook - Local-first personal finance tracker
//!
//! This library provides the core functionality for the coinbook application:
//! recording income and expense transactions, organizing them into categories,
//! setting monthly budgets, and computing aggregate statistics. All state is
//! held in memory and persisted as JSON documents on the local filesystem.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budgets)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Aggregation over collection snapshots
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use coinbook::config::{paths::CoinbookPaths, settings::Settings};
//! use coinbook::storage::Storage;
//!
//! let paths = CoinbookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::CoinbookError;

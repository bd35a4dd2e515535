//! Shared utilities, configuration, and error handling for the Responsible AI backend
//!
//! - Runtime configuration loaded from the environment
//! - The application error type and its HTTP mapping
//! - Storage error type shared by every document store backend
//! - Request extractors

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use db::StoreError;
pub use error::{Error, Result};
pub use extractors::{LimitQuery, QueryParams, ValidatedJson};

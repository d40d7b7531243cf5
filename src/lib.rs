//! Foundation Helpers Library
//!
//! Extension traits on standard types, Levenshtein fuzzy matching, JSON
//! resource files and a persisted preference store.

pub mod config;
pub mod error;
pub mod preferences;
pub mod resources;
pub mod utils;

pub use error::{HelperError, HelperResult};

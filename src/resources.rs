//! JSON resource files
//!
//! Path-level decode/encode helpers, and a `ResourceBundle` that resolves
//! named files inside a resource directory before reading or writing them.

use crate::error::{HelperError, HelperResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read and decode the JSON document at `path`
pub fn decode_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> HelperResult<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    debug!("Decoded JSON from {}", path.display());
    Ok(value)
}

/// Encode `value` as pretty JSON and write it to `path`
pub fn encode_json<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> HelperResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    debug!("Encoded JSON to {}", path.display());
    Ok(())
}

/// A directory of bundled resource files
#[derive(Debug, Clone)]
pub struct ResourceBundle {
    root: PathBuf,
}

impl ResourceBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of `name` (extension included) if that file exists
    pub fn url_for_resource(&self, name: &str) -> Option<PathBuf> {
        let path = self.root.join(name);
        path.is_file().then_some(path)
    }

    /// Decode the named JSON resource
    pub fn decode<T: DeserializeOwned>(&self, name: &str) -> HelperResult<T> {
        let path = self.locate(name)?;
        decode_json(path)
    }

    /// Overwrite the named JSON resource. The file must already exist.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T, name: &str) -> HelperResult<()> {
        let path = self.locate(name)?;
        encode_json(value, path)
    }

    fn locate(&self, name: &str) -> HelperResult<PathBuf> {
        self.url_for_resource(name).ok_or_else(|| {
            warn!("Failed to locate {} in {}", name, self.root.display());
            HelperError::ResourceNotFound(name.to_string())
        })
    }
}

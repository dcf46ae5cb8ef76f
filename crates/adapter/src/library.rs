//! Level library - level data blobs keyed by their fixed identifiers.
//!
//! Blobs are kept as text and parsed every time a level is requested, so a
//! broken blob is reported when that level is selected, not at startup.

use std::collections::HashMap;
use std::path::Path;

use crate::core::LevelConfig;
use crate::error::AdapterError;
use crate::types::LevelType;

#[derive(Debug, Clone, Default)]
pub struct LevelLibrary {
    blobs: HashMap<LevelType, String>,
}

impl LevelLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `<identifier>.json` for every level type found in `dir`.
    ///
    /// Missing files are skipped; requesting that level later fails with
    /// [`AdapterError::MissingLevel`].
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, AdapterError> {
        let dir = dir.as_ref();
        let mut library = Self::new();
        for level_type in LevelType::ALL {
            let path = dir.join(format!("{}.json", level_type.data_id()));
            if !path.is_file() {
                tracing::warn!(path = %path.display(), "level data not found");
                continue;
            }
            let json = std::fs::read_to_string(&path).map_err(|source| AdapterError::Io {
                path: path.display().to_string(),
                source,
            })?;
            library.insert(level_type, json);
        }
        tracing::info!(levels = library.len(), dir = %dir.display(), "level library loaded");
        Ok(library)
    }

    /// Store (or replace) the blob for `level_type`.
    pub fn insert(&mut self, level_type: LevelType, json: impl Into<String>) {
        self.blobs.insert(level_type, json.into());
    }

    pub fn contains(&self, level_type: LevelType) -> bool {
        self.blobs.contains_key(&level_type)
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    /// Parse the configuration for `level_type`.
    pub fn load(&self, level_type: LevelType) -> Result<LevelConfig, AdapterError> {
        let id = level_type.data_id();
        let json = self
            .blobs
            .get(&level_type)
            .ok_or(AdapterError::MissingLevel { id })?;
        LevelConfig::from_json(level_type, json).map_err(|source| AdapterError::Config { id, source })
    }
}

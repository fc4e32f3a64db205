pub mod commons;
pub mod resolution;

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::COMMONS_FILE_PREFIX;
use crate::error::{CragError, Result};

pub use resolution::{ideal_resolution, select_resolution, select_tier, ResolutionChoice};

/// Commons file name of a crag photo, without the `File:` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhotoKey(String);

impl PhotoKey {
    /// Build a key from a file name or a full `File:` title.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        let stripped = trimmed.strip_prefix(COMMONS_FILE_PREFIX).unwrap_or(trimmed);
        if stripped.is_empty() {
            return Err(CragError::InvalidPhotoKey(name));
        }
        Ok(Self(stripped.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhotoKey {
    type Error = CragError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PhotoKey> for String {
    fn from(key: PhotoKey) -> Self {
        key.0
    }
}

/// Which resolutions of each crag photo have finished loading.
///
/// Only the photo loading collaborator writes to this map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotoSet {
    photos: HashMap<PhotoKey, BTreeMap<u32, bool>>,
}

impl PhotoSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register keys with an empty resolution map. Known keys are left alone.
    pub fn prepare(&mut self, keys: &[PhotoKey]) {
        for key in keys {
            self.photos.entry(key.clone()).or_default();
        }
    }

    pub fn mark_loaded(&mut self, key: &PhotoKey, resolution: u32) {
        self.photos
            .entry(key.clone())
            .or_default()
            .insert(resolution, true);
    }

    pub fn is_loaded(&self, key: &PhotoKey, resolution: u32) -> bool {
        self.photos
            .get(key)
            .and_then(|res| res.get(&resolution))
            .copied()
            .unwrap_or(false)
    }

    /// Loaded resolutions of `key`, ascending.
    pub fn loaded_resolutions(&self, key: &PhotoKey) -> Vec<u32> {
        self.photos
            .get(key)
            .map(|res| {
                res.iter()
                    .filter(|(_, loaded)| **loaded)
                    .map(|(r, _)| *r)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_any_loaded(&self, key: &PhotoKey) -> bool {
        self.photos
            .get(key)
            .is_some_and(|res| res.values().any(|loaded| *loaded))
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

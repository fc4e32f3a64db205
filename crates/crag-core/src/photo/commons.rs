use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{COMMONS_FILE_PATH_URL, COMMONS_TAG_KEY};

use super::PhotoKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsmType {
    Node,
    Way,
    Relation,
}

impl fmt::Display for OsmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => write!(f, "node"),
            Self::Way => write!(f, "way"),
            Self::Relation => write!(f, "relation"),
        }
    }
}

/// The crag feature whose photos and routes are being shown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub osm_type: OsmType,
    pub osm_id: u64,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl Feature {
    pub fn new(osm_type: OsmType, osm_id: u64) -> Self {
        Self {
            osm_type,
            osm_id,
            tags: BTreeMap::new(),
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Path of the feature page, e.g. `/node/123`.
    pub fn link(&self) -> String {
        format!("/{}/{}", self.osm_type, self.osm_id)
    }

    /// URL that switches the climbing view to `photo` on this feature.
    pub fn photo_url(&self, photo: &PhotoKey) -> String {
        format!("{}/climbing/photo/{}", self.link(), photo)
    }

    /// Crag photos listed in `wikimedia_commons` tags, in tag key order.
    pub fn crag_photos(&self) -> Vec<PhotoKey> {
        commons_keys(&self.tags)
            .into_iter()
            .filter_map(|key| match PhotoKey::new(self.tags[key].as_str()) {
                Ok(photo) => Some(photo),
                Err(e) => {
                    debug!(tag = key, error = %e, "Skipping unusable photo tag");
                    None
                }
            })
            .collect()
    }
}

/// Tag keys `wikimedia_commons` and `wikimedia_commons:N`.
///
/// The bare key comes first, numbered keys follow by number.
pub fn commons_keys(tags: &BTreeMap<String, String>) -> Vec<&str> {
    let mut keys: Vec<(u32, &str)> = tags
        .keys()
        .filter_map(|key| {
            let rest = key.strip_prefix(COMMONS_TAG_KEY)?;
            if rest.is_empty() {
                return Some((0, key.as_str()));
            }
            let n = rest.strip_prefix(':')?.parse::<u32>().ok()?;
            Some((n, key.as_str()))
        })
        .collect();
    keys.sort();
    keys.into_iter().map(|(_, key)| key).collect()
}

/// Resized image URL for a Commons photo.
pub fn image_url(photo: &PhotoKey, resolution: u32) -> String {
    format!(
        "{COMMONS_FILE_PATH_URL}{}?width={resolution}",
        photo.as_str().replace(' ', "_")
    )
}

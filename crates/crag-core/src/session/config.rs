use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_RESOLUTION_TIERS, INITIAL_PHOTO_RESOLUTION, MAX_IDEAL_RESOLUTION, ROUTE_ROW_HEIGHT,
    SCROLL_DETECTION_MARGIN, SPLIT_PANE_DEFAULT_HEIGHT,
};
use crate::error::{CragError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub resolution: ResolutionConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub settings: UserSettings,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        self.resolution.validate()?;
        self.scroll.validate()?;
        self.layout.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Available image widths, strictly ascending.
    pub tiers: Vec<u32>,
    /// Width used before a photo is known.
    pub initial: u32,
    /// Cap on the ideal size computed from viewport and zoom.
    pub max_ideal: u32,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_RESOLUTION_TIERS.to_vec(),
            initial: INITIAL_PHOTO_RESOLUTION,
            max_ideal: MAX_IDEAL_RESOLUTION,
        }
    }
}

impl ResolutionConfig {
    fn validate(&self) -> Result<()> {
        if self.tiers.is_empty() {
            return Err(CragError::InvalidConfig(
                "resolution.tiers must not be empty".into(),
            ));
        }
        if self.tiers[0] == 0 {
            return Err(CragError::InvalidConfig(
                "resolution.tiers must be positive".into(),
            ));
        }
        if self.tiers.windows(2).any(|w| w[0] >= w[1]) {
            return Err(CragError::InvalidConfig(format!(
                "resolution.tiers must be strictly ascending: {:?}",
                self.tiers
            )));
        }
        if self.max_ideal == 0 {
            return Err(CragError::InvalidConfig(
                "resolution.max_ideal must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Height of one route row in the list.
    pub row_height: f32,
    /// Extra offset of the detection line below the list top.
    pub detection_margin: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            row_height: ROUTE_ROW_HEIGHT,
            detection_margin: SCROLL_DETECTION_MARGIN,
        }
    }
}

impl ScrollConfig {
    fn validate(&self) -> Result<()> {
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(CragError::InvalidConfig(format!(
                "scroll.row_height must be positive, got {}",
                self.row_height
            )));
        }
        if !self.detection_margin.is_finite() {
            return Err(CragError::InvalidConfig(
                "scroll.detection_margin must be finite".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub default_split_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_split_height: SPLIT_PANE_DEFAULT_HEIGHT,
        }
    }
}

impl LayoutConfig {
    fn validate(&self) -> Result<()> {
        if !(self.default_split_height.is_finite() && self.default_split_height >= 0.0) {
            return Err(CragError::InvalidConfig(format!(
                "layout.default_split_height must be >= 0, got {}",
                self.default_split_height
            )));
        }
        Ok(())
    }
}

/// Read-only user preferences relevant to the climbing view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Highlight the route under the list's detection line while scrolling.
    pub select_routes_by_scrolling: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            select_routes_by_scrolling: true,
        }
    }
}

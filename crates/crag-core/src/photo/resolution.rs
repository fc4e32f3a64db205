use crate::session::config::ResolutionConfig;
use crate::viewport::ViewportState;

use super::{PhotoKey, PhotoSet};

/// Resolution to request, and the one to show until it arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionChoice {
    /// Tier that fits the current viewport and zoom.
    pub target: u32,
    /// Tier to show right now. Equals `target` once it is loaded.
    pub display: u32,
    pub target_loaded: bool,
}

impl ResolutionChoice {
    fn settled(resolution: u32, loaded: bool) -> Self {
        Self {
            target: resolution,
            display: resolution,
            target_loaded: loaded,
        }
    }

    /// True while the caller still has to fetch `target`.
    pub fn needs_fetch(&self) -> bool {
        !self.target_loaded
    }
}

/// Pixel size the photo needs at the current viewport and zoom.
///
/// Zooming out below 1.0 never lowers the demand; the result is capped at
/// `max_ideal`.
pub fn ideal_resolution(viewport: &ViewportState, max_ideal: u32) -> u32 {
    let scale = viewport.zoom_scale.max(1.0);
    let ideal = (viewport.longest_side() * scale).ceil();
    if ideal >= max_ideal as f32 {
        max_ideal
    } else {
        ideal as u32
    }
}

/// Smallest tier at least `ideal`, else the largest tier.
///
/// `tiers` must be ascending. Returns `None` only for an empty list.
pub fn select_tier(tiers: &[u32], ideal: u32) -> Option<u32> {
    tiers
        .iter()
        .copied()
        .find(|&t| t >= ideal)
        .or_else(|| tiers.last().copied())
}

/// Pick the resolution of `photo` for the viewport, falling back to a loaded
/// tier while the target is still being fetched.
pub fn select_resolution(
    config: &ResolutionConfig,
    viewport: &ViewportState,
    photo: Option<&PhotoKey>,
    photos: &PhotoSet,
) -> ResolutionChoice {
    let Some(photo) = photo else {
        return ResolutionChoice::settled(config.initial, false);
    };

    let ideal = ideal_resolution(viewport, config.max_ideal);
    let Some(target) = select_tier(&config.tiers, ideal) else {
        return ResolutionChoice::settled(config.initial, photos.is_loaded(photo, config.initial));
    };

    if photos.is_loaded(photo, target) {
        return ResolutionChoice::settled(target, true);
    }

    let loaded = photos.loaded_resolutions(photo);
    let smaller = loaded.iter().copied().filter(|&r| r < target).max();
    let larger = loaded.iter().copied().filter(|&r| r > target).min();

    ResolutionChoice {
        target,
        display: smaller.or(larger).unwrap_or(target),
        target_loaded: false,
    }
}

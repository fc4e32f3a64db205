/// Supported Commons thumbnail widths, ascending.
pub const DEFAULT_RESOLUTION_TIERS: [u32; 8] = [200, 500, 800, 1000, 1500, 2000, 2500, 3000];

/// Resolution used before any photo or viewport is known.
pub const INITIAL_PHOTO_RESOLUTION: u32 = 200;

/// Upper bound for the ideal pixel size, whatever the zoom.
pub const MAX_IDEAL_RESOLUTION: u32 = 3000;

/// Height of one row in the route list, in CSS pixels.
pub const ROUTE_ROW_HEIGHT: f32 = 60.0;

/// Distance from the top of the route list to the detection line, on top of
/// one row height.
pub const SCROLL_DETECTION_MARGIN: f32 = 20.0;

/// Photo pane height used while the user has not dragged the divider.
pub const SPLIT_PANE_DEFAULT_HEIGHT: f32 = 500.0;

/// Prefix of every Wikimedia Commons file title.
pub const COMMONS_FILE_PREFIX: &str = "File:";

/// Tag key (and `key:N` family) holding crag photo file titles.
pub const COMMONS_TAG_KEY: &str = "wikimedia_commons";

/// Base URL for resized Commons images.
pub const COMMONS_FILE_PATH_URL: &str = "https://commons.wikimedia.org/wiki/Special:FilePath/";

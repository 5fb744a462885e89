/// Host-side constants for the browser glue. Effect tuning lives in
/// `core::constants` and `core::profile`.
use std::time::Duration;

// Element auto-mounted by `start` when present
pub const ROOT_ELEMENT_ID: &str = "backdrop-root";

// Mount options read from the root element
pub const DATA_DEVICE: &str = "data-device";
pub const DATA_LAYERS: &str = "data-layers";
pub const DATA_SEED: &str = "data-seed";
// Tag put on every canvas we append, so unmount only removes our own
pub const DATA_LAYER: &str = "data-backdrop-layer";

pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

// Badge sprites are served as `{ICON_BASE_URL}/{name}{ICON_EXT}`
pub const ICON_BASE_URL: &str = "/icons";
pub const ICON_EXT: &str = ".svg";

// Frame work above this is reported; warnings are rate limited
pub const FRAME_BUDGET: Duration = Duration::from_millis(12);
pub const BUDGET_WARN_INTERVAL: Duration = Duration::from_secs(5);

// DOM contract and presentation constants for the web frontend.
// Scene tuning values live in `portfolio_core::constants`.

// Mount points
pub const BACKDROP_MOUNT_ID: &str = "ambient-backdrop";
pub const CAROUSEL_ID: &str = "project-carousel";

// Classes applied to generated elements
pub const BACKDROP_CANVAS_CLASS: &str = "ambient-canvas";
pub const CAROUSEL_STRIP_CLASS: &str = "carousel-strip";
pub const CAROUSEL_ITEM_CLASS: &str = "carousel-item";
pub const DRAGGING_CLASS: &str = "dragging";

// Inline style for the backdrop canvas: fixed, full viewport, behind content,
// never the target of pointer events.
pub const BACKDROP_CANVAS_STYLE: &str =
    "position:fixed;top:0;left:0;width:100vw;height:100vh;z-index:-10;pointer-events:none;display:block";

// Backing-store size is rounded to whole pixels; the surface is never
// configured smaller than this.
pub const MIN_SURFACE_PX: u32 = 1;

/// Host-page wiring constants for the browser front-end.
///
/// Element ids and CSS hooks the page markup is expected to provide, plus
/// display limits applied when sizing the canvas.
// Mount points
pub const CANVAS_ID: &str = "splash-canvas";
pub const TOGGLE_ID: &str = "splash-toggle";
pub const TOGGLE_OFF_CLASS: &str = "is-off"; // added to the toggle while splashes are disabled

// Backing store
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0; // sharper than this only costs fill rate

// Anchor scrolling
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = -80.0; // clears the fixed nav bar

// Media query that keeps the engine unmounted
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

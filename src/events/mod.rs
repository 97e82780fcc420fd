pub mod anchors;
pub mod pointer;
pub mod toggle;

pub use anchors::wire_anchor_links;
pub use pointer::{wire_resize, wire_spawn_listeners};
pub use toggle::{apply_toggle_state, wire_toggle};

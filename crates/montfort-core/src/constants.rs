// Animation tuning constants shared by the core pipeline and the web frontend.

// Frame stepping
pub const MAX_FRAME_DT_SEC: f32 = 1.0 / 30.0; // cap dt on frame-rate drops
pub const SPRING_SETTLE_EPS: f32 = 1e-3; // convergence tolerance for springs

// Cursor follower spring presets (stiffness, damping)
pub const CURSOR_FAST_STIFFNESS: f32 = 300.0;
pub const CURSOR_FAST_DAMPING: f32 = 25.0;
pub const CURSOR_SLOW_STIFFNESS: f32 = 200.0;
pub const CURSOR_SLOW_DAMPING: f32 = 40.0;

// Mouse trail
pub const TRAIL_CAPACITY: usize = 12;
pub const TRAIL_LIFETIME_MS: f64 = 80.0;
pub const TRAIL_SCALE_MIN: f32 = 0.5;
pub const TRAIL_SCALE_SPAN: f32 = 0.5;

// Pinned section transform curves
pub const PIN_CONTENT_SCALE_SPAN: f32 = 0.1; // 1.0 -> 1.1 over the pin range
pub const PIN_CONTENT_OPACITY_DROP: f32 = 0.3; // 1.0 -> 0.7
pub const PIN_BACKGROUND_SCALE_BASE: f32 = 1.1;
pub const PIN_BACKGROUND_SCALE_SPAN: f32 = 0.2; // 1.1 -> 1.3

// Horizontal gallery center emphasis
pub const GALLERY_ITEM_SCALE_BASE: f32 = 0.9;
pub const GALLERY_ITEM_SCALE_SPAN: f32 = 0.1;
pub const GALLERY_ITEM_OPACITY_BASE: f32 = 0.5;
pub const GALLERY_ITEM_OPACITY_SPAN: f32 = 0.5;
pub const GALLERY_ITEM_LIFT_PX: f32 = 20.0; // content rises as the item centers

// Parallax defaults
pub const PARALLAX_BACKGROUND_SPEED: f32 = 0.3;
pub const PARALLAX_CONTENT_SPEED: f32 = 0.8;
pub const PARALLAX_CONTENT_TRAVEL_PX: f32 = 30.0;
pub const PARALLAX_ZOOM_MAX: f32 = 1.1;
pub const PARALLAX_EDGE_OPACITY: f32 = 0.6;

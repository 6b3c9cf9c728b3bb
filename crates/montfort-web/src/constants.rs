// DOM contract and frontend tuning. The host page provides the elements
// named here; anything missing degrades to a no-op for that effect.

// Element ids
pub const FX_CANVAS_ID: &str = "fx-canvas";
pub const FX_FALLBACK_ID: &str = "fx-fallback";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const MUSIC_TOGGLE_ID: &str = "music-toggle";
pub const GALLERY_SECTION_ID: &str = "gallery";

// Section selectors
pub const PINNED_SECTION_SELECTOR: &str = ".pinned-section";
pub const PARALLAX_SECTION_SELECTOR: &str = ".parallax-section";
pub const PIN_CONTENT_SELECTOR: &str = ".pin-content";
pub const PIN_BACKGROUND_SELECTOR: &str = ".pin-background";
pub const PARALLAX_BACKGROUND_SELECTOR: &str = ".parallax-bg";
pub const PARALLAX_CONTENT_SELECTOR: &str = ".parallax-content";
pub const GALLERY_STRIP_SELECTOR: &str = ".gallery-strip";
pub const GALLERY_ITEM_SELECTOR: &str = ".gallery-item";
pub const GALLERY_ITEM_CONTENT_SELECTOR: &str = ".gallery-content";
pub const CURSOR_HOVER_SELECTOR: &str = "a, button, [data-cursor-hover]";

// Data attributes
pub const PIN_DISTANCE_ATTR: &str = "data-pin-distance";
pub const PARALLAX_BG_SPEED_ATTR: &str = "data-bg-speed";
pub const PARALLAX_CONTENT_SPEED_ATTR: &str = "data-content-speed";

// Added to images whose source failed to load; the stylesheet supplies the
// placeholder look.
pub const IMAGE_FALLBACK_CLASS: &str = "img-fallback";

// Theme persistence
pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";

// Ambient music
pub const MUSIC_URL: &str =
    "https://cdn.pixabay.com/download/audio/2022/02/22/audio_d1718ab41b.mp3";
pub const MUSIC_VOLUME: f64 = 0.1;

// Cursor glow sizing (css px)
pub const CURSOR_GLOW_SIZE: f32 = 80.0;
pub const CURSOR_GLOW_SIZE_HOVER: f32 = 150.0;
pub const CURSOR_HALO_SIZE: f32 = 120.0;
pub const CURSOR_HALO_SIZE_HOVER: f32 = 200.0;
pub const TRAIL_SHAPE_SIZE: f32 = 16.0;

// Distortion effect uniforms
pub const FX_STRENGTH: f32 = 0.5;
pub const FX_RADIUS: f32 = 0.4;
// Per-frame lerp factor pulling the shader's mouse uniform toward the pointer
pub const FX_POINTER_SMOOTHING: f32 = 0.1;

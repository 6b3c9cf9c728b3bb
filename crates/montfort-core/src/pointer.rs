use glam::Vec2;

/// Latest known pointer position, in client pixels and viewport-normalized UV.
///
/// A single writer (the pointer-move handler) updates this once per event;
/// every consumer reads the same sample within a frame. On touch-only devices
/// no sample ever arrives, so the default parks the pointer at the viewport
/// center and effects built on it stay idle.
#[derive(Clone, Copy, Debug)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub normalized_x: f32,
    pub normalized_y: f32,
    pub timestamp_ms: f64,
}

impl Default for PointerSample {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            normalized_x: 0.5,
            normalized_y: 0.5,
            timestamp_ms: 0.0,
        }
    }
}

impl PointerSample {
    /// Build a sample from client coordinates. A degenerate viewport keeps
    /// the normalized position at center rather than dividing by zero.
    pub fn from_client(
        x: f32,
        y: f32,
        viewport_width: f32,
        viewport_height: f32,
        timestamp_ms: f64,
    ) -> Self {
        let (nx, ny) = if viewport_width > 0.0 && viewport_height > 0.0 {
            (
                (x / viewport_width).clamp(0.0, 1.0),
                (y / viewport_height).clamp(0.0, 1.0),
            )
        } else {
            (0.5, 0.5)
        };
        Self {
            x,
            y,
            normalized_x: nx,
            normalized_y: ny,
            timestamp_ms,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn uv(&self) -> [f32; 2] {
        [self.normalized_x, self.normalized_y]
    }
}

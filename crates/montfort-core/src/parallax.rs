use crate::constants::{
    PARALLAX_BACKGROUND_SPEED, PARALLAX_CONTENT_SPEED, PARALLAX_CONTENT_TRAVEL_PX,
    PARALLAX_EDGE_OPACITY, PARALLAX_ZOOM_MAX,
};
use crate::mapper::{map_range, KeyframeTrack};

/// Per-section parallax tuning.
#[derive(Clone, Copy, Debug)]
pub struct ParallaxParams {
    /// Fraction of section height the background counter-scrolls.
    pub background_speed: f32,
    /// Scales the content's counter-travel in pixels.
    pub content_speed: f32,
    pub zoom: bool,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            background_speed: PARALLAX_BACKGROUND_SPEED,
            content_speed: PARALLAX_CONTENT_SPEED,
            zoom: true,
        }
    }
}

/// Style values for one parallax section at a given view progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxTransforms {
    /// Background translateY as a percentage of its own height.
    pub background_y_percent: f32,
    /// Content translateY in pixels, moving against the background.
    pub content_y_px: f32,
    pub background_scale: f32,
    pub content_opacity: f32,
}

/// Zoom and edge-fade curves, built once per section and sampled per frame.
#[derive(Clone, Debug)]
pub struct ParallaxTracks {
    params: ParallaxParams,
    zoom: KeyframeTrack,
    opacity: KeyframeTrack,
}

impl ParallaxTracks {
    pub fn new(params: ParallaxParams) -> Self {
        let zoom_out = if params.zoom {
            vec![PARALLAX_ZOOM_MAX, 1.0, PARALLAX_ZOOM_MAX]
        } else {
            vec![1.0, 1.0, 1.0]
        };
        // Stops are fixed and strictly increasing, so construction cannot fail.
        let zoom = KeyframeTrack::new(vec![0.0, 0.5, 1.0], zoom_out)
            .unwrap_or_else(|_| unreachable!("static zoom stops"));
        let opacity = KeyframeTrack::new(
            vec![0.0, 0.2, 0.8, 1.0],
            vec![PARALLAX_EDGE_OPACITY, 1.0, 1.0, PARALLAX_EDGE_OPACITY],
        )
        .unwrap_or_else(|_| unreachable!("static opacity stops"));
        Self {
            params,
            zoom,
            opacity,
        }
    }

    pub fn at(&self, progress: f32) -> ParallaxTransforms {
        let p = progress.clamp(0.0, 1.0);
        let bg_span = self.params.background_speed * 100.0;
        let content_span = self.params.content_speed * PARALLAX_CONTENT_TRAVEL_PX;
        ParallaxTransforms {
            background_y_percent: map_range(p, 0.0, 1.0, -bg_span, bg_span),
            content_y_px: map_range(p, 0.0, 1.0, content_span, -content_span),
            background_scale: self.zoom.sample(p),
            content_opacity: self.opacity.sample(p),
        }
    }
}

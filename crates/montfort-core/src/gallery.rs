use crate::constants::{
    GALLERY_ITEM_LIFT_PX, GALLERY_ITEM_OPACITY_BASE, GALLERY_ITEM_OPACITY_SPAN,
    GALLERY_ITEM_SCALE_BASE, GALLERY_ITEM_SCALE_SPAN,
};

/// Maps vertical scroll progress to the horizontal translation of a wide
/// content strip, plus per-item emphasis as items cross the viewport center.
#[derive(Clone, Copy, Debug)]
pub struct HorizontalMapper {
    pub content_width: f32,
    pub viewport_width: f32,
}

/// Horizontal extent of one gallery item within the unscrolled strip.
#[derive(Clone, Copy, Debug)]
pub struct ItemBounds {
    pub left: f32,
    pub width: f32,
}

/// Style values for an item based on its distance from the viewport center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemEmphasis {
    pub scale: f32,
    pub opacity: f32,
    pub lift_y: f32,
}

impl HorizontalMapper {
    pub fn new(content_width: f32, viewport_width: f32) -> Self {
        Self {
            content_width,
            viewport_width,
        }
    }

    /// Total distance the strip travels; also the pin distance for the
    /// gallery section. Zero when the content fits the viewport.
    #[inline]
    pub fn overflow(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Strip translation for a 0..1 scroll progress. Always 0 when there is
    /// nothing to scroll.
    pub fn translate_x(&self, progress: f32) -> f32 {
        -progress.clamp(0.0, 1.0) * self.overflow()
    }

    /// Progress of the viewport center through an item: 0 when the item's
    /// left edge reaches center, 1 when its right edge passes it.
    pub fn item_center_progress(&self, item: ItemBounds, translate_x: f32) -> f32 {
        if item.width <= 0.0 {
            return 0.0;
        }
        let viewport_center = self.viewport_width * 0.5;
        let item_left = item.left + translate_x;
        ((viewport_center - item_left) / item.width).clamp(0.0, 1.0)
    }

    /// 1 at dead center, falling linearly to 0 at either edge of the pass.
    #[inline]
    pub fn center_proximity(center_progress: f32) -> f32 {
        (1.0 - 2.0 * (center_progress - 0.5).abs()).clamp(0.0, 1.0)
    }

    pub fn item_emphasis(&self, item: ItemBounds, translate_x: f32) -> ItemEmphasis {
        let cp = Self::center_proximity(self.item_center_progress(item, translate_x));
        ItemEmphasis {
            scale: GALLERY_ITEM_SCALE_BASE + cp * GALLERY_ITEM_SCALE_SPAN,
            opacity: GALLERY_ITEM_OPACITY_BASE + cp * GALLERY_ITEM_OPACITY_SPAN,
            lift_y: GALLERY_ITEM_LIFT_PX - cp * GALLERY_ITEM_LIFT_PX,
        }
    }
}

/// Vertical scroll state captured once per animation frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollSample {
    pub scroll_y: f32,
    pub viewport_height: f32,
}

impl ScrollSample {
    pub fn new(scroll_y: f32, viewport_height: f32) -> Self {
        Self {
            scroll_y: scroll_y.max(0.0),
            viewport_height,
        }
    }
}

/// Scroll interval over which a section is active.
///
/// Progress is a pure function of scroll position, so scrolling back up
/// replays the same values in reverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRange {
    pub start: f32,
    pub end: f32,
}

impl SectionRange {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() <= 0.0
    }

    /// Clamped 0..1 progress through the range. Degenerate ranges report 0
    /// instead of dividing by zero.
    #[inline]
    pub fn progress(&self, scroll_y: f32) -> f32 {
        let len = self.len();
        if len <= 0.0 {
            return 0.0;
        }
        ((scroll_y - self.start) / len).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn contains(&self, scroll_y: f32) -> bool {
        scroll_y >= self.start && scroll_y <= self.end
    }
}

/// Range over which a section travels through the viewport: progress 0 when
/// its top enters at the bottom edge, 1 when its bottom leaves at the top.
pub fn view_range(section_top: f32, section_height: f32, viewport_height: f32) -> SectionRange {
    SectionRange::new(section_top - viewport_height, section_top + section_height)
}

/// Range for a section pinned at the top of the viewport for `pin_distance`
/// pixels of scroll.
pub fn pin_range(section_top: f32, pin_distance: f32) -> SectionRange {
    SectionRange::new(section_top, section_top + pin_distance.max(0.0))
}

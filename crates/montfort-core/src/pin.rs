use crate::constants::{
    PIN_BACKGROUND_SCALE_BASE, PIN_BACKGROUND_SCALE_SPAN, PIN_CONTENT_OPACITY_DROP,
    PIN_CONTENT_SCALE_SPAN,
};
use crate::scroll::SectionRange;

/// Where the viewport sits relative to a pinned section's scroll range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinPhase {
    Before,
    Pinned,
    After,
}

/// Style values the frontend applies while a section is pinned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinTransforms {
    pub content_scale: f32,
    pub content_opacity: f32,
    pub background_scale: f32,
}

impl PinTransforms {
    pub fn at(progress: f32) -> Self {
        let p = progress.clamp(0.0, 1.0);
        Self {
            content_scale: 1.0 + p * PIN_CONTENT_SCALE_SPAN,
            content_opacity: 1.0 - p * PIN_CONTENT_OPACITY_DROP,
            background_scale: PIN_BACKGROUND_SCALE_BASE + p * PIN_BACKGROUND_SCALE_SPAN,
        }
    }
}

/// One frame's outcome: the phase, the in-range progress, and whether the
/// phase changed since the previous update (the frontend only touches
/// `position: fixed` on transitions).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinUpdate {
    pub phase: PinPhase,
    pub progress: f32,
    pub phase_changed: bool,
}

/// Per-section pin state machine driven solely by scroll position.
///
/// BEFORE -> PINNED at `range.start`, PINNED -> AFTER past `range.end`, and
/// both transitions reverse exactly when scrolling back up. A stale range
/// after layout changes is recovered via [`PinController::set_range`].
#[derive(Clone, Debug)]
pub struct PinController {
    range: SectionRange,
    phase: PinPhase,
}

impl PinController {
    pub fn new(range: SectionRange) -> Self {
        Self {
            range,
            phase: PinPhase::Before,
        }
    }

    #[inline]
    pub fn range(&self) -> SectionRange {
        self.range
    }

    #[inline]
    pub fn phase(&self) -> PinPhase {
        self.phase
    }

    /// Replace the scroll range after re-measurement. The phase is
    /// re-derived on the next update rather than guessed here.
    pub fn set_range(&mut self, range: SectionRange) {
        self.range = range;
    }

    pub fn update(&mut self, scroll_y: f32) -> PinUpdate {
        let phase = if scroll_y < self.range.start {
            PinPhase::Before
        } else if scroll_y > self.range.end {
            PinPhase::After
        } else {
            PinPhase::Pinned
        };
        let phase_changed = phase != self.phase;
        self.phase = phase;
        PinUpdate {
            phase,
            progress: self.range.progress(scroll_y),
            phase_changed,
        }
    }
}

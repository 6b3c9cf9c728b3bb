use crate::constants::{TRAIL_CAPACITY, TRAIL_LIFETIME_MS};
use glam::Vec2;
use smallvec::SmallVec;

/// One morphing shape in the cursor trail.
#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub id: u64,
    pub scale: f32,
    pub rotation_deg: f32,
    pub created_at_ms: f64,
}

/// Bounded FIFO of trail points. A new point past capacity evicts the oldest,
/// and [`TrailBuffer::prune`] drops heads past their lifetime. Eviction is a
/// visual nicety, not time-critical.
#[derive(Clone, Debug, Default)]
pub struct TrailBuffer {
    points: SmallVec<[TrailPoint; TRAIL_CAPACITY]>,
    next_id: u64,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Vec2, scale: f32, rotation_deg: f32, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        if self.points.len() == TRAIL_CAPACITY {
            self.points.remove(0);
        }
        self.points.push(TrailPoint {
            pos,
            id,
            scale,
            rotation_deg,
            created_at_ms: now_ms,
        });
        id
    }

    /// Drop points older than the trail lifetime.
    pub fn prune(&mut self, now_ms: f64) {
        while let Some(head) = self.points.first() {
            if now_ms - head.created_at_ms >= TRAIL_LIFETIME_MS {
                self.points.remove(0);
            } else {
                break;
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

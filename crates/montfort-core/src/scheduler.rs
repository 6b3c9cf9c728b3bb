use crate::constants::MAX_FRAME_DT_SEC;
use crate::spring::Spring;
use fnv::FnvHashMap;

/// Handle to a spring registered with a [`FrameScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpringHandle(u64);

/// Single per-frame driver for every live spring.
///
/// Components register springs instead of running their own timers, so one
/// tick advances everything with the same capped dt. Unregistering on
/// unmount is mandatory; a leaked handle keeps ticking forever and frame
/// time compounds as components churn.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    springs: FnvHashMap<u64, Spring>,
    next_id: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, spring: Spring) -> SpringHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.springs.insert(id, spring);
        SpringHandle(id)
    }

    pub fn unregister(&mut self, handle: SpringHandle) {
        if self.springs.remove(&handle.0).is_none() {
            log::warn!("[scheduler] unregister of unknown spring {}", handle.0);
        }
    }

    pub fn len(&self) -> usize {
        self.springs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    pub fn set_target(&mut self, handle: SpringHandle, target: f32) {
        if let Some(s) = self.springs.get_mut(&handle.0) {
            s.set_target(target);
        }
    }

    pub fn reset_to(&mut self, handle: SpringHandle, value: f32) {
        if let Some(s) = self.springs.get_mut(&handle.0) {
            s.reset_to(value);
        }
    }

    #[inline]
    pub fn value(&self, handle: SpringHandle) -> Option<f32> {
        self.springs.get(&handle.0).map(|s| s.current)
    }

    #[inline]
    pub fn spring(&self, handle: SpringHandle) -> Option<&Spring> {
        self.springs.get(&handle.0)
    }

    /// Advance every registered spring by the same frame delta.
    pub fn tick(&mut self, dt_sec: f32) {
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        if dt <= 0.0 {
            return;
        }
        for spring in self.springs.values_mut() {
            spring.step(dt);
        }
    }
}

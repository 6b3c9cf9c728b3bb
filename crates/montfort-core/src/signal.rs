use std::cell::{Cell, RefCell};

/// Identifier returned by [`Signal::subscribe`]; pass it back to
/// [`Signal::unsubscribe`] when the observer unmounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Observer<T> = Box<dyn Fn(T)>;

/// Single-writer, many-reader value for the per-frame sample bus.
///
/// One event handler writes (last write wins), any number of consumers read
/// the same value within a frame. Single UI thread, so interior mutability
/// needs no locking; what it does need is subscription cleanup, which is why
/// subscriptions are explicit rather than ambient.
pub struct Signal<T: Copy> {
    value: Cell<T>,
    next_id: Cell<u64>,
    observers: RefCell<Vec<(u64, Observer<T>)>>,
}

impl<T: Copy + Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy> Signal<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: Cell::new(initial),
            next_id: Cell::new(0),
            observers: RefCell::new(Vec::new()),
        }
    }

    #[inline]
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Replace the value and notify observers in subscription order.
    pub fn set(&self, value: T) {
        self.value.set(value);
        for (_, observer) in self.observers.borrow().iter() {
            observer(value);
        }
    }

    /// Replace the value without notifying. Used for per-frame sampling
    /// where consumers poll [`Signal::get`] instead of reacting per event.
    #[inline]
    pub fn set_silent(&self, value: T) {
        self.value.set(value);
    }

    pub fn subscribe(&self, observer: impl Fn(T) + 'static) -> SubscriptionId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.observers.borrow_mut().push((id, Box::new(observer)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.observers.borrow_mut().retain(|(oid, _)| *oid != id.0);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }
}

use montfort_core::{FrameScheduler, Signal, Spring, Theme};
use std::cell::RefCell;
use std::rc::Rc;

const DT: f32 = 1.0 / 60.0;

#[test]
fn all_registered_springs_advance_together() {
    let mut sched = FrameScheduler::new();
    let a = sched.register(Spring::new(0.0, 300.0, 35.0));
    let b = sched.register(Spring::new(0.0, 300.0, 35.0));
    sched.set_target(a, 1.0);
    sched.set_target(b, 1.0);

    for _ in 0..10 {
        sched.tick(DT);
    }
    // Identical springs driven by the same dt stay in lockstep.
    assert_eq!(sched.value(a), sched.value(b));
    assert!(sched.value(a).is_some_and(|v| v > 0.0));
}

#[test]
fn unregistered_spring_stops_ticking() {
    let mut sched = FrameScheduler::new();
    let h = sched.register(Spring::new(0.0, 300.0, 35.0));
    sched.set_target(h, 1.0);
    sched.tick(DT);
    assert!(sched.value(h).is_some());

    sched.unregister(h);
    assert!(sched.value(h).is_none());
    assert!(sched.is_empty());
    sched.tick(DT); // must not panic on an empty registry
}

#[test]
fn reset_through_scheduler_snaps_value() {
    let mut sched = FrameScheduler::new();
    let h = sched.register(Spring::new(0.0, 400.0, 25.0));
    sched.set_target(h, 1.0);
    for _ in 0..5 {
        sched.tick(DT);
    }
    sched.reset_to(h, 0.25);
    assert_eq!(sched.value(h), Some(0.25));
    let s = sched.spring(h).unwrap();
    assert_eq!(s.velocity, 0.0);
    assert_eq!(s.target, 0.25);
}

#[test]
fn scheduler_converges_many_springs() {
    let mut sched = FrameScheduler::new();
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let stiffness = 100.0 + i as f32 * 25.0;
            sched.register(Spring::new(0.0, stiffness, Spring::critical_damping(stiffness)))
        })
        .collect();
    for &h in &handles {
        sched.set_target(h, 1.0);
    }
    for _ in 0..600 {
        sched.tick(DT);
    }
    for &h in &handles {
        assert!(sched.spring(h).unwrap().settled(1e-3));
    }
}

#[test]
fn signal_notifies_subscribers_until_unsubscribed() {
    let signal = Signal::new(0.0f32);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_cb = seen.clone();
    let sub = signal.subscribe(move |v| seen_cb.borrow_mut().push(v));

    signal.set(1.0);
    signal.set(2.0);
    signal.unsubscribe(sub);
    signal.set(3.0);

    assert_eq!(*seen.borrow(), vec![1.0, 2.0]);
    assert_eq!(signal.get(), 3.0);
    assert_eq!(signal.observer_count(), 0);
}

#[test]
fn signal_silent_set_skips_observers() {
    let signal = Signal::new(0u32);
    let count = Rc::new(RefCell::new(0usize));
    let count_cb = count.clone();
    let _sub = signal.subscribe(move |_| *count_cb.borrow_mut() += 1);

    signal.set_silent(7);
    assert_eq!(signal.get(), 7);
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn theme_double_toggle_round_trips() {
    for start in [Theme::Light, Theme::Dark] {
        assert_ne!(start.toggled(), start);
        assert_eq!(start.toggled().toggled(), start);
    }
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::Dark.as_str(), "dark");
}

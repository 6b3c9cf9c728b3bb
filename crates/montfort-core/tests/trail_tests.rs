use glam::Vec2;
use montfort_core::{TrailBuffer, TRAIL_CAPACITY, TRAIL_LIFETIME_MS};

#[test]
fn capacity_eviction_keeps_newest_in_order() {
    let mut trail = TrailBuffer::new();
    for i in 0..20 {
        trail.push(Vec2::new(i as f32, 0.0), 1.0, 0.0, i as f64);
    }
    assert_eq!(trail.len(), TRAIL_CAPACITY);

    let ids: Vec<u64> = trail.iter().map(|p| p.id).collect();
    let expected: Vec<u64> = (8..20).collect();
    assert_eq!(ids, expected, "exactly the 12 most recent, insertion order");
}

#[test]
fn prune_drops_expired_heads_only() {
    let mut trail = TrailBuffer::new();
    trail.push(Vec2::ZERO, 1.0, 0.0, 0.0);
    trail.push(Vec2::ZERO, 1.0, 0.0, 50.0);
    trail.push(Vec2::ZERO, 1.0, 0.0, 100.0);

    trail.prune(50.0 + TRAIL_LIFETIME_MS);
    let ids: Vec<u64> = trail.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn prune_keeps_fresh_points() {
    let mut trail = TrailBuffer::new();
    trail.push(Vec2::ZERO, 1.0, 0.0, 1000.0);
    trail.prune(1000.0 + TRAIL_LIFETIME_MS - 1.0);
    assert_eq!(trail.len(), 1);
}

#[test]
fn ids_stay_monotonic_across_eviction() {
    let mut trail = TrailBuffer::new();
    let mut last = None;
    for i in 0..40 {
        let id = trail.push(Vec2::ZERO, 1.0, 0.0, i as f64);
        if let Some(prev) = last {
            assert!(id > prev);
        }
        last = Some(id);
    }
}

#[test]
fn clear_empties_the_buffer() {
    let mut trail = TrailBuffer::new();
    for i in 0..5 {
        trail.push(Vec2::ZERO, 1.0, 0.0, i as f64);
    }
    trail.clear();
    assert!(trail.is_empty());
}

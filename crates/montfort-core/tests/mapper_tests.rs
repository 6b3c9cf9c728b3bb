use montfort_core::{lerp, map_range, KeyframeTrack, TrackError};

#[test]
fn track_interpolates_linearly_between_stops() {
    let t = KeyframeTrack::pair([0.0, 1.0], [0.0, 100.0]).unwrap();
    assert_eq!(t.sample(0.0), 0.0);
    assert_eq!(t.sample(0.5), 50.0);
    assert_eq!(t.sample(1.0), 100.0);
}

#[test]
fn track_clamps_outside_input_range() {
    let t = KeyframeTrack::pair([0.2, 0.8], [10.0, 20.0]).unwrap();
    assert_eq!(t.sample(0.2 - 0.001), 10.0);
    assert_eq!(t.sample(-5.0), 10.0);
    assert_eq!(t.sample(0.8 + 0.001), 20.0);
    assert_eq!(t.sample(5.0), 20.0);
}

#[test]
fn track_multi_stop_edge_fade() {
    // The parallax fade curve: dim at edges, full in the middle.
    let t = KeyframeTrack::new(vec![0.0, 0.2, 0.8, 1.0], vec![0.6, 1.0, 1.0, 0.6]).unwrap();
    assert!((t.sample(0.0) - 0.6).abs() < 1e-6);
    assert!((t.sample(0.1) - 0.8).abs() < 1e-6);
    assert!((t.sample(0.5) - 1.0).abs() < 1e-6);
    assert!((t.sample(0.9) - 0.8).abs() < 1e-6);
    assert!((t.sample(1.0) - 0.6).abs() < 1e-6);
}

#[test]
fn track_is_monotonic_for_monotonic_output() {
    let t = KeyframeTrack::new(vec![0.0, 0.3, 1.0], vec![-4000.0, -1000.0, 0.0]).unwrap();
    let mut prev = f32::NEG_INFINITY;
    for i in 0..=100 {
        let v = t.sample(i as f32 / 100.0);
        assert!(v >= prev, "not monotonic at step {i}: {v} < {prev}");
        prev = v;
    }
}

#[test]
fn track_rejects_bad_ranges() {
    assert_eq!(
        KeyframeTrack::new(vec![0.0], vec![1.0]),
        Err(TrackError::TooFewStops(1))
    );
    assert_eq!(
        KeyframeTrack::new(vec![0.0, 1.0], vec![1.0]),
        Err(TrackError::LengthMismatch {
            input: 2,
            output: 1
        })
    );
    assert_eq!(
        KeyframeTrack::new(vec![0.0, 0.5, 0.5, 1.0], vec![0.0; 4]),
        Err(TrackError::NotIncreasing(2))
    );
    assert_eq!(
        KeyframeTrack::new(vec![1.0, 0.0], vec![0.0, 1.0]),
        Err(TrackError::NotIncreasing(1))
    );
}

#[test]
fn map_range_matches_pair_track() {
    let t = KeyframeTrack::pair([0.0, 2.0], [1.0, 3.0]).unwrap();
    for i in 0..=20 {
        let v = i as f32 * 0.2 - 1.0; // sweep beyond both ends
        assert!((map_range(v, 0.0, 2.0, 1.0, 3.0) - t.sample(v)).abs() < 1e-6);
    }
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}

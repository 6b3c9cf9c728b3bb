use montfort_core::{HorizontalMapper, ItemBounds, ParallaxParams, ParallaxTracks};

#[test]
fn translate_matches_reference_values() {
    let m = HorizontalMapper::new(5000.0, 1000.0);
    assert_eq!(m.translate_x(0.0), 0.0);
    assert_eq!(m.translate_x(0.5), -2000.0);
    assert_eq!(m.translate_x(1.0), -4000.0);
}

#[test]
fn translate_pins_to_zero_when_content_fits() {
    let m = HorizontalMapper::new(900.0, 1000.0);
    assert_eq!(m.overflow(), 0.0);
    for i in 0..=10 {
        assert_eq!(m.translate_x(i as f32 / 10.0), 0.0);
    }
}

#[test]
fn translate_clamps_out_of_range_progress() {
    let m = HorizontalMapper::new(3000.0, 1000.0);
    assert_eq!(m.translate_x(-0.5), 0.0);
    assert_eq!(m.translate_x(1.5), -2000.0);
}

#[test]
fn item_centered_gets_full_emphasis() {
    let m = HorizontalMapper::new(5000.0, 1000.0);
    // 400-wide item whose center sits exactly at the viewport center (500)
    // once the strip has translated by -1000.
    let item = ItemBounds {
        left: 1300.0,
        width: 400.0,
    };
    let cp = m.item_center_progress(item, -1000.0);
    assert!((cp - 0.5).abs() < 1e-6);

    let e = m.item_emphasis(item, -1000.0);
    assert!((e.scale - 1.0).abs() < 1e-6);
    assert!((e.opacity - 1.0).abs() < 1e-6);
    assert!(e.lift_y.abs() < 1e-6);
}

#[test]
fn item_off_center_gets_reduced_emphasis() {
    let m = HorizontalMapper::new(5000.0, 1000.0);
    let item = ItemBounds {
        left: 1300.0,
        width: 400.0,
    };
    // Left edge exactly at viewport center: emphasis floor.
    let e = m.item_emphasis(item, -800.0);
    assert!((e.scale - 0.9).abs() < 1e-6);
    assert!((e.opacity - 0.5).abs() < 1e-6);
    assert!((e.lift_y - 20.0).abs() < 1e-6);

    // Far off screen stays clamped at the floor.
    let far = m.item_emphasis(item, 0.0);
    assert_eq!(far.scale, e.scale);
    assert_eq!(far.opacity, e.opacity);
}

#[test]
fn center_proximity_is_symmetric() {
    for i in 0..=50 {
        let t = i as f32 / 100.0;
        let a = HorizontalMapper::center_proximity(0.5 - t);
        let b = HorizontalMapper::center_proximity(0.5 + t);
        assert!((a - b).abs() < 1e-6, "asymmetric at offset {t}");
    }
    assert_eq!(HorizontalMapper::center_proximity(0.5), 1.0);
    assert_eq!(HorizontalMapper::center_proximity(0.0), 0.0);
    assert_eq!(HorizontalMapper::center_proximity(1.0), 0.0);
}

#[test]
fn zero_width_item_reports_zero_progress() {
    let m = HorizontalMapper::new(5000.0, 1000.0);
    let item = ItemBounds {
        left: 100.0,
        width: 0.0,
    };
    assert_eq!(m.item_center_progress(item, -50.0), 0.0);
}

#[test]
fn parallax_transforms_at_edges_and_middle() {
    let tracks = ParallaxTracks::new(ParallaxParams::default());

    let start = tracks.at(0.0);
    assert!((start.background_y_percent + 30.0).abs() < 1e-4);
    assert!((start.content_y_px - 24.0).abs() < 1e-4);
    assert!((start.background_scale - 1.1).abs() < 1e-6);
    assert!((start.content_opacity - 0.6).abs() < 1e-6);

    let mid = tracks.at(0.5);
    assert!(mid.background_y_percent.abs() < 1e-4);
    assert!(mid.content_y_px.abs() < 1e-4);
    assert!((mid.background_scale - 1.0).abs() < 1e-6);
    assert!((mid.content_opacity - 1.0).abs() < 1e-6);

    let end = tracks.at(1.0);
    assert!((end.background_y_percent - 30.0).abs() < 1e-4);
    assert!((end.content_y_px + 24.0).abs() < 1e-4);
}

#[test]
fn parallax_zoom_can_be_disabled() {
    let tracks = ParallaxTracks::new(ParallaxParams {
        zoom: false,
        ..ParallaxParams::default()
    });
    for i in 0..=10 {
        let t = tracks.at(i as f32 / 10.0);
        assert_eq!(t.background_scale, 1.0);
    }
}

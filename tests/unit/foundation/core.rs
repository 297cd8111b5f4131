use super::*;

#[test]
fn fps_new_rejects_zero_numerator_and_denominator() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(24, 0).is_err());
    assert!(Fps::new(24, 1).is_ok());
}

#[test]
fn fps_tick_secs_is_the_reciprocal() {
    let fps = Fps::new(24, 1).unwrap();
    assert!((fps.tick_secs() - 1.0 / 24.0).abs() < 1e-12);
    assert!((fps.as_f64() - 24.0).abs() < 1e-12);

    let ntsc = Fps::new(30_000, 1_001).unwrap();
    assert!((ntsc.as_f64() - 29.97).abs() < 0.01);
}

#[test]
fn ticks_in_secs_uses_floor_semantics() {
    let fps = Fps::new(24, 1).unwrap();
    assert_eq!(fps.ticks_in_secs_floor(1.0), 24);
    assert_eq!(fps.ticks_in_secs_floor(0.99), 23);
    assert_eq!(fps.ticks_in_secs_floor(0.0), 0);
    assert_eq!(fps.ticks_in_secs_floor(-3.0), 0);
}

#[test]
fn viewport_rejects_zero_dimensions() {
    assert!(Viewport::new(0, 40).is_err());
    assert!(Viewport::new(60, 0).is_err());
    let vp = Viewport::new(60, 40).unwrap();
    assert_eq!(vp.cells(), 2400);
}

#[test]
fn frame_index_orders_by_value() {
    assert!(FrameIndex(2) < FrameIndex(10));
    assert_eq!(FrameIndex(7), FrameIndex(7));
}

//! Tests for BoundingBox conversion and clamping.

use geo_common::BoundingBox;

// ============================================================================
// Constructor / conversion tests
// ============================================================================

#[test]
fn test_bbox_new() {
    let bbox = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
    assert_eq!(bbox.min_x, -180.0);
    assert_eq!(bbox.min_y, -90.0);
    assert_eq!(bbox.max_x, 180.0);
    assert_eq!(bbox.max_y, 90.0);
}

#[test]
fn test_bbox_from_tuple_and_back() {
    let bbox: BoundingBox = (170.0, -10.0, -170.0, 10.0).into();
    assert_eq!(bbox.min_x, 170.0);
    assert_eq!(bbox.max_x, -170.0);

    let tuple: (f64, f64, f64, f64) = bbox.into();
    assert_eq!(tuple, (170.0, -10.0, -170.0, 10.0));
}

#[test]
fn test_bbox_from_array() {
    let bbox = BoundingBox::from([1.0, 2.0, 3.0, 4.0]);
    assert_eq!(bbox.to_tuple(), (1.0, 2.0, 3.0, 4.0));
}

#[test]
fn test_bbox_serde_json() {
    let bbox = BoundingBox::new(-10.0, -5.0, 10.0, 5.0);
    let json = serde_json::to_string(&bbox).unwrap();
    assert!(json.contains("\"min_x\":-10.0"));

    let back: BoundingBox = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bbox);
}

// ============================================================================
// Dimension and clamping tests
// ============================================================================

#[test]
fn test_bbox_width_crossing_zero() {
    let bbox = BoundingBox::new(-10.0, 0.0, 10.0, 10.0);
    assert_eq!(bbox.width(), 20.0);
}

#[test]
fn test_bbox_clamp_x_inside_limits_is_noop() {
    let bbox = BoundingBox::new(-10.0, 0.0, 10.0, 10.0);
    assert_eq!(bbox.clamp_x((-180.0, 180.0)), bbox);
}

#[test]
fn test_bbox_clamp_x_outside_limits() {
    let bbox = BoundingBox::new(-300.0, 0.0, 300.0, 10.0).clamp_x((-180.0, 180.0));
    assert_eq!(bbox.min_x, -180.0);
    assert_eq!(bbox.max_x, 180.0);
    assert_eq!(bbox.min_y, 0.0);
}

#[test]
fn test_bbox_shrink_negative_grows() {
    let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0).shrink(-0.5);
    assert_eq!(bbox.to_tuple(), (-0.5, -0.5, 1.5, 1.5));
}

#[test]
fn test_bbox_ring_is_counter_clockwise() {
    let ring = BoundingBox::new(0.0, 0.0, 4.0, 2.0).ring();
    let twice_area: f64 = ring
        .windows(2)
        .map(|w| w[0][0] * w[1][1] - w[1][0] * w[0][1])
        .sum();
    assert_eq!(twice_area, 16.0);
}

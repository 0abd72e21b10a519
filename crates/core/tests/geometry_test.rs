//! Tests for rectangle geometry and canvas validation.

use traceform_core::{CanvasSize, DetectError, Rect, bounding_rect};

// ============================================================================
// Rect accessors
// ============================================================================

#[test]
fn test_derived_accessors() {
    let r = Rect::new(10.0, 20.0, 100.0, 40.0);
    assert_eq!(r.min_x(), 10.0);
    assert_eq!(r.max_x(), 110.0);
    assert_eq!(r.min_y(), 20.0);
    assert_eq!(r.max_y(), 60.0);
    assert_eq!(r.center(), (60.0, 40.0));
    assert_eq!(r.area(), 4000.0);
    assert_eq!(r.aspect(), 2.5);
}

#[test]
fn test_contains_self_and_strict_subset() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(10.0, 10.0, 50.0, 50.0);
    assert!(outer.contains(&outer));
    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
}

#[test]
fn test_intersects_includes_touching_edges() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 10.0, 10.0);
    let c = Rect::new(10.1, 0.0, 10.0, 10.0);
    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
}

#[test]
fn test_offset_preserves_size() {
    let r = Rect::new(10.0, 10.0, 30.0, 40.0).offset(-20.0, 5.0);
    assert_eq!((r.x, r.y, r.width, r.height), (-10.0, 15.0, 30.0, 40.0));
}

// ============================================================================
// Bounding rect
// ============================================================================

#[test]
fn test_bounding_rect_of_empty_slice_is_none() {
    assert!(bounding_rect(&[]).is_none());
}

#[test]
fn test_bounding_rect_of_single_rect_is_identity() {
    let r = Rect::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(bounding_rect(&[r]), Some(r));
}

#[test]
fn test_bounding_rect_spans_all_members() {
    let rects = [
        Rect::new(10.0, 40.0, 20.0, 20.0),
        Rect::new(0.0, 0.0, 5.0, 5.0),
        Rect::new(50.0, 10.0, 10.0, 10.0),
    ];
    let b = bounding_rect(&rects).unwrap();
    assert_eq!((b.x, b.y, b.width, b.height), (0.0, 0.0, 60.0, 60.0));
}

// ============================================================================
// Canvas validation
// ============================================================================

#[test]
fn test_positive_canvas_is_accepted() {
    assert!(CanvasSize::try_new(400.0, 300.0).is_ok());
}

#[test]
fn test_degenerate_canvas_is_rejected() {
    for (w, h) in [(0.0, 300.0), (400.0, 0.0), (-1.0, 300.0), (f64::NAN, 1.0)] {
        let err = CanvasSize::try_new(w, h).unwrap_err();
        assert!(matches!(err, DetectError::InvalidCanvas { .. }));
    }
}

#[test]
fn test_max_dimension() {
    assert_eq!(CanvasSize::new(400.0, 300.0).max_dimension(), 400.0);
    assert_eq!(CanvasSize::new(300.0, 400.0).max_dimension(), 400.0);
}

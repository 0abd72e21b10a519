//! Tests for the quality filter.

use traceform_core::{CanvasSize, DetectParams, Rect, filter_rects};

const CANVAS: CanvasSize = CanvasSize {
    width: 400.0,
    height: 400.0,
};

fn filter(rects: &[Rect]) -> Vec<Rect> {
    filter_rects(rects, &CANVAS, &DetectParams::default())
}

// ============================================================================
// Individual rejection rules
// ============================================================================

#[test]
fn test_too_narrow_is_dropped() {
    // width 5 on a 400-wide canvas: rel width 0.0125 < 0.05
    let rects = [Rect::new(10.0, 10.0, 5.0, 100.0)];
    assert!(filter(&rects).is_empty());
}

#[test]
fn test_too_short_is_dropped() {
    let rects = [Rect::new(10.0, 10.0, 100.0, 5.0)];
    assert!(filter(&rects).is_empty());
}

#[test]
fn test_thin_sliver_fails_area_test() {
    // 20.5 x 23 passes the 5% per-side tests (both sides >= 20) but its
    // area 471.5 is below the 0.003 * 160000 = 480 floor.
    let rects = [Rect::new(0.0, 0.0, 20.5, 23.0)];
    assert!(filter(&rects).is_empty());
}

#[test]
fn test_degenerate_aspect_is_dropped() {
    // 360 x 30 has aspect 12 > 10 even though it is big enough otherwise.
    let rects = [Rect::new(0.0, 0.0, 360.0, 30.0)];
    assert!(filter(&rects).is_empty());
}

#[test]
fn test_out_of_bounds_is_dropped() {
    let rects = [Rect::new(500.0, 500.0, 100.0, 100.0)];
    assert!(filter(&rects).is_empty());
}

#[test]
fn test_slight_overscan_is_allowed() {
    // Origin a little past the canvas edge stays within the 10-unit margin.
    let rects = [Rect::new(-8.0, -8.0, 100.0, 100.0)];
    assert_eq!(filter(&rects).len(), 1);

    // Past the margin it is rejected.
    let rects = [Rect::new(-11.0, 0.0, 100.0, 100.0)];
    assert!(filter(&rects).is_empty());
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_output_is_subset_in_input_order() {
    let rects = [
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Rect::new(10.0, 10.0, 5.0, 5.0),
        Rect::new(200.0, 200.0, 100.0, 50.0),
    ];
    let kept = filter(&rects);
    assert_eq!(kept, vec![rects[0], rects[2]]);
}

#[test]
fn test_filter_is_deterministic() {
    let rects = [
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Rect::new(-11.0, 0.0, 100.0, 100.0),
        Rect::new(50.0, 50.0, 80.0, 40.0),
    ];
    assert_eq!(filter(&rects), filter(&rects));
}

#[test]
fn test_empty_input_yields_empty_output() {
    assert!(filter(&[]).is_empty());
}

//! Quality filter - discards implausible rectangles before grouping.
//!
//! A rectangle survives only if it is large enough relative to the canvas,
//! carries enough area, has a sane aspect ratio and lies within the canvas
//! bounds (with a small overscan margin for sketch jitter). Rejected
//! rectangles are dropped silently; this is best-effort degradation, not an
//! error path.

use crate::geometry::{CanvasSize, Rect};
use crate::params::DetectParams;

/// Returns the subset of `rects` that passes every quality test, in input
/// order.
pub fn filter_rects(rects: &[Rect], canvas: &CanvasSize, params: &DetectParams) -> Vec<Rect> {
    let expanded = Rect::new(
        -params.overscan_margin,
        -params.overscan_margin,
        canvas.width + 2.0 * params.overscan_margin,
        canvas.height + 2.0 * params.overscan_margin,
    );
    let min_width = params.min_size_ratio * canvas.width;
    let min_height = params.min_size_ratio * canvas.height;
    let min_area = params.min_area_ratio * canvas.area();

    let kept: Vec<Rect> = rects
        .iter()
        .filter(|r| {
            r.width >= min_width
                && r.height >= min_height
                && r.area() >= min_area
                && r.aspect() >= params.aspect_min
                && r.aspect() <= params.aspect_max
                && expanded.contains(r)
        })
        .copied()
        .collect();

    if kept.len() < rects.len() {
        tracing::debug!(
            input = rects.len(),
            kept = kept.len(),
            dropped = rects.len() - kept.len(),
            "quality filter dropped rectangles"
        );
    }

    kept
}

//! Overlap resolution.
//!
//! Post-processing pass that nudges components apart when one covers too
//! much of another. This is a heuristic scatter pass with a fixed attempt
//! cap, not a constraint solver: a component that still overlaps after the
//! final attempt is accepted as-is. Positions move, sizes never change.

use crate::component::DetectedComponent;
use crate::geometry::CanvasSize;
use crate::params::DetectParams;

/// Nudges each component away from the already-finalized ones until no
/// accumulated component covers more than `overlap_threshold` of it, or the
/// attempt cap runs out. Rectangles stay clamped inside the canvas.
pub fn resolve_overlaps(
    components: Vec<DetectedComponent>,
    canvas: &CanvasSize,
    params: &DetectParams,
) -> Vec<DetectedComponent> {
    if components.len() <= 1 {
        return components;
    }

    let mut placed: Vec<DetectedComponent> = Vec::with_capacity(components.len());

    for mut component in components {
        for _attempt in 0..params.max_nudge_attempts {
            // Overlap is measured against the moving component's own area,
            // and only against components already in the output.
            let blocker = placed.iter().find(|p| {
                component.rect.overlap_ratio(&p.rect) > params.overlap_threshold
            });
            let Some(blocker) = blocker else {
                break;
            };

            let dx = component.rect.mid_x() - blocker.rect.mid_x();
            let dy = component.rect.mid_y() - blocker.rect.mid_y();
            // Step away from the blocker on both axes; a zero delta
            // (concentric centers) defaults to the positive direction.
            let step_x = if dx < 0.0 {
                -params.nudge_step
            } else {
                params.nudge_step
            };
            let step_y = if dy < 0.0 {
                -params.nudge_step
            } else {
                params.nudge_step
            };

            component.rect = component
                .rect
                .offset(step_x, step_y)
                .clamp_to_canvas(canvas);
        }

        if placed.iter().any(|p| {
            component.rect.overlap_ratio(&p.rect) > params.overlap_threshold
        }) {
            tracing::debug!(
                id = %component.id,
                "overlap unresolved after attempt cap, accepting residual overlap"
            );
        }

        placed.push(component);
    }

    placed
}

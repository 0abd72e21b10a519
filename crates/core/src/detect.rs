//! High-level detection entry point.
//!
//! Composes the pipeline: quality filter -> spatial grouping -> per-group
//! classification and annotation matching -> component assembly -> overlap
//! resolution. Pure and synchronous: each invocation reads its inputs and
//! builds a fresh output list, so concurrent calls from independent sites
//! are safe.

use crate::annotate::{AnnotationMap, match_annotation};
use crate::classify::{ComponentType, DetectedComponentType, classify_group, classify_rect};
use crate::component::{ComponentIdAssigner, DetectedComponent};
use crate::filter::filter_rects;
use crate::geometry::{CanvasSize, Rect, bounding_rect};
use crate::grouping::group_rects;
use crate::params::DetectParams;
use crate::resolve::resolve_overlaps;

/// Component types that render their annotation text directly, so the
/// matched label also seeds `text_content`.
fn seeds_text_content(component: ComponentType) -> bool {
    matches!(
        component,
        ComponentType::Button
            | ComponentType::Label
            | ComponentType::FormControl
            | ComponentType::Badge
            | ComponentType::Alert
            | ComponentType::Well
            | ComponentType::Textarea
    )
}

/// Runs the full detection pipeline over one sketch analysis.
///
/// `rects` and `annotations` must share the canvas coordinate space; the
/// upstream vision collaborator is responsible for any coordinate-system
/// conversion. The canvas must have positive dimensions (see
/// [`CanvasSize::try_new`]). Empty input yields empty output; no input
/// raises an error.
pub fn detect_components(
    rects: &[Rect],
    canvas: &CanvasSize,
    annotations: &AnnotationMap,
    params: &DetectParams,
) -> Vec<DetectedComponent> {
    let filtered = filter_rects(rects, canvas, params);
    let groups = group_rects(&filtered, canvas, params);

    let mut ids = ComponentIdAssigner::new();
    let mut components = Vec::with_capacity(groups.len());

    for group in &groups {
        match group.as_slice() {
            [] => {}
            [rect] => {
                let label =
                    match_annotation(rect, annotations, params).map(str::to_string);
                let component = classify_rect(rect, canvas, label.as_deref());
                let text_content = if seeds_text_content(component) {
                    label.clone()
                } else {
                    None
                };
                // Overscanned sketches may leave a rect slightly outside the
                // canvas; returned components are always clamped inside.
                components.push(DetectedComponent::new(
                    ids.assign(),
                    rect.clamp_to_canvas(canvas),
                    DetectedComponentType::Single(component),
                    label,
                    text_content,
                ));
            }
            members => {
                // Non-empty by construction, so the bounding rect exists.
                let Some(bounds) = bounding_rect(members) else {
                    continue;
                };
                let label =
                    match_annotation(&bounds, annotations, params).map(str::to_string);
                let group_type = classify_group(members, canvas);
                components.push(DetectedComponent::new(
                    ids.assign(),
                    bounds.clamp_to_canvas(canvas),
                    DetectedComponentType::Group(group_type),
                    label,
                    None,
                ));
            }
        }
    }

    tracing::debug!(
        input = rects.len(),
        components = components.len(),
        "assembled component list"
    );

    resolve_overlaps(components, canvas, params)
}

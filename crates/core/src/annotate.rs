//! Annotation matching.
//!
//! Associates free-text labels (produced by an upstream OCR/text-detection
//! collaborator) with rectangles by spatial proximity. The policy is
//! first-match in the map's insertion order, not best-match: the first
//! annotation that intersects the rectangle or lies within the proximity
//! distance wins. Insertion order makes the original's unspecified map
//! iteration deterministic.

use indexmap::IndexMap;

use crate::geometry::Rect;
use crate::params::DetectParams;

/// Label -> annotated region, in the order the collaborator supplied them.
pub type AnnotationMap = IndexMap<String, Rect>;

/// Returns the first annotation label whose region intersects `rect` or has
/// an edge-to-edge distance below `params.annotation_distance`.
pub fn match_annotation<'a>(
    rect: &Rect,
    annotations: &'a AnnotationMap,
    params: &DetectParams,
) -> Option<&'a str> {
    annotations
        .iter()
        .find(|(_, region)| {
            rect.intersects(region) || rect.edge_distance(region) < params.annotation_distance
        })
        .map(|(label, _)| label.as_str())
}

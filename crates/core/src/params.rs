//! Detection parameters.
//!
//! Contains DetectParams for controlling the quality filter, spatial
//! grouping, annotation matching and overlap resolution thresholds.

/// Parameters for sketch component detection.
///
/// Every ratio is relative to the canvas size so the heuristics are
/// resolution-independent; the distance and step values are absolute
/// canvas units.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectParams {
    /// Rectangles narrower than this fraction of the canvas width, or
    /// shorter than this fraction of the canvas height, are discarded.
    pub min_size_ratio: f64,

    /// Rectangles whose area is below this fraction of the canvas area are
    /// discarded. Catches thin-but-long slivers that pass the size test.
    pub min_area_ratio: f64,

    /// Acceptable width/height band; shapes outside it are degenerate.
    pub aspect_min: f64,
    pub aspect_max: f64,

    /// Slack around the canvas bounds for the containment test, allowing
    /// slight sketch overscan.
    pub overscan_margin: f64,

    /// Two rectangles belong to the same row (column) when their leading
    /// edges differ by less than this fraction of the larger canvas
    /// dimension.
    pub align_ratio: f64,

    /// Two rectangles belong to the same row (column) when their heights
    /// (widths) differ by less than this fraction of the larger canvas
    /// dimension.
    pub size_ratio: f64,

    /// An annotation is associated with a rectangle when it intersects it or
    /// lies closer than this edge-to-edge distance.
    pub annotation_distance: f64,

    /// Overlap ratio above which the resolver nudges a component away from
    /// an already placed one. Directional: relative to the moving
    /// component's own area.
    pub overlap_threshold: f64,

    /// Offset applied per axis on each resolution attempt.
    pub nudge_step: f64,

    /// Resolution attempts per component before residual overlap is
    /// accepted.
    pub max_nudge_attempts: usize,
}

impl Default for DetectParams {
    fn default() -> Self {
        Self {
            min_size_ratio: 0.05,
            min_area_ratio: 0.003,
            aspect_min: 0.1,
            aspect_max: 10.0,
            overscan_margin: 10.0,
            align_ratio: 0.02,
            size_ratio: 0.05,
            annotation_distance: 20.0,
            overlap_threshold: 0.7,
            nudge_step: 20.0,
            max_nudge_attempts: 5,
        }
    }
}

//! Spatial grouping engine.
//!
//! Partitions quality-filtered rectangles into rows, columns and singleton
//! groups using alignment and size thresholds derived from the canvas size.
//!
//! The engine makes two greedy passes in input order: a row pass (aligned
//! top edges, similar heights) followed by a column pass (aligned left
//! edges, similar widths) over whatever the row pass left behind. Row
//! detection therefore takes priority over column detection: a rectangle
//! claimed by a row is never reconsidered for a column. Everything still
//! unclaimed afterwards becomes its own singleton group.
//!
//! Membership is tracked by index into the input slice, never by comparing
//! rectangle coordinates, so logically identical rectangles cannot collide
//! and rounding noise cannot split a group.

use smallvec::SmallVec;

use crate::geometry::{CanvasSize, Rect};
use crate::params::DetectParams;

type Members = SmallVec<[usize; 8]>;

/// Which leading edge and extent an alignment pass compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    /// Aligned min_y, similar heights.
    Row,
    /// Aligned min_x, similar widths.
    Column,
}

impl Axis {
    fn leading_edge(self, r: &Rect) -> f64 {
        match self {
            Axis::Row => r.min_y(),
            Axis::Column => r.min_x(),
        }
    }

    fn extent(self, r: &Rect) -> f64 {
        match self {
            Axis::Row => r.height,
            Axis::Column => r.width,
        }
    }
}

/// One greedy alignment pass over the not-yet-used rectangles.
///
/// For each unused rectangle in input order, collects every other unused
/// rectangle whose leading edge and extent both fall within the thresholds.
/// Groups of two or more members are emitted and their members marked used;
/// a rectangle that attracts no partner stays available for later passes.
fn axis_pass(
    rects: &[Rect],
    used: &mut [bool],
    axis: Axis,
    align_threshold: f64,
    size_threshold: f64,
) -> Vec<Members> {
    let mut groups = Vec::new();

    for i in 0..rects.len() {
        if used[i] {
            continue;
        }
        let mut members: Members = SmallVec::new();
        members.push(i);

        for j in 0..rects.len() {
            if j == i || used[j] {
                continue;
            }
            let edge_diff = (axis.leading_edge(&rects[i]) - axis.leading_edge(&rects[j])).abs();
            let extent_diff = (axis.extent(&rects[i]) - axis.extent(&rects[j])).abs();
            if edge_diff < align_threshold && extent_diff < size_threshold {
                members.push(j);
            }
        }

        if members.len() >= 2 {
            for &m in &members {
                used[m] = true;
            }
            groups.push(members);
        }
    }

    groups
}

/// Partitions `rects` into row, column and singleton groups.
///
/// Every input rectangle appears in exactly one output group, and the union
/// of all groups equals the input set.
pub fn group_rects(rects: &[Rect], canvas: &CanvasSize, params: &DetectParams) -> Vec<Vec<Rect>> {
    let align_threshold = params.align_ratio * canvas.max_dimension();
    let size_threshold = params.size_ratio * canvas.max_dimension();

    let mut used = vec![false; rects.len()];

    let rows = axis_pass(rects, &mut used, Axis::Row, align_threshold, size_threshold);
    let columns = axis_pass(
        rects,
        &mut used,
        Axis::Column,
        align_threshold,
        size_threshold,
    );

    let mut groups: Vec<Vec<Rect>> = Vec::new();
    for members in rows.iter().chain(columns.iter()) {
        groups.push(members.iter().map(|&i| rects[i]).collect());
    }

    let mut singletons = 0usize;
    for (i, r) in rects.iter().enumerate() {
        if !used[i] {
            groups.push(vec![*r]);
            singletons += 1;
        }
    }

    tracing::debug!(
        rows = rows.len(),
        columns = columns.len(),
        singletons,
        "spatial grouping finished"
    );

    groups
}

//! Axis-aligned rectangle geometry.
//!
//! Provides the canvas-space value types shared by every detection stage:
//! - Rect: an axis-aligned rectangle with derived accessors
//! - CanvasSize: the normalization frame for all relative thresholds
//! - Overlap, distance and clamping helpers
//!
//! All quantities are floating-point canvas units. Rectangles are plain
//! value types; stages that need identity track indices into the input
//! slice instead of comparing coordinates.

use serde::{Deserialize, Serialize};

use crate::error::{DetectError, Result};

/// An axis-aligned rectangle in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Center point (mid_x, mid_y).
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Width-to-height ratio. Degenerate heights yield inf/NaN; the quality
    /// filter rejects those shapes before any other stage sees them.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Returns a copy translated by (dx, dy).
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// True if `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        other.min_x() >= self.min_x()
            && other.min_y() >= self.min_y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// True if the two rectangles share any area or touch edge-to-edge.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    /// Area of the intersection of the two rectangles (0.0 when disjoint).
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let w = self.max_x().min(other.max_x()) - self.min_x().max(other.min_x());
        let h = self.max_y().min(other.max_y()) - self.min_y().max(other.min_y());
        w.max(0.0) * h.max(0.0)
    }

    /// Directional overlap ratio: intersection area relative to `self`'s own
    /// area. Not symmetric and deliberately not IoU — the overlap resolver
    /// measures how much of the *moving* component is covered.
    pub fn overlap_ratio(&self, other: &Rect) -> f64 {
        let area = self.area();
        if area <= 0.0 {
            return 0.0;
        }
        self.intersection_area(other) / area
    }

    /// Euclidean distance between the nearest edges of the two rectangles.
    /// Zero when they overlap or touch.
    pub fn edge_distance(&self, other: &Rect) -> f64 {
        let dx = (self.min_x() - other.max_x())
            .max(other.min_x() - self.max_x())
            .max(0.0);
        let dy = (self.min_y() - other.max_y())
            .max(other.min_y() - self.max_y())
            .max(0.0);
        dx.hypot(dy)
    }

    /// Shifts the origin so the rectangle lies inside the canvas, preserving
    /// width and height. A rectangle larger than the canvas is pinned to the
    /// origin on that axis.
    pub fn clamp_to_canvas(&self, canvas: &CanvasSize) -> Self {
        let max_x = (canvas.width - self.width).max(0.0);
        let max_y = (canvas.height - self.height).max(0.0);
        Self {
            x: self.x.clamp(0.0, max_x),
            y: self.y.clamp(0.0, max_y),
            width: self.width,
            height: self.height,
        }
    }
}

/// Minimal rectangle covering every rectangle in the slice.
/// Returns None for an empty slice.
pub fn bounding_rect(rects: &[Rect]) -> Option<Rect> {
    let first = rects.first()?;
    let mut x0 = first.min_x();
    let mut y0 = first.min_y();
    let mut x1 = first.max_x();
    let mut y1 = first.max_y();

    for r in &rects[1..] {
        x0 = x0.min(r.min_x());
        y0 = y0.min(r.min_y());
        x1 = x1.max(r.max_x());
        y1 = y1.max(r.max_y());
    }

    Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
}

/// The drawing-surface size that every relative threshold is scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Validated constructor for API boundaries. The detection stages assume
    /// a positive canvas; a zero or negative dimension poisons every relative
    /// threshold with NaN/inf.
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(DetectError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    /// The larger canvas dimension; grouping thresholds scale against it.
    pub fn max_dimension(&self) -> f64 {
        self.width.max(self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

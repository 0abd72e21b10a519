//! traceform - heuristic UI component detection for hand-drawn sketches.
//!
//! Takes axis-aligned rectangles extracted from a sketch or screenshot, plus
//! optional OCR text annotations, and produces a list of classified,
//! labeled, non-overlapping UI components for a downstream markup generator.
//!
//! Pipeline: quality filter -> spatial grouping -> type classification and
//! annotation matching -> overlap resolution. The whole core is a pure,
//! synchronous function of its inputs.

pub mod annotate;
pub mod classify;
pub mod component;
pub mod detect;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod grouping;
pub mod params;
pub mod properties;
pub mod resolve;

pub use annotate::{AnnotationMap, match_annotation};
pub use classify::{
    ComponentType, DetectedComponentType, GroupType, classify_group, classify_rect,
};
pub use component::{ComponentId, ComponentIdAssigner, DetectedComponent};
pub use detect::detect_components;
pub use error::{DetectError, Result};
pub use filter::filter_rects;
pub use geometry::{CanvasSize, Rect, bounding_rect};
pub use grouping::group_rects;
pub use params::DetectParams;
pub use properties::{
    ColorRole, ComponentProperties, MAX_NAV_ITEMS, NavItem, StyledText, SwapProperty, TextStyle,
};
pub use resolve::resolve_overlaps;

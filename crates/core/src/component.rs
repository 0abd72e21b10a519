//! The detected-component output entity and id assignment.

use serde::{Deserialize, Serialize};

use crate::classify::DetectedComponentType;
use crate::geometry::Rect;
use crate::properties::ComponentProperties;

/// Opaque component identifier. Assigned once at creation, immutable for the
/// component's lifetime, never reused within a detection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(u64);

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out monotonically increasing ids in assembly order.
#[derive(Debug, Default)]
pub struct ComponentIdAssigner {
    next: u64,
}

impl ComponentIdAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self) -> ComponentId {
        let id = ComponentId(self.next);
        self.next += 1;
        id
    }
}

/// A classified, positioned UI component — the unit the markup generator
/// consumes. Value object: detection runs build the whole list fresh and
/// never mutate previous results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedComponent {
    pub id: ComponentId,
    pub rect: Rect,
    #[serde(rename = "type")]
    pub kind: DetectedComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    pub properties: ComponentProperties,
}

impl DetectedComponent {
    /// Builds a component with its type-specific default properties seeded.
    pub fn new(
        id: ComponentId,
        rect: Rect,
        kind: DetectedComponentType,
        label: Option<String>,
        text_content: Option<String>,
    ) -> Self {
        let properties = ComponentProperties::defaults_for(&kind);
        Self {
            id,
            rect,
            kind,
            label,
            text_content,
            properties,
        }
    }
}

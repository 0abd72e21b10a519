//! Type classification for single rectangles and rectangle groups.
//!
//! Both classifiers are ordered decision lists evaluated first-match-wins.
//! The rule order is load-bearing: a rectangle matching several predicates
//! takes the earliest one, so reordering changes results. Both functions
//! are total — the final arm guarantees every input maps to a type.

use serde::{Deserialize, Serialize};

use crate::geometry::{CanvasSize, Rect, bounding_rect};

/// Semantic type of a single detected component. String-identified closed
/// set; the identifiers are what the downstream markup generator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentType {
    Alert,
    Badge,
    Breadcrumb,
    Button,
    ButtonGroup,
    Carousel,
    Collapse,
    Dropdown,
    Form,
    FormControl,
    Icon,
    Image,
    Label,
    ListGroup,
    MediaObject,
    Modal,
    Navbar,
    Navs,
    Pagination,
    ProgressBar,
    Tab,
    Table,
    Textarea,
    Thumbnail,
    Tooltip,
    Well,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Alert => "alert",
            ComponentType::Badge => "badge",
            ComponentType::Breadcrumb => "breadcrumb",
            ComponentType::Button => "button",
            ComponentType::ButtonGroup => "buttonGroup",
            ComponentType::Carousel => "carousel",
            ComponentType::Collapse => "collapse",
            ComponentType::Dropdown => "dropdown",
            ComponentType::Form => "form",
            ComponentType::FormControl => "formControl",
            ComponentType::Icon => "icon",
            ComponentType::Image => "image",
            ComponentType::Label => "label",
            ComponentType::ListGroup => "listGroup",
            ComponentType::MediaObject => "mediaObject",
            ComponentType::Modal => "modal",
            ComponentType::Navbar => "navbar",
            ComponentType::Navs => "navs",
            ComponentType::Pagination => "pagination",
            ComponentType::ProgressBar => "progressBar",
            ComponentType::Tab => "tab",
            ComponentType::Table => "table",
            ComponentType::Textarea => "textarea",
            ComponentType::Thumbnail => "thumbnail",
            ComponentType::Tooltip => "tooltip",
            ComponentType::Well => "well",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic type of a multi-rectangle group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupType {
    Navbar,
    CardGrid,
    ButtonGroup,
    FormFieldGroup,
}

impl GroupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupType::Navbar => "navbar",
            GroupType::CardGrid => "cardGrid",
            GroupType::ButtonGroup => "buttonGroup",
            GroupType::FormFieldGroup => "formFieldGroup",
        }
    }
}

impl std::fmt::Display for GroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged union over the two classification outcomes. `Unknown` is never
/// produced by the classifiers themselves; it exists for downstream editors
/// that clear a component's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetectedComponentType {
    Single(ComponentType),
    Group(GroupType),
    Unknown,
}

/// Annotation keyword rules, checked in order against the case-folded label.
/// First substring containment wins.
const KEYWORD_RULES: &[(&str, ComponentType)] = &[
    ("img", ComponentType::Image),
    ("photo", ComponentType::Image),
    ("avatar", ComponentType::Image),
    ("icon", ComponentType::Icon),
    ("btn", ComponentType::Button),
    ("button", ComponentType::Button),
    ("nav", ComponentType::Navbar),
    ("input", ComponentType::FormControl),
    ("field", ComponentType::FormControl),
    ("form", ComponentType::FormControl),
    ("card", ComponentType::MediaObject),
    ("list", ComponentType::ListGroup),
    ("tab", ComponentType::Tab),
    ("badge", ComponentType::Badge),
    ("progress", ComponentType::ProgressBar),
    ("dropdown", ComponentType::Dropdown),
    ("table", ComponentType::Table),
];

/// Classifies a single rectangle.
///
/// An annotation keyword, when present, always overrides the geometric
/// heuristic. Otherwise the type follows from the rectangle's size relative
/// to the canvas and its aspect ratio.
pub fn classify_rect(
    rect: &Rect,
    canvas: &CanvasSize,
    annotation_label: Option<&str>,
) -> ComponentType {
    if let Some(label) = annotation_label {
        let folded = label.to_lowercase();
        for (keyword, component) in KEYWORD_RULES {
            if folded.contains(keyword) {
                return *component;
            }
        }
    }

    let rel_width = rect.width / canvas.width;
    let rel_height = rect.height / canvas.height;
    // Guard against zero-height rectangles that slip past a degenerate
    // canvas; the quality filter normally removes them.
    let aspect = rect.width / rect.height.max(1.0);

    if rel_width > 0.8 && rel_height < 0.15 {
        ComponentType::Navbar
    } else if aspect > 3.0 && rel_height < 0.1 {
        ComponentType::ButtonGroup
    } else if aspect > 1.5 && rel_height < 0.2 {
        ComponentType::Button
    } else if aspect < 0.7 && rel_height > 0.2 {
        ComponentType::FormControl
    } else if rel_width > 0.3 && rel_height > 0.3 {
        ComponentType::Image
    } else {
        ComponentType::Label
    }
}

/// Classifies a multi-rectangle group from its overall bounding box.
pub fn classify_group(group: &[Rect], canvas: &CanvasSize) -> GroupType {
    let Some(bounds) = bounding_rect(group) else {
        return GroupType::FormFieldGroup;
    };

    let rel_width = bounds.width / canvas.width;
    let rel_height = bounds.height / canvas.height;

    if rel_width > 0.8 && rel_height < 0.15 {
        GroupType::Navbar
    } else if group.len() >= 4 && rel_width > 0.5 && rel_height > 0.3 {
        GroupType::CardGrid
    } else if group.len() >= 2 && rel_width > 0.3 && rel_height < 0.2 {
        GroupType::ButtonGroup
    } else {
        GroupType::FormFieldGroup
    }
}

//! Editable component properties and per-type default seeding.
//!
//! Every detected component owns a property bag: boolean toggles,
//! instance-swap options, styled text fields, semantic color roles and (for
//! navigation-bearing components) a bounded list of navigation items. The
//! detection core seeds type-specific defaults exactly once at construction
//! time; all later edits belong to the inspector collaborator. When a
//! component's type changes downstream, the bag must be re-seeded from
//! scratch for the new type.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::classify::{ComponentType, DetectedComponentType, GroupType};

/// Hard cap on navigation items a component may carry.
pub const MAX_NAV_ITEMS: usize = 8;

/// Semantic color slot an editor can restyle without knowing concrete hex
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Success,
    Danger,
    Background,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextStyle {
    Heading,
    Body,
    Caption,
}

/// A text field with an associated display style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledText {
    pub value: String,
    pub style: TextStyle,
}

/// An enumerated "instance swap" choice (e.g. an image fit mode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapProperty {
    pub options: Vec<String>,
    pub selected: usize,
}

impl SwapProperty {
    fn new(options: &[&str]) -> Self {
        Self {
            options: options.iter().map(|s| s.to_string()).collect(),
            selected: 0,
        }
    }
}

/// One entry of a navigation-bearing component's item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
}

/// The editable property bag owned by a detected component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentProperties {
    pub toggles: IndexMap<String, bool>,
    pub swaps: IndexMap<String, SwapProperty>,
    pub text_fields: IndexMap<String, StyledText>,
    pub color_roles: IndexMap<String, ColorRole>,
    pub nav_items: Vec<NavItem>,
}

impl ComponentProperties {
    /// Seeds the default property bag for a component type. Pure lookup:
    /// construction logic stays out of the component entity so the property
    /// editor can re-seed on type changes without touching the detector.
    pub fn defaults_for(kind: &DetectedComponentType) -> Self {
        match kind {
            DetectedComponentType::Single(component) => Self::for_component(*component),
            DetectedComponentType::Group(group) => Self::for_group(*group),
            DetectedComponentType::Unknown => Self::default(),
        }
    }

    /// Appends a navigation item, silently dropping anything past the cap.
    pub fn push_nav_item(&mut self, label: impl Into<String>) {
        if self.nav_items.len() < MAX_NAV_ITEMS {
            self.nav_items.push(NavItem {
                label: label.into(),
            });
        }
    }

    fn toggle(mut self, name: &str, value: bool) -> Self {
        self.toggles.insert(name.to_string(), value);
        self
    }

    fn swap(mut self, name: &str, options: &[&str]) -> Self {
        self.swaps.insert(name.to_string(), SwapProperty::new(options));
        self
    }

    fn text(mut self, name: &str, value: &str, style: TextStyle) -> Self {
        self.text_fields.insert(
            name.to_string(),
            StyledText {
                value: value.to_string(),
                style,
            },
        );
        self
    }

    fn color(mut self, name: &str, role: ColorRole) -> Self {
        self.color_roles.insert(name.to_string(), role);
        self
    }

    fn default_nav(mut self) -> Self {
        for label in ["Home", "Products", "About", "Contact"] {
            self.push_nav_item(label);
        }
        self
    }

    fn for_component(component: ComponentType) -> Self {
        let bag = Self::default();
        match component {
            ComponentType::Button => bag
                .toggle("Has Icon", false)
                .toggle("Is Disabled", false)
                .color("Fill", ColorRole::Primary)
                .color("Label", ColorRole::Text),
            ComponentType::ButtonGroup => bag
                .toggle("Is Vertical", false)
                .color("Fill", ColorRole::Primary),
            ComponentType::Navbar => bag
                .toggle("Is Fixed", false)
                .color("Background", ColorRole::Primary)
                .default_nav(),
            ComponentType::Navs | ComponentType::Breadcrumb | ComponentType::Pagination => {
                bag.default_nav()
            }
            ComponentType::Image | ComponentType::Thumbnail | ComponentType::Carousel => bag
                .toggle("Has Caption", false)
                .swap("Fit", &["fill", "contain", "cover"]),
            ComponentType::Icon => bag.swap("Size", &["small", "medium", "large"]),
            ComponentType::FormControl | ComponentType::Textarea => bag
                .toggle("Is Required", false)
                .text("Placeholder", "", TextStyle::Body),
            ComponentType::Form => bag.toggle("Is Inline", false),
            ComponentType::Label => bag.text("Text", "", TextStyle::Body),
            ComponentType::Badge => bag
                .text("Text", "", TextStyle::Caption)
                .color("Fill", ColorRole::Secondary),
            ComponentType::Alert => bag
                .toggle("Is Dismissible", true)
                .color("Tone", ColorRole::Danger),
            ComponentType::ProgressBar => bag
                .toggle("Is Striped", false)
                .color("Fill", ColorRole::Success),
            ComponentType::Dropdown => bag
                .toggle("Is Disabled", false)
                .swap("State", &["closed", "open"]),
            ComponentType::Table | ComponentType::ListGroup => bag.toggle("Has Header", true),
            ComponentType::MediaObject => bag
                .toggle("Has Image", true)
                .text("Heading", "", TextStyle::Heading),
            ComponentType::Modal | ComponentType::Collapse | ComponentType::Well => {
                bag.toggle("Is Open", true)
            }
            ComponentType::Tab => bag.toggle("Is Active", false),
            ComponentType::Tooltip => bag.swap("Placement", &["top", "bottom", "left", "right"]),
        }
    }

    fn for_group(group: GroupType) -> Self {
        let bag = Self::default();
        match group {
            GroupType::Navbar => bag
                .toggle("Is Fixed", false)
                .color("Background", ColorRole::Primary)
                .default_nav(),
            GroupType::CardGrid => bag.swap("Columns", &["2", "3", "4"]),
            GroupType::ButtonGroup => bag
                .toggle("Is Vertical", false)
                .color("Fill", ColorRole::Primary),
            GroupType::FormFieldGroup => bag.toggle("Has Labels", true),
        }
    }
}

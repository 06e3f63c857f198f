//! Templates: named starting points for editing.
//!
//! A template bundles one parent element, its modifier list, and N children,
//! each child carrying its own scope-modifier list and general-modifier list.
//! The catalog is compiled in; templates are never persisted. The session
//! keeps the live copy, so resetting a template is a full overwrite from the
//! catalog value.

use super::child::{ChildContent, ContentAlpha, TextStyle};
use super::color::RgbColor;
use super::element::{
    ContentAlignment, Element, ElementData, HorizontalArrangement, RowParams,
    VerticalAlignment, VerticalArrangement,
};
use super::element::{BoxParams, ColumnParams, HorizontalAlignment};
use super::modifier::{
    ModifierEntry, ModifierParams, ScopeEntry, ScopeModifierParams,
};
use super::shape::Shape;

/// One child of a template's parent element.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateChild {
    /// Immutable content, used to derive the child's header label
    pub content: ChildContent,
    /// Container-specific modifiers (application order)
    pub scope_modifiers: Vec<ScopeEntry>,
    /// General modifiers (application order)
    pub modifiers: Vec<ModifierEntry>,
}

impl TemplateChild {
    /// Creates a child with empty modifier lists.
    #[must_use]
    pub fn new(content: ChildContent) -> Self {
        Self {
            content,
            scope_modifiers: Vec::new(),
            modifiers: Vec::new(),
        }
    }
}

/// A named bundle of one parent element and its children.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Display name shown in the template browser
    pub name: String,
    /// Parent element of the composed tree
    pub parent: Element,
    /// Parent modifier list (application order)
    pub parent_modifiers: Vec<ModifierEntry>,
    /// Children in layout order
    pub children: Vec<TemplateChild>,
}

impl Template {
    /// The compiled-in template catalog, in display order.
    #[must_use]
    pub fn catalog() -> Vec<Self> {
        vec![
            Self::pink_square(),
            Self::rainbow(),
            Self::sun(),
            Self::simple_card(),
        ]
    }

    /// Looks up a catalog template by name, case-insensitively.
    #[must_use]
    pub fn find(name: &str) -> Option<Self> {
        Self::catalog()
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// A rounded pink square with a greeting.
    #[must_use]
    pub fn pink_square() -> Self {
        Self {
            name: "Pink square".to_string(),
            parent: Element {
                data: ElementData::Box(BoxParams {
                    content_alignment: ContentAlignment::Center,
                }),
                theme_aware: true,
            },
            parent_modifiers: vec![
                entry(ModifierParams::Size {
                    width: 120,
                    height: 120,
                }),
                entry(ModifierParams::Background {
                    color: RgbColor::PINK,
                    shape: Shape::RoundedCorner,
                    corner: 16,
                }),
                entry(ModifierParams::Border {
                    width: 2,
                    color: RgbColor::MAGENTA,
                    shape: Shape::RoundedCorner,
                    corner: 16,
                }),
            ],
            children: vec![TemplateChild {
                content: ChildContent::Text {
                    text: "Hello".to_string(),
                    style: TextStyle::Subtitle1,
                    alpha: ContentAlpha::High,
                },
                scope_modifiers: vec![scope(ScopeModifierParams::AlignInBox {
                    alignment: ContentAlignment::Center,
                })],
                modifiers: Vec::new(),
            }],
        }
    }

    /// Five stacked color bands.
    #[must_use]
    pub fn rainbow() -> Self {
        let children = RgbColor::RAINBOW
            .iter()
            .map(|&color| TemplateChild {
                content: ChildContent::text(""),
                scope_modifiers: Vec::new(),
                modifiers: vec![
                    entry(ModifierParams::Size {
                        width: 160,
                        height: 16,
                    }),
                    entry(ModifierParams::Background {
                        color,
                        shape: Shape::RoundedCorner,
                        corner: 8,
                    }),
                ],
            })
            .collect();

        Self {
            name: "Rainbow".to_string(),
            parent: Element {
                data: ElementData::Column(ColumnParams {
                    vertical_arrangement: VerticalArrangement::SpacedBy,
                    vertical_spacing: 4,
                    horizontal_alignment: HorizontalAlignment::CenterHorizontally,
                }),
                theme_aware: false,
            },
            parent_modifiers: vec![entry(ModifierParams::Padding { all: 8 })],
            children,
        }
    }

    /// A glowing circle with a sun emoji at its center.
    #[must_use]
    pub fn sun() -> Self {
        Self {
            name: "Sun".to_string(),
            parent: Element {
                data: ElementData::Box(BoxParams {
                    content_alignment: ContentAlignment::Center,
                }),
                theme_aware: false,
            },
            parent_modifiers: vec![
                entry(ModifierParams::Size {
                    width: 140,
                    height: 140,
                }),
                entry(ModifierParams::Shadow {
                    elevation: 8,
                    shape: Shape::Circle,
                    corner: 0,
                }),
                entry(ModifierParams::Background {
                    color: RgbColor::AMBER,
                    shape: Shape::Circle,
                    corner: 0,
                }),
            ],
            children: vec![TemplateChild {
                content: ChildContent::emoji("🌞"),
                scope_modifiers: vec![scope(ScopeModifierParams::AlignInBox {
                    alignment: ContentAlignment::Center,
                })],
                modifiers: Vec::new(),
            }],
        }
    }

    /// An avatar plus two lines of text in a card row.
    #[must_use]
    pub fn simple_card() -> Self {
        Self {
            name: "Simple card".to_string(),
            parent: Element {
                data: ElementData::Row(RowParams {
                    horizontal_arrangement: HorizontalArrangement::SpacedBy,
                    horizontal_spacing: 8,
                    vertical_alignment: VerticalAlignment::CenterVertically,
                }),
                theme_aware: true,
            },
            parent_modifiers: vec![
                entry(ModifierParams::Size {
                    width: 220,
                    height: 72,
                }),
                entry(ModifierParams::Background {
                    color: RgbColor::WHITE,
                    shape: Shape::RoundedCorner,
                    corner: 12,
                }),
                entry(ModifierParams::Border {
                    width: 1,
                    color: RgbColor::GRAY,
                    shape: Shape::RoundedCorner,
                    corner: 12,
                }),
                entry(ModifierParams::Padding { all: 12 }),
            ],
            children: vec![
                TemplateChild {
                    content: ChildContent::image("profile.png"),
                    scope_modifiers: vec![scope(ScopeModifierParams::AlignInRow {
                        alignment: VerticalAlignment::CenterVertically,
                    })],
                    modifiers: vec![
                        entry(ModifierParams::Size {
                            width: 40,
                            height: 40,
                        }),
                        entry(ModifierParams::Clip {
                            shape: Shape::Circle,
                            corner: 0,
                        }),
                    ],
                },
                TemplateChild {
                    content: ChildContent::Text {
                        text: "Alfred Sisley".to_string(),
                        style: TextStyle::Subtitle1,
                        alpha: ContentAlpha::High,
                    },
                    scope_modifiers: Vec::new(),
                    modifiers: Vec::new(),
                },
                TemplateChild {
                    content: ChildContent::Text {
                        text: "3 minutes ago".to_string(),
                        style: TextStyle::Body2,
                        alpha: ContentAlpha::Medium,
                    },
                    scope_modifiers: Vec::new(),
                    modifiers: Vec::new(),
                },
            ],
        }
    }
}

fn entry(params: ModifierParams) -> ModifierEntry {
    ModifierEntry {
        params,
        enabled: true,
    }
}

fn scope(params: ScopeModifierParams) -> ScopeEntry {
    ScopeEntry {
        params,
        enabled: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_templates() {
        let catalog = Template::catalog();
        assert_eq!(catalog.len(), 4);
        let names: Vec<&str> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Pink square", "Rainbow", "Sun", "Simple card"]);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert!(Template::find("rainbow").is_some());
        assert!(Template::find("SIMPLE CARD").is_some());
        assert!(Template::find("nope").is_none());
    }

    #[test]
    fn test_scope_modifiers_match_parent_kind() {
        for template in Template::catalog() {
            for child in &template.children {
                for entry in &child.scope_modifiers {
                    assert_eq!(
                        entry.kind().container(),
                        template.parent.kind(),
                        "template '{}' carries a scope modifier for the wrong container",
                        template.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_catalog_entries_start_enabled() {
        for template in Template::catalog() {
            assert!(template.parent_modifiers.iter().all(|e| e.enabled));
            for child in &template.children {
                assert!(child.modifiers.iter().all(|e| e.enabled));
                assert!(child.scope_modifiers.iter().all(|e| e.enabled));
            }
        }
    }
}

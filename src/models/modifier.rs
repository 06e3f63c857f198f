//! Modifier chain data structures.
//!
//! A modifier entry is one step in the ordered visual-transform chain applied
//! to an element. Entry order is the application order, duplicate kinds are
//! legal, and each entry carries an enabled flag that the preview honors
//! without removing the entry from the chain.
//!
//! Scope modifiers are a separate, container-specific catalog: they describe
//! the relationship between a child and its parent container (alignment
//! within a Box, weight within a Column or Row) and are only legal under the
//! matching parent kind.

use std::fmt;

use super::color::RgbColor;
use super::element::{ContentAlignment, ElementKind, HorizontalAlignment, VerticalAlignment};
use super::shape::Shape;

/// Available modifier kinds for the general modifier list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    /// Fixed width and height
    Size,
    /// Fill a fraction of the available width
    FillMaxWidth,
    /// Fill a fraction of the available height
    FillMaxHeight,
    /// Fill a fraction of the available size
    FillMaxSize,
    /// Uniform padding on all sides
    Padding,
    /// Stroked outline in a shape
    Border,
    /// Filled background in a shape
    Background,
    /// Drop shadow in a shape
    Shadow,
    /// Translation from the natural position
    Offset,
    /// Clip content to a shape
    Clip,
    /// Rotation around the center
    Rotate,
    /// Uniform scale factor
    Scale,
}

impl ModifierKind {
    /// All modifier kinds in display order.
    pub const ALL: [Self; 12] = [
        Self::Size,
        Self::FillMaxWidth,
        Self::FillMaxHeight,
        Self::FillMaxSize,
        Self::Padding,
        Self::Border,
        Self::Background,
        Self::Shadow,
        Self::Offset,
        Self::Clip,
        Self::Rotate,
        Self::Scale,
    ];

    /// Get the display name for this kind.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Size => "Size",
            Self::FillMaxWidth => "FillMaxWidth",
            Self::FillMaxHeight => "FillMaxHeight",
            Self::FillMaxSize => "FillMaxSize",
            Self::Padding => "Padding",
            Self::Border => "Border",
            Self::Background => "Background",
            Self::Shadow => "Shadow",
            Self::Offset => "Offset",
            Self::Clip => "Clip",
            Self::Rotate => "Rotate",
            Self::Scale => "Scale",
        }
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Kind-tagged modifier parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModifierParams {
    /// Fixed size
    Size {
        /// Width (dp)
        width: u16,
        /// Height (dp)
        height: u16,
    },
    /// Fractional width fill
    FillMaxWidth {
        /// Fraction of available width, 0.0-1.0
        fraction: f32,
    },
    /// Fractional height fill
    FillMaxHeight {
        /// Fraction of available height, 0.0-1.0
        fraction: f32,
    },
    /// Fractional size fill
    FillMaxSize {
        /// Fraction of available size, 0.0-1.0
        fraction: f32,
    },
    /// Uniform padding
    Padding {
        /// Padding on all sides (dp)
        all: u16,
    },
    /// Stroked outline
    Border {
        /// Stroke width (dp)
        width: u16,
        /// Stroke color
        color: RgbColor,
        /// Outline shape
        shape: Shape,
        /// Corner parameter for rounded/cut shapes (dp)
        corner: i32,
    },
    /// Filled background
    Background {
        /// Fill color
        color: RgbColor,
        /// Fill shape
        shape: Shape,
        /// Corner parameter for rounded/cut shapes (dp)
        corner: i32,
    },
    /// Drop shadow
    Shadow {
        /// Shadow elevation (dp)
        elevation: u16,
        /// Shadow shape
        shape: Shape,
        /// Corner parameter for rounded/cut shapes (dp)
        corner: i32,
    },
    /// Translation
    Offset {
        /// Horizontal offset (dp), may be negative
        x: i16,
        /// Vertical offset (dp), may be negative
        y: i16,
    },
    /// Shape clip
    Clip {
        /// Clip shape
        shape: Shape,
        /// Corner parameter for rounded/cut shapes (dp)
        corner: i32,
    },
    /// Rotation
    Rotate {
        /// Rotation in degrees, clockwise
        degrees: f32,
    },
    /// Uniform scale
    Scale {
        /// Scale factor, 1.0 = natural size
        scale: f32,
    },
}

impl ModifierParams {
    /// The default parameter record for a modifier kind.
    #[must_use]
    pub fn default_for(kind: ModifierKind) -> Self {
        match kind {
            ModifierKind::Size => Self::Size {
                width: 0,
                height: 0,
            },
            ModifierKind::FillMaxWidth => Self::FillMaxWidth { fraction: 1.0 },
            ModifierKind::FillMaxHeight => Self::FillMaxHeight { fraction: 1.0 },
            ModifierKind::FillMaxSize => Self::FillMaxSize { fraction: 1.0 },
            ModifierKind::Padding => Self::Padding { all: 0 },
            ModifierKind::Border => Self::Border {
                width: 2,
                color: RgbColor::BLUE,
                shape: Shape::Rectangle,
                corner: 0,
            },
            ModifierKind::Background => Self::Background {
                color: RgbColor::YELLOW,
                shape: Shape::Rectangle,
                corner: 0,
            },
            ModifierKind::Shadow => Self::Shadow {
                elevation: 0,
                shape: Shape::Rectangle,
                corner: 0,
            },
            ModifierKind::Offset => Self::Offset { x: 0, y: 0 },
            ModifierKind::Clip => Self::Clip {
                shape: Shape::Rectangle,
                corner: 0,
            },
            ModifierKind::Rotate => Self::Rotate { degrees: 0.0 },
            ModifierKind::Scale => Self::Scale { scale: 1.0 },
        }
    }

    /// The modifier kind this record belongs to.
    #[must_use]
    pub const fn kind(&self) -> ModifierKind {
        match self {
            Self::Size { .. } => ModifierKind::Size,
            Self::FillMaxWidth { .. } => ModifierKind::FillMaxWidth,
            Self::FillMaxHeight { .. } => ModifierKind::FillMaxHeight,
            Self::FillMaxSize { .. } => ModifierKind::FillMaxSize,
            Self::Padding { .. } => ModifierKind::Padding,
            Self::Border { .. } => ModifierKind::Border,
            Self::Background { .. } => ModifierKind::Background,
            Self::Shadow { .. } => ModifierKind::Shadow,
            Self::Offset { .. } => ModifierKind::Offset,
            Self::Clip { .. } => ModifierKind::Clip,
            Self::Rotate { .. } => ModifierKind::Rotate,
            Self::Scale { .. } => ModifierKind::Scale,
        }
    }

    /// One-line summary of the record for list rows and status output.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Size { width, height } => format!("size({width} x {height})"),
            Self::FillMaxWidth { fraction } => format!("fillMaxWidth({fraction})"),
            Self::FillMaxHeight { fraction } => format!("fillMaxHeight({fraction})"),
            Self::FillMaxSize { fraction } => format!("fillMaxSize({fraction})"),
            Self::Padding { all } => format!("padding({all})"),
            Self::Border {
                width,
                color,
                shape,
                corner,
            } => format!("border({width}, {color}, {})", shape_summary(*shape, *corner)),
            Self::Background {
                color,
                shape,
                corner,
            } => format!("background({color}, {})", shape_summary(*shape, *corner)),
            Self::Shadow {
                elevation,
                shape,
                corner,
            } => format!("shadow({elevation}, {})", shape_summary(*shape, *corner)),
            Self::Offset { x, y } => format!("offset({x}, {y})"),
            Self::Clip { shape, corner } => {
                format!("clip({})", shape_summary(*shape, *corner))
            }
            Self::Rotate { degrees } => format!("rotate({degrees}°)"),
            Self::Scale { scale } => format!("scale({scale})"),
        }
    }
}

fn shape_summary(shape: Shape, corner: i32) -> String {
    if shape.uses_corner() {
        format!("{}({})", shape.display_name(), corner.max(0))
    } else {
        shape.display_name().to_string()
    }
}

/// One entry in a general modifier list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifierEntry {
    /// Kind-tagged parameters
    pub params: ModifierParams,
    /// Whether the preview applies this entry
    pub enabled: bool,
}

impl ModifierEntry {
    /// Creates an enabled entry with the default parameters for a kind.
    #[must_use]
    pub fn new(kind: ModifierKind) -> Self {
        Self {
            params: ModifierParams::default_for(kind),
            enabled: true,
        }
    }

    /// The modifier kind of this entry.
    #[must_use]
    pub const fn kind(&self) -> ModifierKind {
        self.params.kind()
    }
}

/// Available scope-modifier kinds, each legal under exactly one parent kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeModifierKind {
    /// Per-child alignment within a Box
    AlignInBox,
    /// Proportional share of a Column's height
    WeightInColumn,
    /// Per-child horizontal alignment within a Column
    AlignInColumn,
    /// Proportional share of a Row's width
    WeightInRow,
    /// Per-child vertical alignment within a Row
    AlignInRow,
}

impl ScopeModifierKind {
    /// Get the display name for this kind.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::AlignInBox | Self::AlignInColumn | Self::AlignInRow => "Align",
            Self::WeightInColumn | Self::WeightInRow => "Weight",
        }
    }

    /// The parent container kind this scope modifier belongs to.
    #[must_use]
    pub const fn container(&self) -> ElementKind {
        match self {
            Self::AlignInBox => ElementKind::Box,
            Self::WeightInColumn | Self::AlignInColumn => ElementKind::Column,
            Self::WeightInRow | Self::AlignInRow => ElementKind::Row,
        }
    }
}

impl fmt::Display for ScopeModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Kind-tagged scope-modifier parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScopeModifierParams {
    /// Alignment within a Box parent
    AlignInBox {
        /// Two-dimensional alignment
        alignment: ContentAlignment,
    },
    /// Weight within a Column parent
    WeightInColumn {
        /// Proportional share, relative to sibling weights
        weight: f32,
    },
    /// Horizontal alignment within a Column parent
    AlignInColumn {
        /// Horizontal alignment
        alignment: HorizontalAlignment,
    },
    /// Weight within a Row parent
    WeightInRow {
        /// Proportional share, relative to sibling weights
        weight: f32,
    },
    /// Vertical alignment within a Row parent
    AlignInRow {
        /// Vertical alignment
        alignment: VerticalAlignment,
    },
}

impl ScopeModifierParams {
    /// The default parameter record for a scope-modifier kind.
    #[must_use]
    pub fn default_for(kind: ScopeModifierKind) -> Self {
        match kind {
            ScopeModifierKind::AlignInBox => Self::AlignInBox {
                alignment: ContentAlignment::default(),
            },
            ScopeModifierKind::WeightInColumn => Self::WeightInColumn { weight: 1.0 },
            ScopeModifierKind::AlignInColumn => Self::AlignInColumn {
                alignment: HorizontalAlignment::default(),
            },
            ScopeModifierKind::WeightInRow => Self::WeightInRow { weight: 1.0 },
            ScopeModifierKind::AlignInRow => Self::AlignInRow {
                alignment: VerticalAlignment::default(),
            },
        }
    }

    /// The scope-modifier kind this record belongs to.
    #[must_use]
    pub const fn kind(&self) -> ScopeModifierKind {
        match self {
            Self::AlignInBox { .. } => ScopeModifierKind::AlignInBox,
            Self::WeightInColumn { .. } => ScopeModifierKind::WeightInColumn,
            Self::AlignInColumn { .. } => ScopeModifierKind::AlignInColumn,
            Self::WeightInRow { .. } => ScopeModifierKind::WeightInRow,
            Self::AlignInRow { .. } => ScopeModifierKind::AlignInRow,
        }
    }

    /// One-line summary of the record for list rows and status output.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::AlignInBox { alignment } => format!("align({})", alignment.display_name()),
            Self::WeightInColumn { weight } | Self::WeightInRow { weight } => {
                format!("weight({weight})")
            }
            Self::AlignInColumn { alignment } => format!("align({})", alignment.display_name()),
            Self::AlignInRow { alignment } => format!("align({})", alignment.display_name()),
        }
    }
}

/// One entry in a child's scope-modifier list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScopeEntry {
    /// Kind-tagged parameters
    pub params: ScopeModifierParams,
    /// Whether the preview applies this entry
    pub enabled: bool,
}

impl ScopeEntry {
    /// Creates an enabled entry with the default parameters for a kind.
    #[must_use]
    pub fn new(kind: ScopeModifierKind) -> Self {
        Self {
            params: ScopeModifierParams::default_for(kind),
            enabled: true,
        }
    }

    /// The scope-modifier kind of this entry.
    #[must_use]
    pub const fn kind(&self) -> ScopeModifierKind {
        self.params.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_match_kind() {
        for kind in ModifierKind::ALL {
            assert_eq!(ModifierParams::default_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_new_entry_is_enabled_with_defaults() {
        let entry = ModifierEntry::new(ModifierKind::Background);
        assert!(entry.enabled);
        assert_eq!(
            entry.params,
            ModifierParams::Background {
                color: RgbColor::YELLOW,
                shape: Shape::Rectangle,
                corner: 0,
            }
        );
    }

    #[test]
    fn test_border_defaults() {
        let entry = ModifierEntry::new(ModifierKind::Border);
        assert_eq!(
            entry.params,
            ModifierParams::Border {
                width: 2,
                color: RgbColor::BLUE,
                shape: Shape::Rectangle,
                corner: 0,
            }
        );
    }

    #[test]
    fn test_summary_includes_corner_only_for_corner_shapes() {
        let rounded = ModifierParams::Clip {
            shape: Shape::RoundedCorner,
            corner: 8,
        };
        assert_eq!(rounded.summary(), "clip(RoundedCorner(8))");

        let circle = ModifierParams::Clip {
            shape: Shape::Circle,
            corner: 8,
        };
        assert_eq!(circle.summary(), "clip(Circle)");
    }

    #[test]
    fn test_scope_kind_container_mapping() {
        assert_eq!(ScopeModifierKind::AlignInBox.container(), ElementKind::Box);
        assert_eq!(
            ScopeModifierKind::WeightInColumn.container(),
            ElementKind::Column
        );
        assert_eq!(ScopeModifierKind::AlignInRow.container(), ElementKind::Row);
    }
}

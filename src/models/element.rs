//! Layout element data structures.
//!
//! An element is one node of the composed tree: a container kind (Box,
//! Column or Row) together with the parameter record for that kind. The
//! parameter record is a sum type tagged by the kind, so a mismatched
//! kind/parameter combination is unrepresentable.

use std::fmt;

/// Available container kinds for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Stacks children on top of each other
    Box,
    /// Lays children out vertically
    Column,
    /// Lays children out horizontally
    Row,
}

impl ElementKind {
    /// All container kinds in display order.
    pub const ALL: [Self; 3] = [Self::Box, Self::Column, Self::Row];

    /// Get the display name for this kind.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Box => "Box",
            Self::Column => "Column",
            Self::Row => "Row",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Two-dimensional alignment of content within a Box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentAlignment {
    /// Top edge, leading side
    #[default]
    TopStart,
    /// Top edge, centered
    TopCenter,
    /// Top edge, trailing side
    TopEnd,
    /// Vertically centered, leading side
    CenterStart,
    /// Centered both ways
    Center,
    /// Vertically centered, trailing side
    CenterEnd,
    /// Bottom edge, leading side
    BottomStart,
    /// Bottom edge, centered
    BottomCenter,
    /// Bottom edge, trailing side
    BottomEnd,
}

impl ContentAlignment {
    /// All alignments in display order (reading order of the 3x3 grid).
    pub const ALL: [Self; 9] = [
        Self::TopStart,
        Self::TopCenter,
        Self::TopEnd,
        Self::CenterStart,
        Self::Center,
        Self::CenterEnd,
        Self::BottomStart,
        Self::BottomCenter,
        Self::BottomEnd,
    ];

    /// Get the display name for this alignment.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::TopStart => "TopStart",
            Self::TopCenter => "TopCenter",
            Self::TopEnd => "TopEnd",
            Self::CenterStart => "CenterStart",
            Self::Center => "Center",
            Self::CenterEnd => "CenterEnd",
            Self::BottomStart => "BottomStart",
            Self::BottomCenter => "BottomCenter",
            Self::BottomEnd => "BottomEnd",
        }
    }
}

/// Horizontal alignment of children within a Column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Leading edge
    #[default]
    Start,
    /// Centered horizontally
    CenterHorizontally,
    /// Trailing edge
    End,
}

impl HorizontalAlignment {
    /// All alignments in display order.
    pub const ALL: [Self; 3] = [Self::Start, Self::CenterHorizontally, Self::End];

    /// Get the display name for this alignment.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::CenterHorizontally => "CenterHorizontally",
            Self::End => "End",
        }
    }
}

/// Vertical alignment of children within a Row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    /// Top edge
    #[default]
    Top,
    /// Centered vertically
    CenterVertically,
    /// Bottom edge
    Bottom,
}

impl VerticalAlignment {
    /// All alignments in display order.
    pub const ALL: [Self; 3] = [Self::Top, Self::CenterVertically, Self::Bottom];

    /// Get the display name for this alignment.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::CenterVertically => "CenterVertically",
            Self::Bottom => "Bottom",
        }
    }
}

/// Horizontal arrangement of children within a Row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalArrangement {
    /// Packed toward the leading edge
    #[default]
    Start,
    /// Packed toward the trailing edge
    End,
    /// Packed in the center
    Center,
    /// Equal gaps including the outer edges
    SpacedEvenly,
    /// Equal gaps, half-size gaps at the outer edges
    SpacedAround,
    /// Equal gaps, no gap at the outer edges
    SpacedBetween,
    /// Fixed gap given by the element's spacing parameter
    SpacedBy,
}

impl HorizontalArrangement {
    /// All arrangements in display order.
    pub const ALL: [Self; 7] = [
        Self::Start,
        Self::End,
        Self::Center,
        Self::SpacedEvenly,
        Self::SpacedAround,
        Self::SpacedBetween,
        Self::SpacedBy,
    ];

    /// Get the display name for this arrangement.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::End => "End",
            Self::Center => "Center",
            Self::SpacedEvenly => "SpacedEvenly",
            Self::SpacedAround => "SpacedAround",
            Self::SpacedBetween => "SpacedBetween",
            Self::SpacedBy => "SpacedBy",
        }
    }

    /// Whether this arrangement uses the spacing parameter.
    #[must_use]
    pub const fn uses_spacing(&self) -> bool {
        matches!(self, Self::SpacedBy)
    }
}

/// Vertical arrangement of children within a Column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalArrangement {
    /// Packed toward the top
    #[default]
    Top,
    /// Packed toward the bottom
    Bottom,
    /// Packed in the center
    Center,
    /// Equal gaps including the outer edges
    SpacedEvenly,
    /// Equal gaps, half-size gaps at the outer edges
    SpacedAround,
    /// Equal gaps, no gap at the outer edges
    SpacedBetween,
    /// Fixed gap given by the element's spacing parameter
    SpacedBy,
}

impl VerticalArrangement {
    /// All arrangements in display order.
    pub const ALL: [Self; 7] = [
        Self::Top,
        Self::Bottom,
        Self::Center,
        Self::SpacedEvenly,
        Self::SpacedAround,
        Self::SpacedBetween,
        Self::SpacedBy,
    ];

    /// Get the display name for this arrangement.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Center => "Center",
            Self::SpacedEvenly => "SpacedEvenly",
            Self::SpacedAround => "SpacedAround",
            Self::SpacedBetween => "SpacedBetween",
            Self::SpacedBy => "SpacedBy",
        }
    }

    /// Whether this arrangement uses the spacing parameter.
    #[must_use]
    pub const fn uses_spacing(&self) -> bool {
        matches!(self, Self::SpacedBy)
    }
}

/// Parameters for a Box element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxParams {
    /// Alignment applied to every child
    pub content_alignment: ContentAlignment,
}

/// Parameters for a Column element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnParams {
    /// Vertical distribution of children
    pub vertical_arrangement: VerticalArrangement,
    /// Gap used by the SpacedBy arrangement (dp)
    pub vertical_spacing: u16,
    /// Horizontal alignment of each child
    pub horizontal_alignment: HorizontalAlignment,
}

/// Parameters for a Row element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowParams {
    /// Horizontal distribution of children
    pub horizontal_arrangement: HorizontalArrangement,
    /// Gap used by the SpacedBy arrangement (dp)
    pub horizontal_spacing: u16,
    /// Vertical alignment of each child
    pub vertical_alignment: VerticalAlignment,
}

/// Kind-tagged element parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementData {
    /// Box container parameters
    Box(BoxParams),
    /// Column container parameters
    Column(ColumnParams),
    /// Row container parameters
    Row(RowParams),
}

impl ElementData {
    /// The default parameter record for a container kind.
    #[must_use]
    pub fn default_for(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Box => Self::Box(BoxParams::default()),
            ElementKind::Column => Self::Column(ColumnParams::default()),
            ElementKind::Row => Self::Row(RowParams::default()),
        }
    }

    /// The container kind this record belongs to.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Box(_) => ElementKind::Box,
            Self::Column(_) => ElementKind::Column,
            Self::Row(_) => ElementKind::Row,
        }
    }
}

/// One element of the composed tree: kind-tagged parameters plus theming flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Kind-tagged layout parameters
    pub data: ElementData,
    /// Whether the rendered element follows the active theme colors
    pub theme_aware: bool,
}

impl Element {
    /// Creates an element of the given kind with default parameters.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            data: ElementData::default_for(kind),
            theme_aware: true,
        }
    }

    /// The container kind of this element.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.data.kind()
    }

    /// Switches the element to a new container kind.
    ///
    /// A kind change always resets the parameters to the new kind's defaults;
    /// fields are never mapped across variants. The theming flag is carried
    /// over. Switching to the current kind also resets parameters.
    #[must_use]
    pub fn switch_kind(&self, kind: ElementKind) -> Self {
        Self {
            data: ElementData::default_for(kind),
            theme_aware: self.theme_aware,
        }
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new(ElementKind::Box)
    }
}

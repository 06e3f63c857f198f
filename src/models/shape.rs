//! Shape parameters and resolution for clip, background, border and shadow.

use std::fmt;

/// Available shape choices for shape-carrying modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    /// Perfect circle, corner parameter ignored
    Circle,
    /// Rectangle with rounded corners of the given radius
    RoundedCorner,
    /// Rectangle with chamfered corners of the given cut size
    CutCorner,
    /// Sharp rectangle
    #[default]
    Rectangle,
}

impl Shape {
    /// All shapes in display order.
    pub const ALL: [Self; 4] = [
        Self::Circle,
        Self::RoundedCorner,
        Self::CutCorner,
        Self::Rectangle,
    ];

    /// Get the display name for this shape.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::RoundedCorner => "RoundedCorner",
            Self::CutCorner => "CutCorner",
            Self::Rectangle => "Rectangle",
        }
    }

    /// Whether the corner parameter has any effect for this shape.
    #[must_use]
    pub const fn uses_corner(&self) -> bool {
        matches!(self, Self::RoundedCorner | Self::CutCorner)
    }

    /// Resolves the shape choice plus corner parameter into a concrete
    /// drawable shape.
    ///
    /// Total function: a negative corner is clamped to 0, and the corner is
    /// ignored for Circle and Rectangle.
    #[must_use]
    pub fn resolve(&self, corner: i32) -> ResolvedShape {
        let corner = corner.max(0) as u32;
        match self {
            Self::Circle => ResolvedShape::Circle,
            Self::RoundedCorner => ResolvedShape::RoundedRectangle { radius: corner },
            Self::CutCorner => ResolvedShape::CutRectangle { cut: corner },
            Self::Rectangle => ResolvedShape::Rectangle,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A concrete drawable shape produced by [`Shape::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedShape {
    /// Sharp rectangle
    Rectangle,
    /// Perfect circle
    Circle,
    /// Rectangle with rounded corners
    RoundedRectangle {
        /// Corner radius (dp)
        radius: u32,
    },
    /// Rectangle with chamfered corners
    CutRectangle {
        /// Corner cut size (dp)
        cut: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_ignores_corner() {
        assert_eq!(Shape::Rectangle.resolve(16), ResolvedShape::Rectangle);
    }

    #[test]
    fn test_circle_ignores_corner() {
        assert_eq!(Shape::Circle.resolve(16), ResolvedShape::Circle);
    }

    #[test]
    fn test_rounded_corner_carries_radius() {
        assert_eq!(
            Shape::RoundedCorner.resolve(8),
            ResolvedShape::RoundedRectangle { radius: 8 }
        );
    }

    #[test]
    fn test_cut_corner_carries_cut() {
        assert_eq!(
            Shape::CutCorner.resolve(4),
            ResolvedShape::CutRectangle { cut: 4 }
        );
    }

    #[test]
    fn test_negative_corner_clamps_to_zero() {
        assert_eq!(
            Shape::RoundedCorner.resolve(-5),
            ResolvedShape::RoundedRectangle { radius: 0 }
        );
        assert_eq!(
            Shape::CutCorner.resolve(i32::MIN),
            ResolvedShape::CutRectangle { cut: 0 }
        );
    }
}

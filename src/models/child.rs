//! Child content carried by template children.
//!
//! Content is immutable; the editor only uses it to derive the header label
//! shown above each child's modifier lists.

use std::fmt;

/// Content emphasis for text children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentAlpha {
    /// Full emphasis
    #[default]
    High,
    /// Secondary emphasis
    Medium,
    /// Disabled appearance
    Disabled,
}

impl ContentAlpha {
    /// Get the display name for this emphasis level.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Disabled => "Disabled",
        }
    }
}

/// Typographic style for text children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextStyle {
    /// Regular body text
    #[default]
    Body1,
    /// Smaller body text
    Body2,
    /// Section heading
    Subtitle1,
    /// Large heading
    H5,
}

/// Content of one template child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildContent {
    /// A run of text
    Text {
        /// Text to display
        text: String,
        /// Typographic style
        style: TextStyle,
        /// Content emphasis
        alpha: ContentAlpha,
    },
    /// An image referenced by path
    Image {
        /// Path to the image resource
        path: String,
    },
    /// A single emoji glyph
    Emoji {
        /// The emoji glyph
        glyph: String,
    },
}

impl ChildContent {
    /// Creates a text child with default style and emphasis.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: TextStyle::default(),
            alpha: ContentAlpha::default(),
        }
    }

    /// Creates an image child.
    pub fn image(path: impl Into<String>) -> Self {
        Self::Image { path: path.into() }
    }

    /// Creates an emoji child.
    pub fn emoji(glyph: impl Into<String>) -> Self {
        Self::Emoji {
            glyph: glyph.into(),
        }
    }

    /// Header label for this child, shown above its modifier lists.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Text { text, .. } => format!("Text(\"{text}\")"),
            Self::Image { path } => format!("Image(\"{path}\")"),
            Self::Emoji { glyph } => format!("{glyph} emoji"),
        }
    }
}

impl fmt::Display for ChildContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_label() {
        assert_eq!(ChildContent::text("hello").label(), "Text(\"hello\")");
    }

    #[test]
    fn test_image_label() {
        assert_eq!(
            ChildContent::image("sun.png").label(),
            "Image(\"sun.png\")"
        );
    }

    #[test]
    fn test_emoji_label() {
        assert_eq!(ChildContent::emoji("🌈").label(), "🌈 emoji");
    }
}

//! Schematic live preview of the composed tree.
//!
//! The preview folds each modifier chain into a drawable style (size, fill,
//! padding, background, border, offset), places the parent block in the
//! panel, and lays children out by the parent's arrangement and alignment
//! parameters plus any scope modifiers. Disabled entries are skipped, so
//! toggling an entry updates the picture without losing its parameters.
//!
//! Terminal cells are roughly twice as tall as wide, so dp values map to
//! cells at different ratios per axis.

use ratatui::{
    layout::Rect,
    style::{Modifier as StyleModifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::element::ElementData;
use crate::models::{
    ChildContent, ContentAlignment, ContentAlpha, HorizontalAlignment, HorizontalArrangement,
    ModifierEntry, ModifierParams, ResolvedShape, RgbColor, ScopeModifierParams, Shape, Template,
    TemplateChild, VerticalAlignment, VerticalArrangement,
};

use super::theme::Theme;

/// Horizontal dp-to-cell scale.
const DP_PER_CELL_X: u16 = 4;
/// Vertical dp-to-cell scale.
const DP_PER_CELL_Y: u16 = 8;

const fn dp_x(dp: u16) -> u16 {
    dp / DP_PER_CELL_X
}

const fn dp_y(dp: u16) -> u16 {
    dp / DP_PER_CELL_Y
}

/// Drawable style folded from one modifier chain.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChainStyle {
    /// Background fill, last enabled Background wins
    pub background: Option<RgbColor>,
    /// Border stroke color, last enabled Border wins
    pub border: Option<RgbColor>,
    /// Whether any enabled shape rounds the corners
    pub rounded: bool,
    /// Fixed size in dp, last enabled Size wins
    pub size: Option<(u16, u16)>,
    /// Width fill fraction from FillMaxWidth/FillMaxSize
    pub fill_width: Option<f32>,
    /// Height fill fraction from FillMaxHeight/FillMaxSize
    pub fill_height: Option<f32>,
    /// Accumulated uniform padding in dp
    pub padding: u16,
    /// Offset in dp from the natural position
    pub offset: (i16, i16),
}

/// Folds the enabled entries of a chain, in application order.
#[must_use]
pub fn chain_style(entries: &[ModifierEntry]) -> ChainStyle {
    let mut style = ChainStyle::default();
    for entry in entries.iter().filter(|e| e.enabled) {
        match entry.params {
            ModifierParams::Size { width, height } => style.size = Some((width, height)),
            ModifierParams::FillMaxWidth { fraction } => style.fill_width = Some(fraction),
            ModifierParams::FillMaxHeight { fraction } => style.fill_height = Some(fraction),
            ModifierParams::FillMaxSize { fraction } => {
                style.fill_width = Some(fraction);
                style.fill_height = Some(fraction);
            }
            ModifierParams::Padding { all } => style.padding = style.padding.saturating_add(all),
            ModifierParams::Border { color, shape, corner, .. } => {
                style.border = Some(color);
                style.rounded |= is_rounded(shape, corner);
            }
            ModifierParams::Background { color, shape, corner } => {
                style.background = Some(color);
                style.rounded |= is_rounded(shape, corner);
            }
            ModifierParams::Clip { shape, corner } => {
                style.rounded |= is_rounded(shape, corner);
            }
            ModifierParams::Offset { x, y } => {
                style.offset = (
                    style.offset.0.saturating_add(x),
                    style.offset.1.saturating_add(y),
                );
            }
            // Shadow, rotation and scale have no terminal-cell equivalent
            ModifierParams::Shadow { .. }
            | ModifierParams::Rotate { .. }
            | ModifierParams::Scale { .. } => {}
        }
    }
    style
}

fn is_rounded(shape: Shape, corner: i32) -> bool {
    !matches!(shape.resolve(corner), ResolvedShape::Rectangle)
}

/// Places a box of the given size inside `outer` by alignment.
#[must_use]
pub fn place(outer: Rect, width: u16, height: u16, alignment: ContentAlignment) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    let spare_x = outer.width - width;
    let spare_y = outer.height - height;

    let x = match alignment {
        ContentAlignment::TopStart
        | ContentAlignment::CenterStart
        | ContentAlignment::BottomStart => 0,
        ContentAlignment::TopCenter | ContentAlignment::Center | ContentAlignment::BottomCenter => {
            spare_x / 2
        }
        ContentAlignment::TopEnd | ContentAlignment::CenterEnd | ContentAlignment::BottomEnd => {
            spare_x
        }
    };
    let y = match alignment {
        ContentAlignment::TopStart | ContentAlignment::TopCenter | ContentAlignment::TopEnd => 0,
        ContentAlignment::CenterStart | ContentAlignment::Center | ContentAlignment::CenterEnd => {
            spare_y / 2
        }
        ContentAlignment::BottomStart
        | ContentAlignment::BottomCenter
        | ContentAlignment::BottomEnd => spare_y,
    };

    Rect::new(outer.x + x, outer.y + y, width, height)
}

/// Common arrangement semantics shared by both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arrange {
    StartEdge,
    EndEdge,
    Center,
    SpacedEvenly,
    SpacedAround,
    SpacedBetween,
    SpacedBy,
}

impl From<VerticalArrangement> for Arrange {
    fn from(value: VerticalArrangement) -> Self {
        match value {
            VerticalArrangement::Top => Self::StartEdge,
            VerticalArrangement::Bottom => Self::EndEdge,
            VerticalArrangement::Center => Self::Center,
            VerticalArrangement::SpacedEvenly => Self::SpacedEvenly,
            VerticalArrangement::SpacedAround => Self::SpacedAround,
            VerticalArrangement::SpacedBetween => Self::SpacedBetween,
            VerticalArrangement::SpacedBy => Self::SpacedBy,
        }
    }
}

impl From<HorizontalArrangement> for Arrange {
    fn from(value: HorizontalArrangement) -> Self {
        match value {
            HorizontalArrangement::Start => Self::StartEdge,
            HorizontalArrangement::End => Self::EndEdge,
            HorizontalArrangement::Center => Self::Center,
            HorizontalArrangement::SpacedEvenly => Self::SpacedEvenly,
            HorizontalArrangement::SpacedAround => Self::SpacedAround,
            HorizontalArrangement::SpacedBetween => Self::SpacedBetween,
            HorizontalArrangement::SpacedBy => Self::SpacedBy,
        }
    }
}

/// Offsets of each item along one axis for the given arrangement.
fn arrange_offsets(total: u16, sizes: &[u16], arrangement: Arrange, spacing: u16) -> Vec<u16> {
    let n = sizes.len() as u16;
    if n == 0 {
        return Vec::new();
    }
    let sum: u16 = sizes.iter().sum();
    let spare = total.saturating_sub(sum);

    let (start, gap) = match arrangement {
        Arrange::StartEdge => (0, 0),
        Arrange::EndEdge => (spare, 0),
        Arrange::Center => (spare / 2, 0),
        Arrange::SpacedEvenly => {
            let gap = spare / (n + 1);
            (gap, gap)
        }
        Arrange::SpacedAround => {
            let gap = spare / n;
            (gap / 2, gap)
        }
        Arrange::SpacedBetween => {
            let gap = if n > 1 { spare / (n - 1) } else { 0 };
            (0, gap)
        }
        Arrange::SpacedBy => (0, spacing),
    };

    let mut offsets = Vec::with_capacity(sizes.len());
    let mut cursor = start;
    for size in sizes {
        offsets.push(cursor);
        cursor = cursor.saturating_add(*size).saturating_add(gap);
    }
    offsets
}

/// Distributes spare extent across weighted children.
fn apply_weights(sizes: &mut [u16], weights: &[Option<f32>], total: u16) {
    let weight_sum: f32 = weights.iter().flatten().sum();
    if weight_sum <= 0.0 {
        return;
    }
    let spare = total.saturating_sub(sizes.iter().sum());
    for (size, weight) in sizes.iter_mut().zip(weights) {
        if let Some(w) = weight {
            *size = size.saturating_add((f32::from(spare) * (w / weight_sum)) as u16);
        }
    }
}

fn child_weight(child: &TemplateChild) -> Option<f32> {
    child
        .scope_modifiers
        .iter()
        .filter(|e| e.enabled)
        .find_map(|e| match e.params {
            ScopeModifierParams::WeightInColumn { weight }
            | ScopeModifierParams::WeightInRow { weight } => Some(weight.max(1.0)),
            _ => None,
        })
}

fn child_box_alignment(child: &TemplateChild) -> Option<ContentAlignment> {
    child
        .scope_modifiers
        .iter()
        .filter(|e| e.enabled)
        .find_map(|e| match e.params {
            ScopeModifierParams::AlignInBox { alignment } => Some(alignment),
            _ => None,
        })
}

fn child_horizontal_alignment(child: &TemplateChild) -> Option<HorizontalAlignment> {
    child
        .scope_modifiers
        .iter()
        .filter(|e| e.enabled)
        .find_map(|e| match e.params {
            ScopeModifierParams::AlignInColumn { alignment } => Some(alignment),
            _ => None,
        })
}

fn child_vertical_alignment(child: &TemplateChild) -> Option<VerticalAlignment> {
    child
        .scope_modifiers
        .iter()
        .filter(|e| e.enabled)
        .find_map(|e| match e.params {
            ScopeModifierParams::AlignInRow { alignment } => Some(alignment),
            _ => None,
        })
}

fn content_text(content: &ChildContent) -> String {
    match content {
        ChildContent::Text { text, .. } => text.clone(),
        ChildContent::Image { path } => format!("[{path}]"),
        ChildContent::Emoji { glyph } => glyph.clone(),
    }
}

fn content_style(content: &ChildContent, theme: &Theme) -> Style {
    match content {
        ChildContent::Text { alpha, .. } => match alpha {
            ContentAlpha::High => Style::default().fg(theme.text),
            ContentAlpha::Medium => Style::default().fg(theme.text_secondary),
            ContentAlpha::Disabled => Style::default().fg(theme.text_muted),
        },
        ChildContent::Image { .. } | ChildContent::Emoji { .. } => {
            Style::default().fg(theme.text)
        }
    }
}

/// Natural size of a child in cells, before weights.
fn child_extent(child: &TemplateChild) -> (u16, u16) {
    let style = chain_style(&child.modifiers);
    if let Some((w, h)) = style.size {
        (dp_x(w).max(1), dp_y(h).max(1))
    } else {
        let label = content_text(&child.content);
        ((label.chars().count() as u16).max(1), 1)
    }
}

fn shift(rect: Rect, dx: i16, dy: i16, bounds: Rect) -> Rect {
    let x = (i32::from(rect.x) + i32::from(dx))
        .clamp(i32::from(bounds.x), i32::from(bounds.right().saturating_sub(rect.width)));
    let y = (i32::from(rect.y) + i32::from(dy))
        .clamp(i32::from(bounds.y), i32::from(bounds.bottom().saturating_sub(rect.height)));
    Rect::new(x as u16, y as u16, rect.width, rect.height)
}

fn render_child(f: &mut Frame, area: Rect, child: &TemplateChild, theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let style = chain_style(&child.modifiers);
    let area = shift(
        area,
        dp_x(style.offset.0.unsigned_abs()) as i16 * style.offset.0.signum(),
        dp_y(style.offset.1.unsigned_abs()) as i16 * style.offset.1.signum(),
        f.area(),
    );

    let mut block = Block::default();
    if let Some(bg) = style.background {
        block = block.style(Style::default().bg(bg.to_ratatui_color()));
    }
    if let Some(border) = style.border {
        block = block
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border.to_ratatui_color()));
        if style.rounded {
            block = block.border_type(BorderType::Rounded);
        }
    }
    let inner = block.inner(area);
    f.render_widget(block, area);

    let label = content_text(&child.content);
    if !label.is_empty() && inner.width > 0 && inner.height > 0 {
        let mut text_style = content_style(&child.content, theme);
        if let Some(bg) = style.background {
            text_style = text_style.bg(bg.to_ratatui_color());
        }
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(label, text_style))),
            inner,
        );
    }
}

/// Renders the preview panel for the active template.
pub fn render(f: &mut Frame, area: Rect, template: &Template, theme: &Theme) {
    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let canvas = block.inner(area);
    f.render_widget(block, area);
    if canvas.width < 4 || canvas.height < 3 {
        return;
    }

    let style = chain_style(&template.parent_modifiers);

    // Parent extent: explicit size, then fill fraction, then a default share
    let width = style.size.map_or_else(
        || {
            style.fill_width.map_or(canvas.width * 3 / 5, |frac| {
                (f32::from(canvas.width) * frac) as u16
            })
        },
        |(w, _)| dp_x(w),
    );
    let height = style.size.map_or_else(
        || {
            style.fill_height.map_or(canvas.height * 3 / 5, |frac| {
                (f32::from(canvas.height) * frac) as u16
            })
        },
        |(_, h)| dp_y(h),
    );

    let parent_rect = place(
        canvas,
        width.max(4),
        height.max(3),
        ContentAlignment::Center,
    );
    let parent_rect = shift(
        parent_rect,
        dp_x(style.offset.0.unsigned_abs()) as i16 * style.offset.0.signum(),
        dp_y(style.offset.1.unsigned_abs()) as i16 * style.offset.1.signum(),
        canvas,
    );

    let mut block = Block::default();
    if let Some(bg) = style.background {
        block = block.style(Style::default().bg(bg.to_ratatui_color()));
    }
    if let Some(border) = style.border {
        block = block
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(border.to_ratatui_color())
                    .add_modifier(StyleModifier::BOLD),
            );
    } else {
        block = block
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_muted));
    }
    if style.rounded {
        block = block.border_type(BorderType::Rounded);
    }
    let mut content = block.inner(parent_rect);
    f.render_widget(block, parent_rect);

    // Uniform padding shrinks the content area on all sides
    let pad_x = dp_x(style.padding);
    let pad_y = dp_y(style.padding);
    content = Rect {
        x: content.x + pad_x.min(content.width / 2),
        y: content.y + pad_y.min(content.height / 2),
        width: content.width.saturating_sub(pad_x * 2),
        height: content.height.saturating_sub(pad_y * 2),
    };
    if content.width == 0 || content.height == 0 {
        return;
    }

    match &template.parent.data {
        ElementData::Box(params) => {
            for child in &template.children {
                let (w, h) = child_extent(child);
                let alignment =
                    child_box_alignment(child).unwrap_or(params.content_alignment);
                let rect = place(content, w, h, alignment);
                render_child(f, rect, child, theme);
            }
        }
        ElementData::Column(params) => {
            let mut heights: Vec<u16> =
                template.children.iter().map(|c| child_extent(c).1).collect();
            let weights: Vec<Option<f32>> =
                template.children.iter().map(child_weight).collect();
            apply_weights(&mut heights, &weights, content.height);

            let offsets = arrange_offsets(
                content.height,
                &heights,
                params.vertical_arrangement.into(),
                dp_y(params.vertical_spacing).max(u16::from(
                    params.vertical_arrangement.uses_spacing() && params.vertical_spacing > 0,
                )),
            );
            for ((child, height), offset) in
                template.children.iter().zip(&heights).zip(&offsets)
            {
                let width = child_extent(child).0.min(content.width);
                let alignment = child_horizontal_alignment(child)
                    .unwrap_or(params.horizontal_alignment);
                let x = match alignment {
                    HorizontalAlignment::Start => content.x,
                    HorizontalAlignment::CenterHorizontally => {
                        content.x + (content.width - width) / 2
                    }
                    HorizontalAlignment::End => content.x + content.width - width,
                };
                let y = content.y.saturating_add(*offset);
                if y >= content.bottom() {
                    continue;
                }
                let height = (*height).min(content.bottom() - y);
                render_child(f, Rect::new(x, y, width, height), child, theme);
            }
        }
        ElementData::Row(params) => {
            let mut widths: Vec<u16> =
                template.children.iter().map(|c| child_extent(c).0).collect();
            let weights: Vec<Option<f32>> =
                template.children.iter().map(child_weight).collect();
            apply_weights(&mut widths, &weights, content.width);

            let offsets = arrange_offsets(
                content.width,
                &widths,
                params.horizontal_arrangement.into(),
                dp_x(params.horizontal_spacing).max(u16::from(
                    params.horizontal_arrangement.uses_spacing()
                        && params.horizontal_spacing > 0,
                )),
            );
            for ((child, width), offset) in
                template.children.iter().zip(&widths).zip(&offsets)
            {
                let height = child_extent(child).1.min(content.height);
                let alignment =
                    child_vertical_alignment(child).unwrap_or(params.vertical_alignment);
                let y = match alignment {
                    VerticalAlignment::Top => content.y,
                    VerticalAlignment::CenterVertically => {
                        content.y + (content.height - height) / 2
                    }
                    VerticalAlignment::Bottom => content.y + content.height - height,
                };
                let x = content.x.saturating_add(*offset);
                if x >= content.right() {
                    continue;
                }
                let width = (*width).min(content.right() - x);
                render_child(f, Rect::new(x, y, width, height), child, theme);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModifierKind;

    #[test]
    fn test_chain_style_skips_disabled_entries() {
        let mut background = ModifierEntry::new(ModifierKind::Background);
        background.enabled = false;
        let style = chain_style(&[background]);
        assert_eq!(style.background, None);
    }

    #[test]
    fn test_chain_style_last_background_wins() {
        let first = ModifierEntry {
            params: ModifierParams::Background {
                color: RgbColor::PINK,
                shape: Shape::Rectangle,
                corner: 0,
            },
            enabled: true,
        };
        let second = ModifierEntry {
            params: ModifierParams::Background {
                color: RgbColor::BLUE,
                shape: Shape::Rectangle,
                corner: 0,
            },
            enabled: true,
        };
        let style = chain_style(&[first, second]);
        assert_eq!(style.background, Some(RgbColor::BLUE));
    }

    #[test]
    fn test_chain_style_padding_accumulates() {
        let entries = [
            ModifierEntry {
                params: ModifierParams::Padding { all: 8 },
                enabled: true,
            },
            ModifierEntry {
                params: ModifierParams::Padding { all: 4 },
                enabled: true,
            },
        ];
        assert_eq!(chain_style(&entries).padding, 12);
    }

    #[test]
    fn test_rounded_shape_marks_style() {
        let entry = ModifierEntry {
            params: ModifierParams::Clip {
                shape: Shape::RoundedCorner,
                corner: 8,
            },
            enabled: true,
        };
        assert!(chain_style(&[entry]).rounded);

        let sharp = ModifierEntry {
            params: ModifierParams::Clip {
                shape: Shape::Rectangle,
                corner: 0,
            },
            enabled: true,
        };
        assert!(!chain_style(&[sharp]).rounded);
    }

    #[test]
    fn test_place_corners() {
        let outer = Rect::new(0, 0, 10, 10);
        assert_eq!(
            place(outer, 2, 2, ContentAlignment::TopStart),
            Rect::new(0, 0, 2, 2)
        );
        assert_eq!(
            place(outer, 2, 2, ContentAlignment::BottomEnd),
            Rect::new(8, 8, 2, 2)
        );
        assert_eq!(
            place(outer, 2, 2, ContentAlignment::Center),
            Rect::new(4, 4, 2, 2)
        );
    }

    #[test]
    fn test_place_clamps_oversized_content() {
        let outer = Rect::new(0, 0, 4, 4);
        let rect = place(outer, 10, 10, ContentAlignment::Center);
        assert_eq!(rect, outer);
    }

    #[test]
    fn test_arrange_offsets_spaced_between() {
        let offsets = arrange_offsets(10, &[2, 2], Arrange::SpacedBetween, 0);
        assert_eq!(offsets, vec![0, 8]);
    }

    #[test]
    fn test_arrange_offsets_end_edge() {
        let offsets = arrange_offsets(10, &[2, 2], Arrange::EndEdge, 0);
        assert_eq!(offsets, vec![6, 8]);
    }

    #[test]
    fn test_arrange_offsets_spaced_by() {
        let offsets = arrange_offsets(10, &[1, 1, 1], Arrange::SpacedBy, 2);
        assert_eq!(offsets, vec![0, 3, 6]);
    }

    #[test]
    fn test_apply_weights_distributes_spare() {
        let mut sizes = vec![1, 1];
        apply_weights(&mut sizes, &[Some(1.0), Some(1.0)], 10);
        assert_eq!(sizes, vec![5, 5]);
    }

    #[test]
    fn test_apply_weights_ignores_unweighted() {
        let mut sizes = vec![2, 2];
        apply_weights(&mut sizes, &[None, None], 10);
        assert_eq!(sizes, vec![2, 2]);
    }
}

//! Field-level editing of element and modifier parameters.
//!
//! The property panel edits one field at a time: Tab moves the field cursor
//! and h/l nudge the focused field. Enum fields cycle through their
//! catalogs, numeric fields step, and colors cycle through the palette the
//! default templates use. Each adjust function returns a new record for the
//! editor to apply, keeping the edit path pure.

use crate::models::element::{ElementData, HorizontalAlignment, VerticalAlignment};
use crate::models::modifier::{ModifierParams, ScopeModifierParams};
use crate::models::{
    ContentAlignment, HorizontalArrangement, RgbColor, Shape, VerticalArrangement,
};

/// Palette offered when cycling a color field.
const COLOR_CHOICES: [RgbColor; 8] = [
    RgbColor::YELLOW,
    RgbColor::BLUE,
    RgbColor::PINK,
    RgbColor::MAGENTA,
    RgbColor::AMBER,
    RgbColor::WHITE,
    RgbColor::GRAY,
    RgbColor::RAINBOW[0],
];

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, delta: i32) -> T {
    let len = all.len() as i32;
    let index = all.iter().position(|v| *v == current).unwrap_or(0) as i32;
    let next = (index + delta).rem_euclid(len);
    all[next as usize]
}

fn step_u16(value: u16, delta: i32) -> u16 {
    let next = i32::from(value) + delta;
    next.clamp(0, i32::from(u16::MAX)) as u16
}

fn step_i16(value: i16, delta: i32) -> i16 {
    let next = i32::from(value) + delta;
    next.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

fn step_fraction(value: f32, delta: i32) -> f32 {
    (value + delta as f32 * 0.1).clamp(0.0, 1.0)
}

fn step_corner(value: i32, delta: i32) -> i32 {
    (value + delta).max(0)
}

/// Number of editable fields of an element parameter record.
#[must_use]
pub const fn element_field_count(data: &ElementData) -> usize {
    match data {
        ElementData::Box(_) => 1,
        ElementData::Column(_) | ElementData::Row(_) => 3,
    }
}

/// Label plus current value of one element field, for the status bar.
#[must_use]
pub fn element_field_label(data: &ElementData, field: usize) -> String {
    match data {
        ElementData::Box(p) => format!(
            "contentAlignment = {}",
            p.content_alignment.display_name()
        ),
        ElementData::Column(p) => match field {
            0 => format!(
                "verticalArrangement = {}",
                p.vertical_arrangement.display_name()
            ),
            1 => format!("verticalSpacing = {}", p.vertical_spacing),
            _ => format!(
                "horizontalAlignment = {}",
                p.horizontal_alignment.display_name()
            ),
        },
        ElementData::Row(p) => match field {
            0 => format!(
                "horizontalArrangement = {}",
                p.horizontal_arrangement.display_name()
            ),
            1 => format!("horizontalSpacing = {}", p.horizontal_spacing),
            _ => format!(
                "verticalAlignment = {}",
                p.vertical_alignment.display_name()
            ),
        },
    }
}

/// Returns the element data with the focused field nudged by `delta`.
#[must_use]
pub fn adjust_element(data: ElementData, field: usize, delta: i32) -> ElementData {
    match data {
        ElementData::Box(mut p) => {
            p.content_alignment = cycle(&ContentAlignment::ALL, p.content_alignment, delta);
            ElementData::Box(p)
        }
        ElementData::Column(mut p) => {
            match field {
                0 => {
                    p.vertical_arrangement =
                        cycle(&VerticalArrangement::ALL, p.vertical_arrangement, delta);
                }
                1 => p.vertical_spacing = step_u16(p.vertical_spacing, delta),
                _ => {
                    p.horizontal_alignment =
                        cycle(&HorizontalAlignment::ALL, p.horizontal_alignment, delta);
                }
            }
            ElementData::Column(p)
        }
        ElementData::Row(mut p) => {
            match field {
                0 => {
                    p.horizontal_arrangement =
                        cycle(&HorizontalArrangement::ALL, p.horizontal_arrangement, delta);
                }
                1 => p.horizontal_spacing = step_u16(p.horizontal_spacing, delta),
                _ => {
                    p.vertical_alignment =
                        cycle(&VerticalAlignment::ALL, p.vertical_alignment, delta);
                }
            }
            ElementData::Row(p)
        }
    }
}

/// Number of editable fields of a modifier parameter record.
#[must_use]
pub const fn params_field_count(params: &ModifierParams) -> usize {
    match params {
        ModifierParams::FillMaxWidth { .. }
        | ModifierParams::FillMaxHeight { .. }
        | ModifierParams::FillMaxSize { .. }
        | ModifierParams::Padding { .. }
        | ModifierParams::Rotate { .. }
        | ModifierParams::Scale { .. } => 1,
        ModifierParams::Size { .. }
        | ModifierParams::Offset { .. }
        | ModifierParams::Clip { .. } => 2,
        ModifierParams::Background { .. } | ModifierParams::Shadow { .. } => 3,
        ModifierParams::Border { .. } => 4,
    }
}

/// Label plus current value of one modifier field, for the status bar.
#[must_use]
pub fn params_field_label(params: &ModifierParams, field: usize) -> String {
    match params {
        ModifierParams::Size { width, height } => match field {
            0 => format!("width = {width}"),
            _ => format!("height = {height}"),
        },
        ModifierParams::FillMaxWidth { fraction }
        | ModifierParams::FillMaxHeight { fraction }
        | ModifierParams::FillMaxSize { fraction } => format!("fraction = {fraction}"),
        ModifierParams::Padding { all } => format!("all = {all}"),
        ModifierParams::Border {
            width,
            color,
            shape,
            corner,
        } => match field {
            0 => format!("width = {width}"),
            1 => format!("color = {color}"),
            2 => format!("shape = {}", shape.display_name()),
            _ => format!("corner = {corner}"),
        },
        ModifierParams::Background {
            color,
            shape,
            corner,
        } => match field {
            0 => format!("color = {color}"),
            1 => format!("shape = {}", shape.display_name()),
            _ => format!("corner = {corner}"),
        },
        ModifierParams::Shadow {
            elevation,
            shape,
            corner,
        } => match field {
            0 => format!("elevation = {elevation}"),
            1 => format!("shape = {}", shape.display_name()),
            _ => format!("corner = {corner}"),
        },
        ModifierParams::Offset { x, y } => match field {
            0 => format!("x = {x}"),
            _ => format!("y = {y}"),
        },
        ModifierParams::Clip { shape, corner } => match field {
            0 => format!("shape = {}", shape.display_name()),
            _ => format!("corner = {corner}"),
        },
        ModifierParams::Rotate { degrees } => format!("degrees = {degrees}"),
        ModifierParams::Scale { scale } => format!("scale = {scale}"),
    }
}

/// Returns the modifier params with the focused field nudged by `delta`.
#[must_use]
pub fn adjust_params(params: ModifierParams, field: usize, delta: i32) -> ModifierParams {
    match params {
        ModifierParams::Size { width, height } => match field {
            0 => ModifierParams::Size {
                width: step_u16(width, delta),
                height,
            },
            _ => ModifierParams::Size {
                width,
                height: step_u16(height, delta),
            },
        },
        ModifierParams::FillMaxWidth { fraction } => ModifierParams::FillMaxWidth {
            fraction: step_fraction(fraction, delta),
        },
        ModifierParams::FillMaxHeight { fraction } => ModifierParams::FillMaxHeight {
            fraction: step_fraction(fraction, delta),
        },
        ModifierParams::FillMaxSize { fraction } => ModifierParams::FillMaxSize {
            fraction: step_fraction(fraction, delta),
        },
        ModifierParams::Padding { all } => ModifierParams::Padding {
            all: step_u16(all, delta),
        },
        ModifierParams::Border {
            width,
            color,
            shape,
            corner,
        } => match field {
            0 => ModifierParams::Border {
                width: step_u16(width, delta),
                color,
                shape,
                corner,
            },
            1 => ModifierParams::Border {
                width,
                color: cycle(&COLOR_CHOICES, color, delta),
                shape,
                corner,
            },
            2 => ModifierParams::Border {
                width,
                color,
                shape: cycle(&Shape::ALL, shape, delta),
                corner,
            },
            _ => ModifierParams::Border {
                width,
                color,
                shape,
                corner: step_corner(corner, delta),
            },
        },
        ModifierParams::Background {
            color,
            shape,
            corner,
        } => match field {
            0 => ModifierParams::Background {
                color: cycle(&COLOR_CHOICES, color, delta),
                shape,
                corner,
            },
            1 => ModifierParams::Background {
                color,
                shape: cycle(&Shape::ALL, shape, delta),
                corner,
            },
            _ => ModifierParams::Background {
                color,
                shape,
                corner: step_corner(corner, delta),
            },
        },
        ModifierParams::Shadow {
            elevation,
            shape,
            corner,
        } => match field {
            0 => ModifierParams::Shadow {
                elevation: step_u16(elevation, delta),
                shape,
                corner,
            },
            1 => ModifierParams::Shadow {
                elevation,
                shape: cycle(&Shape::ALL, shape, delta),
                corner,
            },
            _ => ModifierParams::Shadow {
                elevation,
                shape,
                corner: step_corner(corner, delta),
            },
        },
        ModifierParams::Offset { x, y } => match field {
            0 => ModifierParams::Offset {
                x: step_i16(x, delta),
                y,
            },
            _ => ModifierParams::Offset {
                x,
                y: step_i16(y, delta),
            },
        },
        ModifierParams::Clip { shape, corner } => match field {
            0 => ModifierParams::Clip {
                shape: cycle(&Shape::ALL, shape, delta),
                corner,
            },
            _ => ModifierParams::Clip {
                shape,
                corner: step_corner(corner, delta),
            },
        },
        ModifierParams::Rotate { degrees } => ModifierParams::Rotate {
            degrees: degrees + delta as f32 * 5.0,
        },
        ModifierParams::Scale { scale } => ModifierParams::Scale {
            scale: (scale + delta as f32 * 0.1).max(0.0),
        },
    }
}

/// Number of editable fields of a scope-modifier parameter record.
#[must_use]
pub const fn scope_field_count(_params: &ScopeModifierParams) -> usize {
    // Every scope modifier carries exactly one parameter
    1
}

/// Label plus current value of the scope-modifier field.
#[must_use]
pub fn scope_field_label(params: &ScopeModifierParams) -> String {
    match params {
        ScopeModifierParams::AlignInBox { alignment } => {
            format!("alignment = {}", alignment.display_name())
        }
        ScopeModifierParams::AlignInColumn { alignment } => {
            format!("alignment = {}", alignment.display_name())
        }
        ScopeModifierParams::AlignInRow { alignment } => {
            format!("alignment = {}", alignment.display_name())
        }
        ScopeModifierParams::WeightInColumn { weight }
        | ScopeModifierParams::WeightInRow { weight } => format!("weight = {weight}"),
    }
}

/// Returns the scope params with their single field nudged by `delta`.
#[must_use]
pub fn adjust_scope(params: ScopeModifierParams, delta: i32) -> ScopeModifierParams {
    match params {
        ScopeModifierParams::AlignInBox { alignment } => ScopeModifierParams::AlignInBox {
            alignment: cycle(&ContentAlignment::ALL, alignment, delta),
        },
        ScopeModifierParams::AlignInColumn { alignment } => ScopeModifierParams::AlignInColumn {
            alignment: cycle(&HorizontalAlignment::ALL, alignment, delta),
        },
        ScopeModifierParams::AlignInRow { alignment } => ScopeModifierParams::AlignInRow {
            alignment: cycle(&VerticalAlignment::ALL, alignment, delta),
        },
        ScopeModifierParams::WeightInColumn { weight } => ScopeModifierParams::WeightInColumn {
            weight: (weight + delta as f32 * 0.5).max(0.5),
        },
        ScopeModifierParams::WeightInRow { weight } => ScopeModifierParams::WeightInRow {
            weight: (weight + delta as f32 * 0.5).max(0.5),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::element::{BoxParams, ColumnParams};

    #[test]
    fn test_cycle_wraps_both_directions() {
        assert_eq!(
            cycle(&Shape::ALL, Shape::Rectangle, 1),
            Shape::Circle,
            "forward from last wraps to first"
        );
        assert_eq!(cycle(&Shape::ALL, Shape::Circle, -1), Shape::Rectangle);
    }

    #[test]
    fn test_adjust_box_alignment_cycles() {
        let data = ElementData::Box(BoxParams::default());
        let next = adjust_element(data, 0, 1);
        assert_eq!(
            next,
            ElementData::Box(BoxParams {
                content_alignment: ContentAlignment::TopCenter,
            })
        );
    }

    #[test]
    fn test_adjust_column_spacing_does_not_go_negative() {
        let data = ElementData::Column(ColumnParams::default());
        let next = adjust_element(data, 1, -1);
        assert_eq!(next, data);
    }

    #[test]
    fn test_adjust_params_keeps_kind() {
        for kind in crate::models::ModifierKind::ALL {
            let params = ModifierParams::default_for(kind);
            for field in 0..params_field_count(&params) {
                assert_eq!(adjust_params(params, field, 1).kind(), kind);
                assert_eq!(adjust_params(params, field, -1).kind(), kind);
            }
        }
    }

    #[test]
    fn test_fraction_clamps_to_unit_interval() {
        let params = ModifierParams::FillMaxWidth { fraction: 1.0 };
        assert_eq!(
            adjust_params(params, 0, 1),
            ModifierParams::FillMaxWidth { fraction: 1.0 }
        );
        let params = ModifierParams::FillMaxWidth { fraction: 0.0 };
        assert_eq!(
            adjust_params(params, 0, -1),
            ModifierParams::FillMaxWidth { fraction: 0.0 }
        );
    }

    #[test]
    fn test_corner_clamps_at_zero() {
        let params = ModifierParams::Clip {
            shape: Shape::RoundedCorner,
            corner: 0,
        };
        assert_eq!(adjust_params(params, 1, -1), params);
    }

    #[test]
    fn test_adjust_scope_keeps_kind() {
        let params = ScopeModifierParams::WeightInRow { weight: 1.0 };
        let next = adjust_scope(params, 1);
        assert_eq!(next.kind(), params.kind());
        assert_eq!(next, ScopeModifierParams::WeightInRow { weight: 1.5 });
    }
}

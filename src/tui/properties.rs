//! Properties panel: the selectable rows of the editor.
//!
//! The panel flattens the active template into a list of rows (parent
//! element, list headers, modifier entries) so navigation is a single
//! cursor. Rows are rebuilt from the session state after every edit, which
//! keeps the panel a pure function of the model.

use ratatui::{
    layout::Rect,
    style::{Modifier as StyleModifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::editor::ListRef;
use crate::models::Template;

use super::theme::Theme;

/// One selectable row of the properties panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRow {
    /// The parent element and its parameters
    ParentElement,
    /// Header of one modifier list; selecting it targets adds at that list
    ListHeader(ListRef),
    /// One modifier entry
    Entry {
        /// The list containing the entry
        list: ListRef,
        /// Position within the list
        index: usize,
    },
}

impl PanelRow {
    /// The list this row addresses, if any.
    #[must_use]
    pub const fn list(&self) -> Option<ListRef> {
        match self {
            Self::ParentElement => None,
            Self::ListHeader(list) => Some(*list),
            Self::Entry { list, .. } => Some(*list),
        }
    }
}

/// Flattens the template into panel rows in display order.
#[must_use]
pub fn build_rows(template: &Template) -> Vec<PanelRow> {
    let mut rows = vec![PanelRow::ParentElement, PanelRow::ListHeader(ListRef::Parent)];
    for index in 0..template.parent_modifiers.len() {
        rows.push(PanelRow::Entry {
            list: ListRef::Parent,
            index,
        });
    }
    for (child_index, child) in template.children.iter().enumerate() {
        rows.push(PanelRow::ListHeader(ListRef::ChildScope(child_index)));
        for index in 0..child.scope_modifiers.len() {
            rows.push(PanelRow::Entry {
                list: ListRef::ChildScope(child_index),
                index,
            });
        }
        rows.push(PanelRow::ListHeader(ListRef::Child(child_index)));
        for index in 0..child.modifiers.len() {
            rows.push(PanelRow::Entry {
                list: ListRef::Child(child_index),
                index,
            });
        }
    }
    rows
}

fn row_line<'a>(template: &Template, row: &PanelRow, theme: &Theme) -> Line<'a> {
    match row {
        PanelRow::ParentElement => {
            let parent = &template.parent;
            Line::from(vec![
                Span::styled(
                    " Parent element  ",
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(StyleModifier::BOLD),
                ),
                Span::styled(
                    parent.kind().display_name().to_string(),
                    Style::default().fg(theme.accent),
                ),
            ])
        }
        PanelRow::ListHeader(list) => {
            let label = match list {
                ListRef::Parent => " Modifiers".to_string(),
                ListRef::ChildScope(i) => format!(
                    " {}  ·  {}Scope modifiers",
                    template.children[*i].content.label(),
                    template.parent.kind().display_name()
                ),
                ListRef::Child(_) => "   Modifiers".to_string(),
            };
            Line::from(Span::styled(
                label,
                Style::default()
                    .fg(theme.text_secondary)
                    .add_modifier(StyleModifier::BOLD),
            ))
        }
        PanelRow::Entry { list, index } => {
            let (summary, enabled) = match list {
                ListRef::Parent => {
                    let e = &template.parent_modifiers[*index];
                    (e.params.summary(), e.enabled)
                }
                ListRef::ChildScope(i) => {
                    let e = &template.children[*i].scope_modifiers[*index];
                    (e.params.summary(), e.enabled)
                }
                ListRef::Child(i) => {
                    let e = &template.children[*i].modifiers[*index];
                    (e.params.summary(), e.enabled)
                }
            };
            let marker = if enabled { "[x]" } else { "[ ]" };
            let style = if enabled {
                Style::default().fg(theme.text)
            } else {
                // Mirrors the 40% alpha the disabled state renders with
                Style::default().fg(theme.text_muted)
            };
            Line::from(Span::styled(format!("   {marker} {summary}"), style))
        }
    }
}

/// Renders the properties panel with the given cursor position.
pub fn render(
    f: &mut Frame,
    area: Rect,
    template: &Template,
    rows: &[PanelRow],
    selected: usize,
    dirty: bool,
    theme: &Theme,
) {
    let title = if dirty {
        format!(" {} * ", template.name)
    } else {
        format!(" {} ", template.name)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Keep the selected row visible
    let visible = inner.height as usize;
    let skip = if visible == 0 {
        0
    } else {
        selected.saturating_sub(visible.saturating_sub(1))
    };

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible)
        .map(|(i, row)| {
            let mut line = row_line(template, row, theme);
            if i == selected {
                line = line.style(Style::default().bg(theme.highlight_bg));
            }
            ListItem::new(line)
        })
        .collect();

    f.render_widget(List::new(items), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_every_entry() {
        let template = Template::simple_card();
        let rows = build_rows(&template);

        let entries = rows
            .iter()
            .filter(|r| matches!(r, PanelRow::Entry { .. }))
            .count();
        let expected = template.parent_modifiers.len()
            + template
                .children
                .iter()
                .map(|c| c.scope_modifiers.len() + c.modifiers.len())
                .sum::<usize>();
        assert_eq!(entries, expected);

        // One element row, one parent header, two headers per child
        let headers = rows
            .iter()
            .filter(|r| matches!(r, PanelRow::ListHeader(_)))
            .count();
        assert_eq!(headers, 1 + 2 * template.children.len());
        assert_eq!(rows[0], PanelRow::ParentElement);
    }

    #[test]
    fn test_rows_follow_list_order() {
        let template = Template::pink_square();
        let rows = build_rows(&template);

        let first_entry = rows
            .iter()
            .position(|r| matches!(r, PanelRow::Entry { .. }))
            .unwrap();
        assert_eq!(
            rows[first_entry],
            PanelRow::Entry {
                list: ListRef::Parent,
                index: 0
            }
        );
    }
}

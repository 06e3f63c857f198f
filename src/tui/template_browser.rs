//! Template browser for switching between catalog templates.
//!
//! The catalog is compiled in, so unlike a file-backed browser there is no
//! scanning step; the browser is a plain list picker over template names with
//! a short description of each template's structure.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier as StyleModifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::models::Template;

use super::component::{centered_rect, Component};
use super::theme::Theme;

/// Events emitted by the template browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateBrowserEvent {
    /// User chose the catalog template at this index
    Selected(usize),
    /// User dismissed the browser
    Cancelled,
}

/// Popup browser over the compiled-in template catalog.
#[derive(Debug, Clone)]
pub struct TemplateBrowser {
    templates: Vec<Template>,
    selected: usize,
}

impl TemplateBrowser {
    /// Creates a browser over the catalog, highlighting the active template.
    #[must_use]
    pub fn new(active_name: &str) -> Self {
        let templates = Template::catalog();
        let selected = templates
            .iter()
            .position(|t| t.name == active_name)
            .unwrap_or(0);
        Self {
            templates,
            selected,
        }
    }

    /// Currently highlighted index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// The templates on offer.
    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    fn describe(template: &Template) -> String {
        format!(
            "{} · {} modifiers · {} children",
            template.parent.kind().display_name(),
            template.parent_modifiers.len(),
            template.children.len()
        )
    }
}

impl Component for TemplateBrowser {
    type Event = TemplateBrowserEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.templates.len() {
                    self.selected += 1;
                } else {
                    self.selected = 0;
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                } else {
                    self.selected = self.templates.len().saturating_sub(1);
                }
                None
            }
            KeyCode::Enter => Some(TemplateBrowserEvent::Selected(self.selected)),
            KeyCode::Esc | KeyCode::Char('q') => Some(TemplateBrowserEvent::Cancelled),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(50, 60, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Templates ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));

        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let items: Vec<ListItem> = self
            .templates
            .iter()
            .enumerate()
            .map(|(i, template)| {
                let (name_style, desc_style) = if i == self.selected {
                    (
                        Style::default()
                            .fg(theme.background)
                            .bg(theme.primary)
                            .add_modifier(StyleModifier::BOLD),
                        Style::default().fg(theme.background).bg(theme.primary),
                    )
                } else {
                    (
                        Style::default().fg(theme.text),
                        Style::default().fg(theme.text_muted),
                    )
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {:<14}", template.name), name_style),
                    Span::styled(format!(" {}", Self::describe(template)), desc_style),
                ]))
            })
            .collect();

        let list_area = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };
        f.render_widget(List::new(items), list_area);

        let help = Paragraph::new(Line::from(Span::styled(
            " ↑/↓ select · Enter load · Esc cancel",
            Style::default().fg(theme.text_muted),
        )));
        let help_area = Rect {
            y: inner.bottom().saturating_sub(1),
            height: 1,
            ..inner
        };
        f.render_widget(help, help_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_browser_starts_on_active_template() {
        let browser = TemplateBrowser::new("Sun");
        assert_eq!(browser.selected(), 2);
    }

    #[test]
    fn test_unknown_active_name_falls_back_to_first() {
        let browser = TemplateBrowser::new("does not exist");
        assert_eq!(browser.selected(), 0);
    }

    #[test]
    fn test_enter_emits_selected_index() {
        let mut browser = TemplateBrowser::new("Pink square");
        browser.handle_input(key(KeyCode::Down));
        assert_eq!(
            browser.handle_input(key(KeyCode::Enter)),
            Some(TemplateBrowserEvent::Selected(1))
        );
    }

    #[test]
    fn test_navigation_wraps_around() {
        let mut browser = TemplateBrowser::new("Pink square");
        browser.handle_input(key(KeyCode::Up));
        assert_eq!(browser.selected(), 3);
        browser.handle_input(key(KeyCode::Down));
        assert_eq!(browser.selected(), 0);
    }
}

//! Modifier picker dialog for adding a modifier to a list.
//!
//! The picker shows either the full general catalog or, for a child's scope
//! list, only the kinds legal under the current parent container. It
//! implements the [`Component`] trait and emits a typed selection event.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier as StyleModifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::editor::scope;
use crate::editor::ListRef;
use crate::models::{ElementKind, ModifierKind, ScopeModifierKind};

use super::component::{centered_rect, Component};
use super::theme::Theme;

/// What catalog the picker offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerCatalog {
    /// All general modifier kinds
    General,
    /// Scope-modifier kinds legal under the given container
    Scope(ElementKind),
}

/// Events emitted by the modifier picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModifierPickerEvent {
    /// User chose a general modifier kind
    General(ModifierKind),
    /// User chose a scope-modifier kind
    Scope(ScopeModifierKind),
    /// User dismissed the picker
    Cancelled,
}

/// Popup picker over the modifier kind catalog for one target list.
#[derive(Debug, Clone)]
pub struct ModifierPicker {
    /// Which list the selection will be added to
    pub target: ListRef,
    catalog: PickerCatalog,
    selected: usize,
}

impl ModifierPicker {
    /// Creates a picker over the general catalog.
    #[must_use]
    pub const fn general(target: ListRef) -> Self {
        Self {
            target,
            catalog: PickerCatalog::General,
            selected: 0,
        }
    }

    /// Creates a picker over the scope catalog of the given container.
    #[must_use]
    pub const fn scoped(target: ListRef, container: ElementKind) -> Self {
        Self {
            target,
            catalog: PickerCatalog::Scope(container),
            selected: 0,
        }
    }

    /// Number of kinds on offer.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.catalog {
            PickerCatalog::General => ModifierKind::ALL.len(),
            PickerCatalog::Scope(container) => scope::allowed_kinds(container).len(),
        }
    }

    /// Whether the catalog is empty (never the case for valid containers).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Currently highlighted index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.len() {
            self.selected += 1;
        } else {
            self.selected = 0;
        }
    }

    fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = self.len().saturating_sub(1);
        }
    }

    fn selection_event(&self) -> ModifierPickerEvent {
        match self.catalog {
            PickerCatalog::General => {
                ModifierPickerEvent::General(ModifierKind::ALL[self.selected])
            }
            PickerCatalog::Scope(container) => {
                ModifierPickerEvent::Scope(scope::allowed_kinds(container)[self.selected])
            }
        }
    }

    fn title(&self) -> String {
        match self.catalog {
            PickerCatalog::General => " Add modifier ".to_string(),
            PickerCatalog::Scope(container) => {
                format!(" Add {}Scope modifier ", container.display_name())
            }
        }
    }

    fn item_label(&self, index: usize) -> &'static str {
        match self.catalog {
            PickerCatalog::General => ModifierKind::ALL[index].display_name(),
            PickerCatalog::Scope(container) => {
                scope::allowed_kinds(container)[index].display_name()
            }
        }
    }
}

impl Component for ModifierPicker {
    type Event = ModifierPickerEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Enter => Some(self.selection_event()),
            KeyCode::Esc | KeyCode::Char('q') => Some(ModifierPickerEvent::Cancelled),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(36, 70, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));

        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let items: Vec<ListItem> = (0..self.len())
            .map(|i| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(theme.background)
                        .bg(theme.primary)
                        .add_modifier(StyleModifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                ListItem::new(Line::from(Span::styled(
                    format!(" {} ", self.item_label(i)),
                    style,
                )))
            })
            .collect();

        let list_area = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };
        f.render_widget(List::new(items), list_area);

        let help = Paragraph::new(Line::from(Span::styled(
            " ↑/↓ select · Enter add · Esc cancel",
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
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_general_picker_offers_all_kinds() {
        let picker = ModifierPicker::general(ListRef::Parent);
        assert_eq!(picker.len(), 12);
    }

    #[test]
    fn test_scope_picker_is_filtered_by_container() {
        let picker = ModifierPicker::scoped(ListRef::ChildScope(0), ElementKind::Box);
        assert_eq!(picker.len(), 1);

        let picker = ModifierPicker::scoped(ListRef::ChildScope(0), ElementKind::Row);
        assert_eq!(picker.len(), 2);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut picker = ModifierPicker::scoped(ListRef::ChildScope(0), ElementKind::Column);
        assert_eq!(picker.selected(), 0);

        picker.handle_input(key(KeyCode::Up));
        assert_eq!(picker.selected(), 1);

        picker.handle_input(key(KeyCode::Down));
        assert_eq!(picker.selected(), 0);
    }

    #[test]
    fn test_enter_emits_selection() {
        let mut picker = ModifierPicker::general(ListRef::Parent);
        picker.handle_input(key(KeyCode::Down));
        let event = picker.handle_input(key(KeyCode::Enter));
        assert_eq!(
            event,
            Some(ModifierPickerEvent::General(ModifierKind::FillMaxWidth))
        );
    }

    #[test]
    fn test_esc_cancels() {
        let mut picker = ModifierPicker::general(ListRef::Parent);
        assert_eq!(
            picker.handle_input(key(KeyCode::Esc)),
            Some(ModifierPickerEvent::Cancelled)
        );
    }

    #[test]
    fn test_scope_selection_event_is_scoped_kind() {
        let mut picker = ModifierPicker::scoped(ListRef::ChildScope(1), ElementKind::Row);
        let event = picker.handle_input(key(KeyCode::Enter));
        assert_eq!(
            event,
            Some(ModifierPickerEvent::Scope(ScopeModifierKind::WeightInRow))
        );
    }
}

//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

pub mod component;
pub mod fields;
pub mod help_overlay;
pub mod modifier_picker;
pub mod preview;
pub mod properties;
pub mod status_bar;
pub mod template_browser;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout},
    style::{Modifier as StyleModifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::editor::{EntryEdit, ListRef, ScopeEntryEdit, Session};
use crate::models::{ElementKind, ModifierParams, ScopeModifierParams, Template};

pub use component::{centered_rect, Component};
pub use help_overlay::HelpOverlay;
pub use modifier_picker::{ModifierPicker, ModifierPickerEvent};
pub use properties::PanelRow;
pub use status_bar::StatusBar;
pub use template_browser::{TemplateBrowser, TemplateBrowserEvent};
pub use theme::Theme;

/// Popup currently capturing input, if any.
pub enum Popup {
    /// Modifier kind picker for one target list
    ModifierPicker(ModifierPicker),
    /// Template catalog browser
    TemplateBrowser(TemplateBrowser),
}

/// All mutable state of the running application.
pub struct AppState {
    /// Persisted UI preferences
    pub config: Config,
    /// Resolved color theme, re-derived every frame from the config
    pub theme: Theme,
    /// The editing session holding the live template
    pub session: Session,
    /// Flattened panel rows of the live template
    pub rows: Vec<PanelRow>,
    /// Cursor position in `rows`
    pub selected: usize,
    /// Focused field of the selected row
    pub field: usize,
    /// Popup capturing input, if any
    pub active_popup: Option<Popup>,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Whether the preview panel is shown
    pub show_preview: bool,
    /// Transient status message
    pub status_message: String,
    /// Sticky error message, cleared on the next action
    pub error_message: Option<String>,
    /// Set when the user quits
    pub should_quit: bool,
}

impl AppState {
    /// Creates the application state for one session.
    #[must_use]
    pub fn new(config: Config, session: Session) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let rows = properties::build_rows(session.current());
        let show_preview = config.ui.show_preview;
        Self {
            config,
            theme,
            session,
            rows,
            selected: 0,
            field: 0,
            active_popup: None,
            show_help: false,
            show_preview,
            status_message: String::new(),
            error_message: None,
            should_quit: false,
        }
    }

    /// Rebuilds the panel rows after an edit and clamps the cursor.
    fn refresh_rows(&mut self) {
        self.rows = properties::build_rows(self.session.current());
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
        self.clamp_field();
    }

    fn clamp_field(&mut self) {
        let count = self.field_count();
        if count == 0 || self.field >= count {
            self.field = 0;
        }
    }

    /// The row under the cursor.
    #[must_use]
    pub fn selected_row(&self) -> Option<&PanelRow> {
        self.rows.get(self.selected)
    }

    /// Number of editable fields of the selected row.
    #[must_use]
    pub fn field_count(&self) -> usize {
        let template = self.session.current();
        match self.selected_row() {
            Some(PanelRow::ParentElement) => fields::element_field_count(&template.parent.data),
            Some(PanelRow::Entry { list, index }) => match list {
                ListRef::Parent => {
                    fields::params_field_count(&template.parent_modifiers[*index].params)
                }
                ListRef::Child(i) => {
                    fields::params_field_count(&template.children[*i].modifiers[*index].params)
                }
                ListRef::ChildScope(i) => fields::scope_field_count(
                    &template.children[*i].scope_modifiers[*index].params,
                ),
            },
            Some(PanelRow::ListHeader(_)) | None => 0,
        }
    }

    /// Label of the focused field, for the status bar.
    #[must_use]
    pub fn field_label(&self) -> Option<String> {
        let template = self.session.current();
        match self.selected_row()? {
            PanelRow::ParentElement => Some(fields::element_field_label(
                &template.parent.data,
                self.field,
            )),
            PanelRow::Entry { list, index } => match list {
                ListRef::Parent => Some(fields::params_field_label(
                    &template.parent_modifiers[*index].params,
                    self.field,
                )),
                ListRef::Child(i) => Some(fields::params_field_label(
                    &template.children[*i].modifiers[*index].params,
                    self.field,
                )),
                ListRef::ChildScope(i) => Some(fields::scope_field_label(
                    &template.children[*i].scope_modifiers[*index].params,
                )),
            },
            PanelRow::ListHeader(_) => None,
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    fn set_error(&mut self, error: &crate::editor::EditError) {
        self.error_message = Some(error.to_string());
        self.status_message.clear();
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
        self.field = 0;
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.field = 0;
    }

    fn next_field(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.field = (self.field + 1) % count;
        }
    }

    /// Opens the picker appropriate for the selected row's list.
    fn open_picker(&mut self) {
        let target = self
            .selected_row()
            .and_then(PanelRow::list)
            .unwrap_or(ListRef::Parent);
        let picker = match target {
            ListRef::Parent | ListRef::Child(_) => ModifierPicker::general(target),
            ListRef::ChildScope(_) => {
                ModifierPicker::scoped(target, self.session.current().parent.kind())
            }
        };
        self.active_popup = Some(Popup::ModifierPicker(picker));
    }

    /// Nudges the focused field of the selected row by `delta`.
    fn adjust_selected(&mut self, delta: i32) {
        let Some(row) = self.selected_row().cloned() else {
            return;
        };
        let template = self.session.current();
        let result = match row {
            PanelRow::ParentElement => {
                let data = fields::adjust_element(template.parent.data, self.field, delta);
                self.session.set_parent_data(data)
            }
            PanelRow::Entry { list, index } => match list {
                ListRef::Parent | ListRef::Child(_) => {
                    let params = self.entry_params(list, index);
                    let params = fields::adjust_params(params, self.field, delta);
                    self.session
                        .edit_modifier(list, index, EntryEdit::Params(params))
                }
                ListRef::ChildScope(child) => {
                    let params = self.scope_entry_params(child, index);
                    let params = fields::adjust_scope(params, delta);
                    self.session
                        .edit_scope_modifier(child, index, ScopeEntryEdit::Params(params))
                }
            },
            PanelRow::ListHeader(_) => return,
        };
        match result {
            Ok(()) => self.refresh_rows(),
            Err(error) => self.set_error(&error),
        }
    }

    fn entry_params(&self, list: ListRef, index: usize) -> ModifierParams {
        let template = self.session.current();
        match list {
            ListRef::Child(i) => template.children[i].modifiers[index].params,
            // Callers only pass general lists here
            ListRef::Parent | ListRef::ChildScope(_) => template.parent_modifiers[index].params,
        }
    }

    fn scope_entry_params(&self, child: usize, index: usize) -> ScopeModifierParams {
        self.session.current().children[child].scope_modifiers[index].params
    }

    fn remove_selected(&mut self) {
        if let Some(PanelRow::Entry { list, index }) = self.selected_row().cloned() {
            match self.session.remove(list, index) {
                Ok(()) => {
                    self.refresh_rows();
                    self.set_status("Removed modifier");
                }
                Err(error) => self.set_error(&error),
            }
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(PanelRow::Entry { list, index }) = self.selected_row().cloned() {
            match self.session.toggle_enabled(list, index) {
                Ok(()) => self.refresh_rows(),
                Err(error) => self.set_error(&error),
            }
        }
    }

    /// Swaps the selected entry with its neighbor, moving the cursor with it.
    fn move_selected(&mut self, delta: i32) {
        let Some(PanelRow::Entry { list, index }) = self.selected_row().cloned() else {
            return;
        };
        let Ok(len) = self.session.entry_count(list) else {
            return;
        };
        let to = index as i32 + delta;
        if to < 0 || to as usize >= len {
            return;
        }
        match self.session.reorder(list, index, to as usize) {
            Ok(()) => {
                self.selected = (self.selected as i32 + delta) as usize;
                self.refresh_rows();
            }
            Err(error) => self.set_error(&error),
        }
    }

    /// Switches the parent element to the next kind in the catalog.
    fn cycle_element_kind(&mut self) {
        let current = self.session.current().parent.kind();
        let position = ElementKind::ALL
            .iter()
            .position(|k| *k == current)
            .unwrap_or(0);
        let next = ElementKind::ALL[(position + 1) % ElementKind::ALL.len()];
        self.session.set_element_kind(next);
        self.refresh_rows();
        self.set_status(format!("Parent element switched to {}", next.display_name()));
    }

    fn apply_picker_event(&mut self, event: ModifierPickerEvent, target: ListRef) {
        match event {
            ModifierPickerEvent::General(kind) => match self.session.add_modifier(target, kind) {
                Ok(()) => {
                    self.refresh_rows();
                    self.set_status(format!("Added {}", kind.display_name()));
                }
                Err(error) => self.set_error(&error),
            },
            ModifierPickerEvent::Scope(kind) => {
                let ListRef::ChildScope(child) = target else {
                    return;
                };
                match self.session.add_scope_modifier(child, kind) {
                    Ok(()) => {
                        self.refresh_rows();
                        self.set_status(format!("Added {}", kind.display_name()));
                    }
                    Err(error) => self.set_error(&error),
                }
            }
            ModifierPickerEvent::Cancelled => {}
        }
    }

    fn apply_browser_event(&mut self, event: TemplateBrowserEvent) {
        if let TemplateBrowserEvent::Selected(index) = event {
            if let Some(template) = Template::catalog().into_iter().nth(index) {
                let name = template.name.clone();
                self.session.select_template(template);
                self.selected = 0;
                self.field = 0;
                self.refresh_rows();
                self.set_status(format!("Loaded template {name}"));
            }
        }
    }
}

/// Handles one key event. Returns `true` when the user quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> bool {
    // Any keypress dismisses a stale message
    state.status_message.clear();

    if state.show_help {
        state.show_help = false;
        return false;
    }

    if let Some(mut popup) = state.active_popup.take() {
        let done = match &mut popup {
            Popup::ModifierPicker(picker) => {
                let target = picker.target;
                if let Some(event) = picker.handle_input(key) {
                    state.apply_picker_event(event, target);
                    true
                } else {
                    false
                }
            }
            Popup::TemplateBrowser(browser) => {
                if let Some(event) = browser.handle_input(key) {
                    state.apply_browser_event(event);
                    true
                } else {
                    false
                }
            }
        };
        if !done {
            state.active_popup = Some(popup);
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
            return true;
        }
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Tab => state.next_field(),
        KeyCode::Left | KeyCode::Char('h') => state.adjust_selected(-1),
        KeyCode::Right | KeyCode::Char('l') => state.adjust_selected(1),
        KeyCode::Enter | KeyCode::Char('a') => state.open_picker(),
        KeyCode::Char('d') => state.remove_selected(),
        KeyCode::Char(' ') => state.toggle_selected(),
        KeyCode::Char('[') => state.move_selected(-1),
        KeyCode::Char(']') => state.move_selected(1),
        KeyCode::Char('c') => state.cycle_element_kind(),
        KeyCode::Char('t') => {
            state.active_popup = Some(Popup::TemplateBrowser(TemplateBrowser::new(
                &state.session.current().name,
            )));
        }
        KeyCode::Char('r') => {
            state.session.reset_to_default();
            state.selected = 0;
            state.field = 0;
            state.refresh_rows();
            state.set_status("Reset to template defaults");
        }
        KeyCode::Char('p') => {
            state.show_preview = !state.show_preview;
            state.config.ui.show_preview = state.show_preview;
        }
        KeyCode::Char('?') => state.show_help = true,
        _ => {}
    }
    false
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS, Dark/Light are explicit)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key) {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;

    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    let template = state.session.current();
    if state.show_preview {
        let panels = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        properties::render(
            f,
            panels[0],
            template,
            &state.rows,
            state.selected,
            state.session.is_dirty(),
            theme,
        );
        preview::render(f, panels[1], template, theme);
    } else {
        properties::render(
            f,
            chunks[1],
            template,
            &state.rows,
            state.selected,
            state.session.is_dirty(),
            theme,
        );
    }

    StatusBar::render(f, chunks[2], state, theme);

    if let Some(popup) = &state.active_popup {
        match popup {
            Popup::ModifierPicker(picker) => picker.render(f, f.area(), theme),
            Popup::TemplateBrowser(browser) => browser.render(f, f.area(), theme),
        }
    }

    if state.show_help {
        HelpOverlay::render(f, f.area(), theme);
    }
}

fn render_title_bar(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let theme = &state.theme;
    let template = state.session.current();
    let dirty = if state.session.is_dirty() { " *" } else { "" };

    let title = Line::from(vec![
        Span::styled(
            APP_NAME,
            Style::default()
                .fg(theme.primary)
                .add_modifier(StyleModifier::BOLD),
        ),
        Span::styled(
            format!("  ·  {}{dirty}", template.name),
            Style::default().fg(theme.accent),
        ),
        Span::styled(
            format!("  ·  {}", template.parent.kind().display_name()),
            Style::default().fg(theme.text_secondary),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let paragraph = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_for(template: Template) -> AppState {
        AppState::new(Config::default(), Session::new(template))
    }

    #[test]
    fn test_navigation_moves_cursor() {
        let mut state = state_for(Template::pink_square());
        assert_eq!(state.selected, 0);

        handle_key_event(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.selected, 1);

        handle_key_event(&mut state, key(KeyCode::Char('k')));
        handle_key_event(&mut state, key(KeyCode::Char('k')));
        assert_eq!(state.selected, 0, "cursor stops at the first row");
    }

    #[test]
    fn test_add_via_picker_appends_entry() {
        let mut state = state_for(Template::pink_square());
        let before = state.session.current().parent_modifiers.len();

        // Open the picker on the parent modifier list header and confirm
        handle_key_event(&mut state, key(KeyCode::Char('j')));
        handle_key_event(&mut state, key(KeyCode::Char('a')));
        assert!(state.active_popup.is_some());

        handle_key_event(&mut state, key(KeyCode::Enter));
        assert!(state.active_popup.is_none());
        assert_eq!(state.session.current().parent_modifiers.len(), before + 1);
    }

    #[test]
    fn test_picker_on_scope_header_is_filtered() {
        let mut state = state_for(Template::pink_square());
        let scope_header = state
            .rows
            .iter()
            .position(|r| matches!(r, PanelRow::ListHeader(ListRef::ChildScope(0))))
            .unwrap();
        state.selected = scope_header;

        handle_key_event(&mut state, key(KeyCode::Char('a')));
        let Some(Popup::ModifierPicker(picker)) = &state.active_popup else {
            panic!("expected a modifier picker");
        };
        assert_eq!(picker.len(), 1, "Box scope offers only Align");
    }

    #[test]
    fn test_space_toggles_entry() {
        let mut state = state_for(Template::pink_square());
        let entry = state
            .rows
            .iter()
            .position(|r| matches!(r, PanelRow::Entry { .. }))
            .unwrap();
        state.selected = entry;

        handle_key_event(&mut state, key(KeyCode::Char(' ')));
        assert!(!state.session.current().parent_modifiers[0].enabled);
        assert!(state.session.is_dirty());
    }

    #[test]
    fn test_bracket_moves_entry_and_cursor() {
        let mut state = state_for(Template::pink_square());
        let first = state
            .rows
            .iter()
            .position(|r| {
                matches!(
                    r,
                    PanelRow::Entry {
                        list: ListRef::Parent,
                        index: 0
                    }
                )
            })
            .unwrap();
        state.selected = first;
        let summary = state.session.current().parent_modifiers[0].params.summary();

        handle_key_event(&mut state, key(KeyCode::Char(']')));
        assert_eq!(state.selected, first + 1);
        assert_eq!(
            state.session.current().parent_modifiers[1].params.summary(),
            summary
        );
    }

    #[test]
    fn test_cycle_element_kind_clears_scope_lists() {
        let mut state = state_for(Template::pink_square());
        assert!(!state.session.current().children[0].scope_modifiers.is_empty());

        handle_key_event(&mut state, key(KeyCode::Char('c')));
        assert_eq!(state.session.current().parent.kind(), ElementKind::Column);
        assert!(state.session.current().children[0].scope_modifiers.is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = state_for(Template::pink_square());
        let entry = state
            .rows
            .iter()
            .position(|r| matches!(r, PanelRow::Entry { .. }))
            .unwrap();
        state.selected = entry;
        handle_key_event(&mut state, key(KeyCode::Char('d')));
        assert!(state.session.is_dirty());

        handle_key_event(&mut state, key(KeyCode::Char('r')));
        assert!(!state.session.is_dirty());
        assert_eq!(
            state.session.current().parent_modifiers.len(),
            Template::pink_square().parent_modifiers.len()
        );
    }

    #[test]
    fn test_adjust_field_edits_in_place() {
        let mut state = state_for(Template::pink_square());
        let entry = state
            .rows
            .iter()
            .position(|r| {
                matches!(
                    r,
                    PanelRow::Entry {
                        list: ListRef::Parent,
                        index: 0
                    }
                )
            })
            .unwrap();
        state.selected = entry;

        // Pink square starts with Size(120, 120); nudge the width field
        handle_key_event(&mut state, key(KeyCode::Char('l')));
        assert_eq!(
            state.session.current().parent_modifiers[0].params,
            ModifierParams::Size {
                width: 121,
                height: 120
            }
        );
    }

    #[test]
    fn test_quit_key() {
        let mut state = state_for(Template::pink_square());
        assert!(handle_key_event(&mut state, key(KeyCode::Char('q'))));
        assert!(state.should_quit);
    }

    #[test]
    fn test_template_browser_switches_session() {
        let mut state = state_for(Template::pink_square());
        handle_key_event(&mut state, key(KeyCode::Char('t')));
        handle_key_event(&mut state, key(KeyCode::Char('j')));
        handle_key_event(&mut state, key(KeyCode::Enter));

        assert_eq!(state.session.current().name, "Rainbow");
        assert!(!state.session.is_dirty());
        assert_eq!(state.selected, 0);
    }
}

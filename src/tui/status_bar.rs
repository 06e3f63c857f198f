//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the current message and contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut content_lines: Vec<Line> = Vec::new();

        // First line: error, status message, or the focused field
        if let Some(error) = &state.error_message {
            content_lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::styled(error.clone(), Style::default().fg(theme.text)),
            ]));
        } else if !state.status_message.is_empty() {
            content_lines.push(Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.success),
            )));
        } else if let Some(label) = state.field_label() {
            content_lines.push(Line::from(vec![
                Span::styled("Field: ", Style::default().fg(theme.primary)),
                Span::styled(label, Style::default().fg(theme.accent)),
                Span::styled(
                    "   Tab next field · h/l adjust",
                    Style::default().fg(theme.text_muted),
                ),
            ]));
        } else {
            content_lines.push(Line::from(Span::styled(
                "j/k navigate · Enter/a add here · d delete",
                Style::default().fg(theme.text_muted),
            )));
        }

        content_lines.push(Self::help_line(state, theme));

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.primary));
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(Paragraph::new(content_lines), inner);
    }

    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let help = if state.active_popup.is_some() {
            " ↑/↓ select · Enter confirm · Esc cancel"
        } else {
            " a add · d del · Space toggle · [/] move · c element · t templates · r reset · p preview · ? help · q quit"
        };
        Line::from(Span::styled(help, Style::default().fg(theme.text_muted)))
    }
}

//! Help overlay listing every keyboard shortcut, shown on '?'.

use ratatui::{
    layout::Rect,
    style::{Modifier as StyleModifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::component::centered_rect;
use super::Theme;

/// Static keybinding help popup.
pub struct HelpOverlay;

impl HelpOverlay {
    fn shortcut(key: &'static str, action: &'static str, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(theme.accent)),
            Span::styled(action, Style::default().fg(theme.text)),
        ])
    }

    fn heading(text: &'static str, theme: &Theme) -> Line<'static> {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(theme.primary)
                .add_modifier(StyleModifier::BOLD),
        ))
    }

    /// Render the overlay centered in `area`.
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(54, 80, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let lines = vec![
            Self::heading(" Navigation", theme),
            Self::shortcut("j / ↓", "next row", theme),
            Self::shortcut("k / ↑", "previous row", theme),
            Self::shortcut("Tab", "next field of the selected row", theme),
            Line::default(),
            Self::heading(" Editing", theme),
            Self::shortcut("h / l", "adjust the focused field", theme),
            Self::shortcut("a / Enter", "add a modifier to the selected list", theme),
            Self::shortcut("d", "delete the selected modifier", theme),
            Self::shortcut("Space", "toggle the selected modifier", theme),
            Self::shortcut("[ / ]", "move the selected modifier up / down", theme),
            Self::shortcut("c", "switch the parent element kind", theme),
            Line::default(),
            Self::heading(" Templates", theme),
            Self::shortcut("t", "open the template browser", theme),
            Self::shortcut("r", "reset to the template defaults", theme),
            Line::default(),
            Self::heading(" View", theme),
            Self::shortcut("p", "toggle the preview panel", theme),
            Self::shortcut("?", "toggle this help", theme),
            Self::shortcut("q", "quit", theme),
        ];

        f.render_widget(Paragraph::new(lines), inner);
    }
}

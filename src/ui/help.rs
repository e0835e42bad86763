use ratatui::text::Line;

use super::style::Theme;

pub fn help_picker(theme: &Theme) -> Line<'static> {
    Line::from(vec![
        theme.span_key("↑↓/jk"), theme.span_text(": navigate"), theme.span_sep(),
        theme.span_key("Space"), theme.span_text(": toggle"), theme.span_sep(),
        theme.span_key("Enter"), theme.span_text(": confirm"), theme.span_sep(),
        theme.span_key("Ctrl+C/q"), theme.span_text(": quit"),
    ])
}

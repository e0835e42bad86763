// style.rs
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

const ACCENT: Color = Color::Rgb(0x7D, 0x56, 0xF4);
const CATEGORY: Color = Color::Rgb(0xFF, 0xA5, 0x00);
const LABEL: Color = Color::Rgb(0x00, 0xFF, 0x00);
const DESCRIPTION: Color = Color::Rgb(0x88, 0x88, 0x88);
const HELP: Color = Color::Rgb(0x66, 0x66, 0x66);

/// Every style the picker paints with. Handed to the renderer by value so
/// nothing reads colors from global state.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub title: Style,
    pub cursor: Style,
    pub check: Style,
    pub category_header: Style,
    pub label: Style,
    pub description: Style,
    pub help: Style,
    pub help_key: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            cursor: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            check: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            category_header: Style::default().fg(CATEGORY).add_modifier(Modifier::BOLD),
            label: Style::default().fg(LABEL),
            description: Style::default().fg(DESCRIPTION).add_modifier(Modifier::ITALIC),
            help: Style::default().fg(HELP),
            help_key: Style::default().fg(HELP).add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Plain text, for terminals where color is unwanted (`NO_COLOR`).
    pub fn monochrome() -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Self {
            title: bold,
            cursor: bold,
            check: bold,
            category_header: bold,
            label: Style::default(),
            description: Style::default(),
            help: Style::default(),
            help_key: bold,
        }
    }

    pub fn span_key(&self, s: &'static str) -> Span<'static> {
        Span::styled(s, self.help_key)
    }

    pub fn span_sep(&self) -> Span<'static> {
        Span::styled(" • ", self.help)
    }

    pub fn span_text(&self, s: &'static str) -> Span<'static> {
        Span::styled(s, self.help)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_uses_accent_for_cursor_and_check() {
        let theme = Theme::default();
        assert_eq!(theme.cursor.fg, Some(ACCENT));
        assert_eq!(theme.check.fg, Some(ACCENT));
        assert!(theme.description.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn monochrome_sets_no_colors() {
        let theme = Theme::monochrome();
        for style in [theme.title, theme.label, theme.description, theme.help] {
            assert_eq!(style.fg, None);
        }
    }
}

use std::ops::Range;

use ratatui::{
    prelude::Frame,
    text::{Line, Span, Text},
    widgets::Paragraph,
};
use textwrap::core::display_width;

use crate::defaults::Defaults;
use crate::session::Session;
use crate::types::Item;
use crate::ui::{help::help_picker, style::Theme};
use crate::viewport::estimated_rows;
use crate::wrap::wrap_text;

pub fn draw(f: &mut Frame<'_>, session: &Session, theme: &Theme) {
    let area = f.size();
    f.render_widget(Paragraph::new(render(session, theme)), area);
}

/// Build the whole screen for `session`. Pure: no terminal access.
pub fn render(session: &Session, theme: &Theme) -> Text<'static> {
    let items = session.items();
    let mut lines = vec![
        Line::from(Span::styled(session.title.clone(), theme.title)),
        Line::default(),
    ];

    let budget = row_budget(session.height());
    let width = content_width(session.width());
    let mut shown: Option<(usize, usize)> = None;

    if !items.is_empty() {
        let range = render_range(session, budget, width);
        let cursor = session.cursor();
        let mut used = 0usize;
        let mut last_category: Option<&str> = None;

        for i in range {
            let item = &items[i];
            let is_cursor = i == cursor;
            let header = header_rows(last_category, item);
            if i > cursor && used.saturating_add(header + 1) > budget {
                break;
            }

            if header > 0 {
                if last_category.is_some() {
                    lines.push(Line::default());
                }
                lines.push(Line::from(Span::styled(
                    format!("━━━ {} ━━━", item.category_name),
                    theme.category_header,
                )));
                last_category = Some(item.category_name.as_str());
                used += header;
            }

            let mut spans = item_prefix(item, is_cursor, session.is_selected(i), theme);
            let description = description_lines(item, width);
            let mut rest = description.iter();
            if let Some(first) = rest.next() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(first.clone(), theme.description));
            }
            lines.push(Line::from(spans));
            used += 1;

            let indent = " ".repeat(Defaults::PREFIX_WIDTH);
            for extra in rest {
                if !is_cursor && used >= budget {
                    break;
                }
                lines.push(Line::from(vec![
                    Span::raw(indent.clone()),
                    Span::styled(extra.clone(), theme.description),
                ]));
                used += 1;
            }

            shown = Some(match shown {
                Some((first, _)) => (first, i),
                None => (i, i),
            });
        }
    }

    lines.push(Line::default());
    if session.height() > 0 && items.len() > budget {
        let (first, last) = shown.unwrap_or((0, 0));
        lines.push(Line::from(Span::styled(
            format!("Showing {}-{} of {}", first + 1, last + 1, items.len()),
            theme.help,
        )));
    }
    lines.push(help_picker(theme));
    let selected = session.selected().len();
    if selected > 0 {
        lines.push(Line::from(Span::styled(
            format!("Selected: {selected} example(s)"),
            theme.help,
        )));
    }
    Text::from(lines)
}

/// Screen rows available for item lines once title and footer are laid out.
/// Unknown height shows everything.
fn row_budget(height: u16) -> usize {
    if height == 0 {
        return usize::MAX;
    }
    let chrome = Defaults::RESERVED_ROWS + Defaults::FOOTER_GAP_ROWS;
    usize::from(height.saturating_sub(chrome)).max(1)
}

fn content_width(width: u16) -> usize {
    if width == 0 {
        return Defaults::FALLBACK_WIDTH;
    }
    usize::from(width)
        .saturating_sub(Defaults::PREFIX_WIDTH)
        .max(Defaults::MIN_CONTENT_WIDTH)
}

fn header_rows(last_category: Option<&str>, item: &Item) -> usize {
    match last_category {
        None => 1,
        Some(c) if c != item.category_name => 2,
        Some(_) => 0,
    }
}

fn item_prefix(item: &Item, is_cursor: bool, selected: bool, theme: &Theme) -> Vec<Span<'static>> {
    let cursor = if is_cursor {
        Span::styled(">", theme.cursor)
    } else {
        Span::raw(" ")
    };
    let mut spans = vec![cursor];
    if selected {
        spans.push(Span::raw(" ["));
        spans.push(Span::styled("✓", theme.check));
        spans.push(Span::raw("]"));
    } else {
        spans.push(Span::raw(" [ ]"));
    }
    spans.push(Span::raw(format!(" {:>2}. ", item.ordinal)));
    spans.push(Span::styled(item.short_name.clone(), theme.label));
    spans
}

/// Wrapped description for `item`, or nothing when it is empty or the label
/// leaves too little room beside it.
fn description_lines(item: &Item, width: usize) -> Vec<String> {
    let description = item.description().trim();
    if description.is_empty() {
        return Vec::new();
    }
    let remaining =
        width.saturating_sub(Defaults::PREFIX_WIDTH + display_width(&item.short_name));
    if remaining <= Defaults::MIN_DESCRIPTION_WIDTH {
        return Vec::new();
    }
    wrap_text(&format!("- {description}"), remaining)
}

/// Rows needed to draw `range` in full, category headers included.
fn rows_needed(items: &[Item], range: Range<usize>, width: usize) -> usize {
    let mut last_category: Option<&str> = None;
    let mut rows = 0;
    for item in &items[range] {
        rows += header_rows(last_category, item);
        last_category = Some(item.category_name.as_str());
        rows += description_lines(item, width).len().max(1);
    }
    rows
}

/// Items to draw: seeded from the viewport offset, widened to reach the cursor,
/// then re-anchored so everything from the start through the cursor fits.
fn render_range(session: &Session, budget: usize, width: usize) -> Range<usize> {
    let items = session.items();
    let len = items.len();
    if session.height() == 0 {
        return 0..len;
    }
    let cursor = session.cursor().min(len - 1);
    let rows = estimated_rows(session.height(), Defaults::RENDER_MIN_ROWS);

    let mut start = session.viewport_offset().min(len - 1);
    let mut end = (start + rows).min(len);
    if cursor < start {
        start = cursor;
        end = (start + rows).min(len);
    } else if cursor >= end {
        end = cursor + 1;
    }

    while start < cursor && rows_needed(items, start..cursor + 1, width) > budget {
        start += 1;
    }
    start..end
}

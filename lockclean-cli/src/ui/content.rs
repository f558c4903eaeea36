use std::ops::Range;

use lockclean_core::truncate_start;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Padding, Widget},
};

use crate::app::{Display, DisplayLine, Selection};

use super::theme::Theme;

const PLACEHOLDER: &str = "Enter folder path (e.g. /kang/project/)";
const PROMPT: &str = "> ";

/// Main content block showing the controller's display lines
pub struct ContentView<'a> {
    display: &'a Display,
    scroll_back: usize,
    theme: &'a Theme,
}

impl<'a> ContentView<'a> {
    pub fn new(display: &'a Display, scroll_back: usize, theme: &'a Theme) -> Self {
        Self {
            display,
            scroll_back,
            theme,
        }
    }

    fn render_input(&self, value: &str, cursor: usize, area: Rect, buf: &mut Buffer) {
        let prompt_style = Style::default().fg(self.theme.blue);
        buf.set_string(area.x, area.y, PROMPT, prompt_style);

        let x = area.x + PROMPT.len() as u16;
        let width = area.width.saturating_sub(PROMPT.len() as u16 + 1) as usize;

        if value.is_empty() {
            buf.set_string(x, area.y, " ", self.theme.cursor());
            let placeholder = truncate_start(PLACEHOLDER, width.saturating_sub(1));
            buf.set_string(
                x + 1,
                area.y,
                &placeholder,
                Style::default().fg(self.theme.fg_muted),
            );
            return;
        }

        // Keep the cursor visible by dropping characters from the left
        let before: Vec<char> = value[..cursor].chars().collect();
        let after: Vec<char> = value[cursor..].chars().collect();
        let skip = (before.len() + 1).saturating_sub(width);

        let text_style = Style::default().fg(self.theme.fg);
        let mut col = x;
        let end = x + width as u16;
        for c in before.iter().skip(skip) {
            buf.set_string(col, area.y, c.to_string(), text_style);
            col += 1;
        }

        let under_cursor = after.first().copied().unwrap_or(' ');
        buf.set_string(col, area.y, under_cursor.to_string(), self.theme.cursor());
        col += 1;

        for c in after.iter().skip(1) {
            if col >= end {
                break;
            }
            buf.set_string(col, area.y, c.to_string(), text_style);
            col += 1;
        }
    }

    fn render_choice(&self, selection: Selection, area: Rect, buf: &mut Buffer) {
        let yes = self.theme.button(selection == Selection::Proceed);
        let no = self.theme.button(selection == Selection::Cancel);
        buf.set_string(area.x, area.y, "  Yes  ", yes);
        buf.set_string(area.x + 10, area.y, "  No  ", no);
    }
}

impl Widget for ContentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let lines = self.display.lines();
        let range = visible_range(lines.len(), inner.height as usize, self.scroll_back);
        let start = range.start;

        for (row, line) in lines[range].iter().enumerate() {
            let y = inner.y + row as u16;
            let line_area = Rect::new(inner.x, y, inner.width, 1);

            match line {
                DisplayLine::Text { tone, text } => {
                    let shown = truncate_start(text, inner.width as usize);
                    buf.set_string(inner.x, y, &shown, self.theme.tone(*tone));
                }
                DisplayLine::Input { value, cursor } => {
                    self.render_input(value, *cursor, line_area, buf);
                }
                DisplayLine::Choice(selection) => self.render_choice(*selection, line_area, buf),
                DisplayLine::Blank => {}
            }
        }

        // Scroll hint
        if start > 0 {
            let hint = format!(" ↑ {} more ", start);
            let x = area.x + area.width.saturating_sub(hint.chars().count() as u16 + 2);
            buf.set_string(x, area.y, &hint, Style::default().fg(self.theme.fg_muted));
        }
    }
}

/// Lines shown for `total` lines in `height` rows, anchored to the bottom and
/// moved up by `scroll_back` (clamped to the top)
pub fn visible_range(total: usize, height: usize, scroll_back: usize) -> Range<usize> {
    if total <= height {
        return 0..total;
    }
    let max_back = total - height;
    let start = max_back - scroll_back.min(max_back);
    start..start + height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Tone;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(visible_range(3, 10, 0), 0..3);
        assert_eq!(visible_range(3, 10, 5), 0..3);
        assert_eq!(visible_range(20, 5, 0), 15..20);
        assert_eq!(visible_range(20, 5, 4), 11..16);
        assert_eq!(visible_range(20, 5, 100), 0..5);
    }

    #[test]
    fn test_renders_bottom_of_long_display() {
        let mut display = Display::default();
        for i in 0..10 {
            display.text(Tone::File, format!("/f{}.cdslck", i));
        }
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        ContentView::new(&display, 0, &theme).render(area, &mut buf);

        assert!(row(&buf, 1).contains("/f7.cdslck"));
        assert!(row(&buf, 3).contains("/f9.cdslck"));
        assert!(row(&buf, 0).contains("↑ 7 more"));
    }

    #[test]
    fn test_empty_input_shows_placeholder() {
        let mut display = Display::default();
        display.input("", 0);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);

        ContentView::new(&display, 0, &theme).render(area, &mut buf);

        assert!(row(&buf, 1).contains("> "));
        assert!(row(&buf, 1).contains("Enter folder path"));
    }

    #[test]
    fn test_long_text_keeps_tail() {
        let mut display = Display::default();
        display.text(Tone::Plain, "Deleted: /very/long/path/to/some/file.cdslck");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 24, 3);
        let mut buf = Buffer::empty(area);

        ContentView::new(&display, 0, &theme).render(area, &mut buf);

        assert!(row(&buf, 1).contains(".../some/file.cdslck"));
    }
}

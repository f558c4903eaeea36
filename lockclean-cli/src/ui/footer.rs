use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::{AppState, Phase};

use super::theme::Theme;

/// Footer widget showing keyboard hints and deletion tallies
pub struct Footer<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

/// Key hints for a phase
fn hints(phase: Phase) -> &'static [(&'static str, &'static str)] {
    match phase {
        Phase::Input | Phase::Error => &[("Enter", "Search"), ("Esc", "Quit")],
        Phase::Searching => &[("q", "Quit")],
        Phase::Confirm => &[
            ("←→", "Select"),
            ("Enter", "Confirm"),
            ("↑↓", "Scroll"),
            ("q", "Quit"),
        ],
        Phase::Deleting | Phase::Summary | Phase::Quit => &[("↑↓", "Scroll"), ("q", "Quit")],
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let key_style = Style::default()
            .fg(self.theme.fg)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(self.theme.fg_dim);
        let sep_style = Style::default().fg(self.theme.border);

        let hints = hints(self.state.phase);
        let mut x = area.x + 1;
        for (i, (key, desc)) in hints.iter().enumerate() {
            // Key
            buf.set_string(x, area.y, *key, key_style);
            x += key.chars().count() as u16 + 1;

            // Description
            buf.set_string(x, area.y, *desc, desc_style);
            x += desc.len() as u16;

            // Separator
            if i < hints.len() - 1 {
                buf.set_string(x, area.y, "  │  ", sep_style);
                x += 5;
            }

            if x >= area.x + area.width - 5 {
                break;
            }
        }

        // Running tallies on the right once deletion has started
        if matches!(self.state.phase, Phase::Deleting | Phase::Summary) {
            let tally = self.state.tally();
            let deleted = format!("Deleted: {}", tally.deleted);
            let failed = format!("Failed: {}", tally.failed.len());
            let width = (deleted.len() + failed.len() + 3) as u16;
            let stats_x = area.x + area.width.saturating_sub(width + 1);
            if stats_x > x + 2 {
                let deleted_style = Style::default()
                    .fg(self.theme.green)
                    .add_modifier(Modifier::BOLD);
                let failed_style = if tally.failed.is_empty() {
                    desc_style
                } else {
                    Style::default()
                        .fg(self.theme.red)
                        .add_modifier(Modifier::BOLD)
                };
                buf.set_string(stats_x, area.y, &deleted, deleted_style);
                buf.set_string(
                    stats_x + deleted.len() as u16 + 3,
                    area.y,
                    &failed,
                    failed_style,
                );
            }
        }
    }
}

use lockclean_core::truncate_start;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::{AppState, Phase};

use super::progress::{SPINNER, progress_indicator};
use super::theme::Theme;

const TITLE: &str = "LOCKCLEAN";

/// Header widget showing title, root folder, and status
pub struct Header<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn status(&self) -> (String, Style) {
        let busy = Style::default().fg(self.theme.yellow);
        let idle = Style::default().fg(self.theme.fg_dim);

        match self.state.phase {
            Phase::Input => (format!("{} files", self.state.extension()), idle),
            Phase::Error => (
                "invalid folder".to_string(),
                Style::default().fg(self.theme.red),
            ),
            Phase::Searching => (
                progress_indicator(self.state.progress(), self.state.spinner_frame),
                busy,
            ),
            Phase::Confirm => {
                let count = self.state.matches().map(|m| m.len()).unwrap_or(0);
                (format!("{} found", count), idle)
            }
            Phase::Deleting => {
                let total = self.state.matches().map(|m| m.len()).unwrap_or(0);
                let spinner = SPINNER[self.state.spinner_frame % SPINNER.len()];
                (
                    format!(
                        "{} deleting {}/{}",
                        spinner,
                        self.state.tally().processed(),
                        total
                    ),
                    busy,
                )
            }
            Phase::Summary => ("done".to_string(), Style::default().fg(self.theme.green)),
            Phase::Quit => (String::new(), idle),
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        // Title
        let title_style = Style::default()
            .fg(self.theme.blue)
            .add_modifier(Modifier::BOLD);
        buf.set_string(area.x + 1, area.y, TITLE, title_style);

        // Separator
        let sep_x = area.x + TITLE.len() as u16 + 2;
        buf.set_string(sep_x, area.y, "─", Style::default().fg(self.theme.border));

        // Status (right-aligned)
        let (status, status_style) = self.status();
        let status_len = status.chars().count() as u16;
        let status_x = area.x + area.width.saturating_sub(status_len + 2);
        buf.set_string(status_x, area.y, &status, status_style);

        // Root folder, squeezed between separator and status
        if let Some(root) = self.state.root() {
            let path_x = sep_x + 2;
            let max_len = status_x.saturating_sub(path_x + 2) as usize;
            let path = truncate_start(&root.to_string_lossy(), max_len);
            buf.set_string(path_x, area.y, &path, Style::default().fg(self.theme.fg));
        }
    }
}

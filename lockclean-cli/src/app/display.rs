use super::state::Selection;

/// Semantic color of a display line; the renderer maps it through the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Subtle,
    Highlight,
    File,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayLine {
    Text { tone: Tone, text: String },
    /// Folder prompt; `cursor` is a byte offset into `value`
    Input { value: String, cursor: usize },
    /// Yes/No buttons
    Choice(Selection),
    Blank,
}

/// Full content of the current phase, top to bottom
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Display {
    lines: Vec<DisplayLine>,
}

impl Display {
    pub fn text(&mut self, tone: Tone, text: impl Into<String>) {
        self.lines.push(DisplayLine::Text {
            tone,
            text: text.into(),
        });
    }

    pub fn blank(&mut self) {
        self.lines.push(DisplayLine::Blank);
    }

    pub fn input(&mut self, value: &str, cursor: usize) {
        self.lines.push(DisplayLine::Input {
            value: value.to_string(),
            cursor,
        });
    }

    pub fn choice(&mut self, selection: Selection) {
        self.lines.push(DisplayLine::Choice(selection));
    }

    pub fn lines(&self) -> &[DisplayLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Unstyled text, one display line per output line
    pub fn plain(&self) -> String {
        self.lines
            .iter()
            .map(|line| match line {
                DisplayLine::Text { text, .. } => text.clone(),
                DisplayLine::Input { value, .. } => format!("> {}", value),
                DisplayLine::Choice(Selection::Proceed) => "[Yes]   No ".to_string(),
                DisplayLine::Choice(Selection::Cancel) => " Yes   [No]".to_string(),
                DisplayLine::Blank => String::new(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rendering() {
        let mut display = Display::default();
        display.text(Tone::Highlight, "Do you want to proceed with deletion?");
        display.blank();
        display.choice(Selection::Cancel);
        display.input("/proj", 5);

        assert_eq!(display.len(), 4);
        assert_eq!(
            display.plain(),
            "Do you want to proceed with deletion?\n\n Yes   [No]\n> /proj"
        );
    }
}

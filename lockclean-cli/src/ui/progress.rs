use lockclean_core::{ScanProgress, format_count};

/// Braille spinner characters
pub const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Compact progress indicator for header
pub fn progress_indicator(progress: &ScanProgress, spinner_frame: usize) -> String {
    let spinner = SPINNER[spinner_frame % SPINNER.len()];
    format!(
        "{} {} dirs, {} found",
        spinner,
        format_count(progress.dirs_scanned),
        format_count(progress.matches_found)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_indicator() {
        let progress = ScanProgress {
            dirs_scanned: 1234,
            matches_found: 3,
            ..Default::default()
        };
        assert_eq!(progress_indicator(&progress, 0), "⠋ 1,234 dirs, 3 found");
        assert_eq!(progress_indicator(&progress, 11), "⠙ 1,234 dirs, 3 found");
    }
}

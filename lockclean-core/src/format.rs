use std::path::Path;

/// Format a number with thousand separators (e.g., 1,234,567)
pub fn format_count(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }

    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Display `path` relative to `root`, always with a leading separator.
///
/// Paths outside `root` are shown in full.
pub fn relative_display(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => format!("{}{}", std::path::MAIN_SEPARATOR, rel.display()),
        Err(_) => path.display().to_string(),
    }
}

/// Keep the tail of `text` so it fits in `max_chars`, prefixing "..." when cut
pub fn truncate_start(text: &str, max_chars: usize) -> String {
    let len = text.chars().count();
    if len <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let keep = max_chars - 3;
    let tail: String = text.chars().skip(len - keep).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12345), "12,345");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[cfg(unix)]
    #[test]
    fn test_relative_display() {
        let root = Path::new("/proj/lib");
        assert_eq!(
            relative_display(Path::new("/proj/lib/cell/layout/master.tag.cdslck"), root),
            "/cell/layout/master.tag.cdslck"
        );
        assert_eq!(
            relative_display(Path::new("/elsewhere/x.cdslck"), root),
            "/elsewhere/x.cdslck"
        );
    }

    #[test]
    fn test_truncate_start() {
        assert_eq!(truncate_start("short", 10), "short");
        assert_eq!(truncate_start("/a/very/long/path.cdslck", 12), "...th.cdslck");
        assert_eq!(truncate_start("ååååå", 4), "...å");
        assert_eq!(truncate_start("abcdef", 2), "..");
    }
}

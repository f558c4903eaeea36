use std::path::{Path, PathBuf};

use crate::error::{LockcleanError, Result};

/// Validate a user-supplied scan root.
///
/// Surrounding whitespace is trimmed. The returned path is canonical, so every
/// match found beneath it is absolute.
pub fn validate_root(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LockcleanError::EmptyPath);
    }

    let path = Path::new(trimmed);
    let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LockcleanError::PathNotFound(path.to_path_buf()),
        _ => LockcleanError::Io(e),
    })?;
    if !metadata.is_dir() {
        return Err(LockcleanError::NotADirectory(path.to_path_buf()));
    }

    Ok(path.canonicalize().unwrap_or_else(|_| path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_and_blank_input() {
        assert!(matches!(validate_root(""), Err(LockcleanError::EmptyPath)));
        assert!(matches!(validate_root("   \t"), Err(LockcleanError::EmptyPath)));
    }

    #[test]
    fn test_missing_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let err = validate_root(missing.to_str().unwrap()).unwrap_err();
        match err {
            LockcleanError::PathNotFound(p) => assert_eq!(p, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.cdslck");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            validate_root(file.to_str().unwrap()),
            Err(LockcleanError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_valid_directory_is_trimmed_and_canonical() {
        let temp = TempDir::new().unwrap();
        let input = format!("  {}  ", temp.path().display());
        let root = validate_root(&input).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
        assert!(root.is_absolute());
    }
}

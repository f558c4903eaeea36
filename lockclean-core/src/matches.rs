use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The fixed, ordered result of a completed scan.
///
/// Discovery order depends on worker scheduling, but once built the sequence
/// never changes. Cloning is cheap; clones share the same backing slice.
#[derive(Debug, Clone)]
pub struct MatchSet {
    root: PathBuf,
    paths: Arc<[PathBuf]>,
}

impl MatchSet {
    pub fn new(root: PathBuf, paths: Vec<PathBuf>) -> Self {
        Self {
            root,
            paths: paths.into(),
        }
    }

    /// An empty set for `root`
    pub fn empty(root: PathBuf) -> Self {
        Self::new(root, Vec::new())
    }

    /// Directory the scan started from
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    /// Index of the final entry (None when empty)
    pub fn last_index(&self) -> Option<usize> {
        self.paths.len().checked_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_has_no_last_index() {
        let set = MatchSet::empty(PathBuf::from("/tmp"));
        assert!(set.is_empty());
        assert_eq!(set.last_index(), None);
        assert_eq!(set.get(0), None);
    }

    #[test]
    fn test_clones_share_order() {
        let set = MatchSet::new(
            PathBuf::from("/data"),
            vec![PathBuf::from("/data/b.cdslck"), PathBuf::from("/data/a.cdslck")],
        );
        let clone = set.clone();
        assert_eq!(clone.last_index(), Some(1));
        assert_eq!(clone.get(0), Some(Path::new("/data/b.cdslck")));
        assert_eq!(set.as_slice(), clone.as_slice());
        assert_eq!(clone.root(), Path::new("/data"));
    }
}

//! Sequential deletion of a scan's matches.
//!
//! Files are removed strictly one at a time in `MatchSet` order. Each attempt
//! is independent: a failure on one index never prevents the next attempt.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::matches::MatchSet;

/// Result of one attempted deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionOutcome {
    /// Position of the file in the match set
    pub index: usize,
    pub path: PathBuf,
    pub success: bool,
}

/// Remove the file at `index`.
///
/// Returns `None` when `index` is past the end of the set. Only a single
/// `remove_file` is issued; directories are never removed.
pub fn delete_at(matches: &MatchSet, index: usize) -> Option<DeletionOutcome> {
    let path = matches.get(index)?.to_path_buf();

    let success = match std::fs::remove_file(&path) {
        Ok(()) => {
            debug!(index, path = %path.display(), "deleted");
            true
        }
        Err(e) => {
            warn!(index, path = %path.display(), error = %e, "failed to delete");
            false
        }
    };

    Some(DeletionOutcome {
        index,
        path,
        success,
    })
}

/// Running counts over a deletion sequence
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeletionTally {
    pub deleted: usize,
    /// Failed paths, in the order they were attempted
    pub failed: Vec<PathBuf>,
}

impl DeletionTally {
    pub fn record(&mut self, outcome: &DeletionOutcome) {
        if outcome.success {
            self.deleted += 1;
        } else {
            self.failed.push(outcome.path.clone());
        }
    }

    /// Number of outcomes recorded so far
    pub fn processed(&self) -> usize {
        self.deleted + self.failed.len()
    }

    pub fn is_complete(&self, total: usize) -> bool {
        self.processed() == total
    }
}

/// Iterator that deletes from a starting index to the end of the set
pub struct Sequencer<'a> {
    matches: &'a MatchSet,
    next: usize,
}

impl<'a> Sequencer<'a> {
    pub fn new(matches: &'a MatchSet) -> Self {
        Self::starting_at(matches, 0)
    }

    pub fn starting_at(matches: &'a MatchSet, index: usize) -> Self {
        Self {
            matches,
            next: index,
        }
    }
}

impl Iterator for Sequencer<'_> {
    type Item = DeletionOutcome;

    fn next(&mut self) -> Option<Self::Item> {
        let outcome = delete_at(self.matches, self.next)?;
        self.next += 1;
        Some(outcome)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.matches.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture(temp: &TempDir, names: &[&str]) -> MatchSet {
        let paths = names
            .iter()
            .map(|name| {
                let path = temp.path().join(name);
                fs::write(&path, "lock").unwrap();
                path
            })
            .collect();
        MatchSet::new(temp.path().to_path_buf(), paths)
    }

    #[test]
    fn test_delete_at_removes_only_that_file() {
        let temp = TempDir::new().unwrap();
        let matches = fixture(&temp, &["a.cdslck", "b.cdslck"]);

        let outcome = delete_at(&matches, 1).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.index, 1);
        assert!(matches.get(0).unwrap().exists());
        assert!(!matches.get(1).unwrap().exists());
    }

    #[test]
    fn test_delete_at_out_of_range() {
        let temp = TempDir::new().unwrap();
        let matches = fixture(&temp, &["a.cdslck"]);
        assert_eq!(delete_at(&matches, 1), None);
    }

    #[test]
    fn test_failure_does_not_stop_sequence() {
        let temp = TempDir::new().unwrap();
        let matches = fixture(&temp, &["a.cdslck", "b.cdslck", "c.cdslck"]);
        fs::remove_file(matches.get(1).unwrap()).unwrap();

        let outcomes: Vec<_> = Sequencer::new(&matches).collect();
        let indices: Vec<usize> = outcomes.iter().map(|o| o.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);

        let mut tally = DeletionTally::default();
        for outcome in &outcomes {
            tally.record(outcome);
        }
        assert_eq!(tally.deleted, 2);
        assert_eq!(tally.failed, vec![matches.get(1).unwrap().to_path_buf()]);
        assert!(tally.is_complete(matches.len()));
    }

    #[test]
    fn test_directory_is_never_removed() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("dir.cdslck");
        fs::create_dir(&dir).unwrap();
        let matches = MatchSet::new(temp.path().to_path_buf(), vec![dir.clone()]);

        let outcome = delete_at(&matches, 0).unwrap();
        assert!(!outcome.success);
        assert!(dir.is_dir());
    }

    #[test]
    fn test_sequencer_starting_index() {
        let temp = TempDir::new().unwrap();
        let matches = fixture(&temp, &["a.cdslck", "b.cdslck", "c.cdslck"]);

        let sequencer = Sequencer::starting_at(&matches, 1);
        assert_eq!(sequencer.size_hint(), (2, Some(2)));
        let outcomes: Vec<_> = sequencer.collect();
        assert_eq!(outcomes.len(), 2);
        assert!(matches.get(0).unwrap().exists());
    }
}

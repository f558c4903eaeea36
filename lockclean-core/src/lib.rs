pub mod delete;
pub mod error;
pub mod format;
pub mod matches;
pub mod scanner;
pub mod validate;

pub use delete::{DeletionOutcome, DeletionTally, Sequencer, delete_at};
pub use error::{LockcleanError, Result};
pub use format::{format_count, relative_display, truncate_start};
pub use matches::MatchSet;
pub use scanner::{
    CancellationToken, DEFAULT_BUDGET, DEFAULT_EXTENSION, ScanConfig, ScanMessage, ScanProgress,
    Scanner,
};
pub use validate::validate_root;

use std::path::PathBuf;

use lockclean_core::{DeletionOutcome, MatchSet, ScanProgress};

use super::action::Action;

/// Everything the controller reacts to
#[derive(Debug, Clone)]
pub enum Msg {
    /// Key press, already mapped for the current phase
    Action(Action),
    /// Heartbeat from a running scan
    ScanProgress(ScanProgress),
    /// Scan finished with its full match set
    ScanComplete(MatchSet),
    /// One file deletion attempted
    DeleteOutcome(DeletionOutcome),
    /// Terminal resized
    Resize(u16, u16),
    /// Animation tick
    Tick,
}

/// Asynchronous work requested by the controller.
///
/// Its completion comes back as a [`Msg`].
#[derive(Debug, Clone)]
pub enum Effect {
    Scan { root: PathBuf },
    Delete { matches: MatchSet, index: usize },
}

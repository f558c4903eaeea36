use std::path::PathBuf;

/// Progress update during scanning
#[derive(Debug, Clone)]
pub enum ScanMessage {
    /// Progress heartbeat
    Progress(ScanProgress),
    /// Every unit finished; the match set is ready on the join handle
    Completed,
    /// Scan was cancelled before it finished
    Cancelled,
}

/// Scanning progress statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanProgress {
    /// Directories whose entries were read
    pub dirs_scanned: u64,
    /// Matching files found so far
    pub matches_found: u64,
    /// Entries skipped because they could not be read
    pub errors: u64,
    /// Most recent directory read
    pub current_path: Option<PathBuf>,
}

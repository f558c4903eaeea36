use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};

use super::progress::{ScanMessage, ScanProgress};
use crate::matches::MatchSet;

/// Lock marker extension searched for by default
pub const DEFAULT_EXTENSION: &str = ".cdslck";

/// Default number of concurrently active directory units
pub const DEFAULT_BUDGET: usize = 10;

/// Scanner configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// File name suffix that marks a match (case-sensitive)
    pub extension: String,
    /// Maximum number of directories processed at once
    pub budget: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            budget: DEFAULT_BUDGET,
        }
    }
}

impl ScanConfig {
    /// Set the match extension, adding a leading '.' when missing
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{}", extension)
        };
        self
    }

    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget.max(1);
        self
    }

    /// Exact suffix match on the final path segment
    pub fn matches(&self, file_name: &OsStr) -> bool {
        file_name
            .as_encoded_bytes()
            .ends_with(self.extension.as_bytes())
    }
}

/// Cancellation token for stopping scans
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters shared by all units of one scan
#[derive(Default)]
pub(crate) struct ScanCounters {
    dirs_scanned: AtomicU64,
    matches_found: AtomicU64,
    errors: AtomicU64,
    active: AtomicUsize,
    peak_active: AtomicUsize,
    current_path: Mutex<Option<PathBuf>>,
    done: AtomicBool,
}

impl ScanCounters {
    fn enter(&self) {
        let now = self.active.fetch_add(1, Ordering::AcqRel) + 1;
        self.peak_active.fetch_max(now, Ordering::AcqRel);
    }

    fn leave(&self) {
        self.active.fetch_sub(1, Ordering::AcqRel);
    }

    fn error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn peak_active(&self) -> usize {
        self.peak_active.load(Ordering::Acquire)
    }

    pub(crate) fn to_scan_progress(&self) -> ScanProgress {
        ScanProgress {
            dirs_scanned: self.dirs_scanned.load(Ordering::Relaxed),
            matches_found: self.matches_found.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            current_path: self.current_path.lock().ok().and_then(|g| g.clone()),
        }
    }
}

enum Job {
    Dir(PathBuf),
    Stop,
}

/// One directory-processing worker.
///
/// Every queued directory holds one count in `pending` until a unit has
/// finished reading it. Children are counted before the parent is released,
/// so `pending` only reaches zero once the whole tree has been visited.
struct Unit<'a> {
    config: &'a ScanConfig,
    cancel: &'a CancellationToken,
    counters: &'a ScanCounters,
    pending: &'a AtomicUsize,
    jobs_tx: Sender<Job>,
    jobs_rx: Receiver<Job>,
    matches_tx: Sender<PathBuf>,
    workers: usize,
}

impl Unit<'_> {
    fn run(self) {
        while let Ok(job) = self.jobs_rx.recv() {
            let dir = match job {
                Job::Dir(dir) => dir,
                Job::Stop => break,
            };

            self.counters.enter();
            if !self.cancel.is_cancelled() {
                self.process_dir(&dir);
            }
            self.counters.leave();

            if self.pending.fetch_sub(1, Ordering::AcqRel) == 1 {
                for _ in 0..self.workers {
                    let _ = self.jobs_tx.send(Job::Stop);
                }
            }
        }
    }

    fn process_dir(&self, dir: &Path) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "skipping unreadable directory");
                self.counters.error();
                return;
            }
        };

        self.counters.dirs_scanned.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut guard) = self.counters.current_path.lock() {
            *guard = Some(dir.to_path_buf());
        }

        for entry in entries {
            let Ok(entry) = entry else {
                self.counters.error();
                continue;
            };
            let Ok(file_type) = entry.file_type() else {
                self.counters.error();
                continue;
            };

            if file_type.is_dir() {
                // The queue is unbounded: a unit never waits on a slot another unit holds
                self.pending.fetch_add(1, Ordering::AcqRel);
                if self.jobs_tx.send(Job::Dir(entry.path())).is_err() {
                    self.pending.fetch_sub(1, Ordering::AcqRel);
                }
            } else if self.config.matches(&entry.file_name()) {
                self.counters.matches_found.fetch_add(1, Ordering::Relaxed);
                let _ = self.matches_tx.send(entry.path());
            }
        }
    }
}

/// Bounded-concurrency lock file scanner
pub struct Scanner {
    config: ScanConfig,
    cancel_token: CancellationToken,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk `root` and return every file whose name carries the extension.
    ///
    /// Blocks until all units have finished. Unreadable entries are skipped; a
    /// missing root yields an empty set.
    pub fn scan(&self, root: &Path) -> MatchSet {
        self.scan_observed(root, &ScanCounters::default())
    }

    /// Scan on a background thread.
    /// Returns a receiver for progress updates and the handle yielding the matches.
    pub fn spawn(self, root: PathBuf) -> (Receiver<ScanMessage>, JoinHandle<MatchSet>) {
        let (tx, rx) = crossbeam_channel::unbounded();

        let handle = std::thread::spawn(move || self.scan_with_heartbeat(root, tx));

        (rx, handle)
    }

    fn scan_with_heartbeat(self, root: PathBuf, tx: Sender<ScanMessage>) -> MatchSet {
        let counters = Arc::new(ScanCounters::default());
        let counters_for_heartbeat = Arc::clone(&counters);
        let tx_for_heartbeat = tx.clone();
        let cancel_for_heartbeat = self.cancel_token.clone();

        // Heartbeat: report progress every 100ms until the scan is done
        let heartbeat_handle = std::thread::spawn(move || {
            while !counters_for_heartbeat.done.load(Ordering::Relaxed)
                && !cancel_for_heartbeat.is_cancelled()
            {
                std::thread::sleep(Duration::from_millis(100));
                let progress = counters_for_heartbeat.to_scan_progress();
                let _ = tx_for_heartbeat.send(ScanMessage::Progress(progress));
            }
        });

        let matches = self.scan_observed(&root, &counters);

        counters.done.store(true, Ordering::Relaxed);
        let _ = heartbeat_handle.join();

        let _ = tx.send(ScanMessage::Progress(counters.to_scan_progress()));
        if self.cancel_token.is_cancelled() {
            let _ = tx.send(ScanMessage::Cancelled);
        } else {
            let _ = tx.send(ScanMessage::Completed);
        }

        matches
    }

    pub(crate) fn scan_observed(&self, root: &Path, counters: &ScanCounters) -> MatchSet {
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        let workers = self.config.budget.max(1);

        let (jobs_tx, jobs_rx) = crossbeam_channel::unbounded();
        let (matches_tx, matches_rx) = crossbeam_channel::unbounded();

        // Root is the first unit
        let pending = AtomicUsize::new(1);
        let _ = jobs_tx.send(Job::Dir(root.clone()));

        debug!(root = %root.display(), workers, extension = %self.config.extension, "scan started");

        let paths: Vec<PathBuf> = std::thread::scope(|scope| {
            for i in 0..workers {
                let unit = Unit {
                    config: &self.config,
                    cancel: &self.cancel_token,
                    counters,
                    pending: &pending,
                    jobs_tx: jobs_tx.clone(),
                    jobs_rx: jobs_rx.clone(),
                    matches_tx: matches_tx.clone(),
                    workers,
                };
                let spawned = std::thread::Builder::new()
                    .name(format!("lockclean-scan-{i}"))
                    .spawn_scoped(scope, move || unit.run());
                if let Err(e) = spawned {
                    warn!(error = %e, "failed to spawn scan unit");
                }
            }

            // Only units hold senders now; the fan-in ends when the last one exits
            drop(matches_tx);
            matches_rx.iter().collect()
        });

        let progress = counters.to_scan_progress();
        debug!(
            matches = paths.len(),
            dirs = progress.dirs_scanned,
            errors = progress.errors,
            peak_active = counters.peak_active(),
            "scan finished"
        );

        MatchSet::new(root, paths)
    }
}

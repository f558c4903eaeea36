//! Runs controller effects off the UI thread.
//!
//! Each effect becomes one short-lived thread whose result is sent back over a
//! channel as a [`Msg`]. The controller never has more than one effect
//! outstanding, so at most one of these threads exists at a time.

use std::path::PathBuf;

use crossbeam_channel::{Receiver, Sender, unbounded};
use lockclean_core::{
    CancellationToken, MatchSet, ScanConfig, ScanMessage, Scanner, delete_at,
};
use tracing::{debug, error};

use crate::app::{Effect, Msg};

pub struct Worker {
    scan_config: ScanConfig,
    cancel_token: CancellationToken,
    tx: Sender<Msg>,
    rx: Receiver<Msg>,
}

impl Worker {
    pub fn new(scan_config: ScanConfig) -> Self {
        let (tx, rx) = unbounded();
        Self {
            scan_config,
            cancel_token: CancellationToken::new(),
            tx,
            rx,
        }
    }

    pub fn dispatch(&self, effect: Effect) {
        match effect {
            Effect::Scan { root } => self.start_scan(root),
            Effect::Delete { matches, index } => self.start_delete(matches, index),
        }
    }

    /// Next finished result, if any
    pub fn try_recv(&self) -> Option<Msg> {
        self.rx.try_recv().ok()
    }

    /// Stop any running scan; its partial result is dropped
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    fn start_scan(&self, root: PathBuf) {
        let scanner =
            Scanner::new(self.scan_config.clone()).with_cancellation(self.cancel_token.clone());
        let tx = self.tx.clone();

        std::thread::spawn(move || {
            let (progress_rx, handle) = scanner.spawn(root);

            let mut cancelled = false;
            for msg in progress_rx {
                match msg {
                    ScanMessage::Progress(progress) => {
                        let _ = tx.send(Msg::ScanProgress(progress));
                    }
                    ScanMessage::Completed => {}
                    ScanMessage::Cancelled => cancelled = true,
                }
            }

            match handle.join() {
                Ok(_) if cancelled => debug!("scan cancelled"),
                Ok(matches) => {
                    let _ = tx.send(Msg::ScanComplete(matches));
                }
                Err(_) => error!("scan thread panicked"),
            }
        });
    }

    fn start_delete(&self, matches: MatchSet, index: usize) {
        let tx = self.tx.clone();

        std::thread::spawn(move || {
            if let Some(outcome) = delete_at(&matches, index) {
                let _ = tx.send(Msg::DeleteOutcome(outcome));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn recv_until(worker: &Worker, pred: impl Fn(&Msg) -> bool) -> Msg {
        loop {
            let msg = worker
                .rx
                .recv_timeout(Duration::from_secs(10))
                .expect("worker result");
            if pred(&msg) {
                return msg;
            }
        }
    }

    #[test]
    fn test_scan_effect_reports_matches() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.cdslck"), "").unwrap();

        let worker = Worker::new(ScanConfig::default());
        worker.dispatch(Effect::Scan {
            root: temp.path().to_path_buf(),
        });

        match recv_until(&worker, |m| matches!(m, Msg::ScanComplete(_))) {
            Msg::ScanComplete(matches) => assert_eq!(matches.len(), 1),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_delete_effect_reports_outcome() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.cdslck");
        fs::write(&path, "").unwrap();
        let matches = MatchSet::new(temp.path().to_path_buf(), vec![path.clone()]);

        let worker = Worker::new(ScanConfig::default());
        worker.dispatch(Effect::Delete { matches, index: 0 });

        match recv_until(&worker, |m| matches!(m, Msg::DeleteOutcome(_))) {
            Msg::DeleteOutcome(outcome) => {
                assert!(outcome.success);
                assert_eq!(outcome.index, 0);
                assert!(!path.exists());
            }
            _ => unreachable!(),
        }
    }
}

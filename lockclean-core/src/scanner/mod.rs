mod progress;
mod walker;

pub use progress::{ScanMessage, ScanProgress};
pub use walker::{CancellationToken, DEFAULT_BUDGET, DEFAULT_EXTENSION, ScanConfig, Scanner};

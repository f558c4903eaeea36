// Run with: cargo run -p lockclean-core --example scan_report -- /path/to/scan [budget]
// Reports what a scan finds without deleting anything.

use lockclean_core::{ScanConfig, ScanMessage, Scanner, relative_display};
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let budget = args
        .next()
        .and_then(|b| b.parse().ok())
        .unwrap_or(lockclean_core::DEFAULT_BUDGET);

    println!("Scanning: {:?} (budget {})", path, budget);

    let scanner = Scanner::new(ScanConfig::default().with_budget(budget));
    let (rx, handle) = scanner.spawn(path);

    let start = Instant::now();
    for msg in rx {
        match msg {
            ScanMessage::Progress(p) => {
                println!(
                    "[{:>6.1}s] dirs={:<8} matches={:<6} errors={:<4} path={:?}",
                    start.elapsed().as_secs_f64(),
                    p.dirs_scanned,
                    p.matches_found,
                    p.errors,
                    p.current_path
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                        .unwrap_or_default()
                );
            }
            ScanMessage::Completed => {
                println!("[{:>6.1}s] COMPLETED", start.elapsed().as_secs_f64());
            }
            ScanMessage::Cancelled => {
                println!("[{:>6.1}s] CANCELLED", start.elapsed().as_secs_f64());
            }
        }
    }

    let matches = match handle.join() {
        Ok(matches) => matches,
        Err(_) => {
            eprintln!("scan thread panicked");
            std::process::exit(1);
        }
    };

    println!("\nFound {} file(s):", matches.len());
    for path in matches.iter() {
        println!("  {}", relative_display(path, matches.root()));
    }
}

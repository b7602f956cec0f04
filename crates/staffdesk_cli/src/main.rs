//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `staffdesk_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use staffdesk_core::{DashboardService, JsonFileBackend, RecordStore};

fn main() {
    println!("staffdesk_core version={}", staffdesk_core::core_version());

    // Optionally open a store document and print its counters, exercising
    // the file backend end to end.
    let Some(path) = std::env::args().nth(1) else {
        return;
    };

    match RecordStore::open(JsonFileBackend::new(path)) {
        Ok(store) => {
            let summary = DashboardService::new(&store).summary();
            println!("employees={}", summary.total_employees);
            println!("active_employees={}", summary.active_employees);
            println!("pending_leave_requests={}", summary.pending_leave_requests);
        }
        Err(err) => {
            eprintln!("failed to open store: {err}");
            std::process::exit(1);
        }
    }
}

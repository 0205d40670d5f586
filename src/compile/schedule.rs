//! Serialized compiles for embedders that watch message files themselves.

use std::future::Future;

use tokio::sync::watch;
use tracing::{info, warn};

use super::CompileReport;

/// Run `compile` once for the current value of `changes`, then once per change.
///
/// Compiles never overlap. Changes sent while a compile is running coalesce into a single
/// follow-up compile that sees the latest value. Returns the number of compiles run once
/// every sender has been dropped.
pub async fn serialize_compiles<T, F, Fut>(mut changes: watch::Receiver<T>, mut compile: F) -> usize
where
    T: Clone,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = CompileReport>,
{
    let mut runs = 0;

    loop {
        let value = changes.borrow_and_update().clone();
        let report = compile(value).await;
        runs += 1;

        if report.success {
            info!("[{}] {}", report.timestamp, report.message);
        } else {
            warn!("[{}] {}", report.timestamp, report.message);
        }

        if changes.changed().await.is_err() {
            return runs;
        }
    }
}

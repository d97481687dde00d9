use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::models::dispatch::DispatchEvent;
use crate::observability::metrics::Metrics;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum NotifierWriteError {
    #[error("failed to serialize dispatch event: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to append to dispatch log: {0}")]
    Io(#[from] std::io::Error),
}

/// Hand a dispatch event to the writer task. Failures are observable through
/// logs and metrics only; report creation already succeeded.
pub async fn enqueue_dispatch(state: &AppState, event: DispatchEvent) {
    if let Err(err) = state.dispatch_tx.send(event).await {
        error!(error = %err, "dispatch queue closed; event dropped");
        state
            .metrics
            .dispatches_total
            .with_label_values(&["dropped"])
            .inc();
        return;
    }

    state.metrics.dispatch_queue_depth.inc();
}

pub async fn run_dispatch_writer(
    log_path: PathBuf,
    metrics: Metrics,
    mut dispatch_rx: mpsc::Receiver<DispatchEvent>,
) {
    info!(path = %log_path.display(), "dispatch writer started");

    while let Some(event) = dispatch_rx.recv().await {
        metrics.dispatch_queue_depth.dec();

        match append_event(&log_path, &event).await {
            Ok(()) => {
                metrics
                    .dispatches_total
                    .with_label_values(&["written"])
                    .inc();
                info!(
                    report_id = %event.report_id,
                    responder = %event.responder,
                    emergency_type = %event.emergency_type,
                    "dispatch alert logged"
                );
            }
            Err(err) => {
                metrics.dispatches_total.with_label_values(&["error"]).inc();
                error!(
                    error = %err,
                    report_id = %event.report_id,
                    "failed to append dispatch event"
                );
            }
        }
    }

    warn!("dispatch writer stopped: queue channel closed");
}

async fn append_event(path: &Path, event: &DispatchEvent) -> Result<(), NotifierWriteError> {
    let mut line = serde_json::to_string(event)?;
    line.push('\n');

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::append_event;
    use crate::models::dispatch::DispatchEvent;

    fn event(report_id: &str) -> DispatchEvent {
        DispatchEvent {
            time: Utc::now(),
            responder: "Central Fire Station".to_string(),
            contact: "+234-555-0101".to_string(),
            report_id: report_id.to_string(),
            emergency_type: "fire".to_string(),
        }
    }

    #[tokio::test]
    async fn appends_one_json_line_per_event() {
        let path = std::env::temp_dir().join(format!("alerts-{}.log", uuid::Uuid::new_v4()));

        append_event(&path, &event("R1")).await.unwrap();
        append_event(&path, &event("R2")).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["reportId"], "R1");
        assert_eq!(first["responder"], "Central Fire Station");
        assert_eq!(first["emergencyType"], "fire");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["reportId"], "R2");

        let _ = std::fs::remove_file(&path);
    }
}

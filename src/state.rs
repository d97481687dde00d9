use std::sync::Arc;

use tokio::sync::mpsc;

use crate::models::dispatch::DispatchEvent;
use crate::observability::metrics::Metrics;
use crate::roster::Roster;
use crate::store::{MemoryReportStore, MemoryUserStore, ReportStore, UserStore};

pub struct AppState {
    pub roster: Roster,
    pub reports: Arc<dyn ReportStore>,
    pub users: Arc<dyn UserStore>,
    pub dispatch_tx: mpsc::Sender<DispatchEvent>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(
        roster: Roster,
        dispatch_queue_size: usize,
    ) -> (Self, mpsc::Receiver<DispatchEvent>) {
        let (dispatch_tx, dispatch_rx) = mpsc::channel(dispatch_queue_size);

        (
            Self {
                roster,
                reports: Arc::new(MemoryReportStore::new()),
                users: Arc::new(MemoryUserStore::new()),
                dispatch_tx,
                metrics: Metrics::new(),
            },
            dispatch_rx,
        )
    }
}

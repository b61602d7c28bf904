//! In-process notification bus.
//!
//! Three topic shapes: a global topic for new reports, a dashboard-wide
//! topic for status changes, and per-reporter status-change topics.
//! Delivery is best-effort for currently-attached subscribers: each
//! receiver has its own bounded buffer, a slow receiver lags on its own,
//! and publishing never blocks the write path. Unsubscribing is simply
//! dropping the receiver.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

use crate::report::model::Report;

/// Per-topic buffer capacity.
const CHANNEL_CAPACITY: usize = 100;

/// Event pushed to real-time observers.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum BusEvent {
    /// A report was submitted.
    NewReport(Report),
    /// A report's status changed.
    StatusUpdate(Report),
}

/// Publish/subscribe channel for report lifecycle events.
///
/// Cheap to clone; all clones share the same subscriber registry.
#[derive(Clone)]
pub struct NotificationBus {
    new_reports: broadcast::Sender<Report>,
    status_changes: broadcast::Sender<Report>,
    reporter_topics: Arc<RwLock<HashMap<String, broadcast::Sender<Report>>>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        let (new_reports, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (status_changes, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            new_reports,
            status_changes,
            reporter_topics: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Subscribe to every future new-report publish.
    pub fn subscribe_new_reports(&self) -> broadcast::Receiver<Report> {
        self.new_reports.subscribe()
    }

    /// Subscribe to every future status-change publish (dashboard topic).
    pub fn subscribe_status_changes(&self) -> broadcast::Receiver<Report> {
        self.status_changes.subscribe()
    }

    /// Subscribe to status changes for one reporter's reports only.
    pub fn subscribe_reporter(&self, reporter_id: &str) -> broadcast::Receiver<Report> {
        let mut topics = self
            .reporter_topics
            .write()
            .unwrap_or_else(|e| e.into_inner());
        // Topics whose last receiver detached would otherwise linger
        // until a publish targets that exact reporter; the registry must
        // not grow with abandoned subscriptions.
        topics.retain(|_, tx| tx.receiver_count() > 0);
        topics
            .entry(reporter_id.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Number of dashboard subscribers currently attached.
    pub fn dashboard_receiver_count(&self) -> usize {
        self.new_reports.receiver_count()
    }

    /// Publish a newly created report to the global topic.
    ///
    /// Best-effort: a send with no attached subscribers is not an error,
    /// and failures never propagate to the caller.
    pub fn publish_new_report(&self, report: &Report) {
        if self.new_reports.send(report.clone()).is_err() {
            debug!(report_id = report.id, "no subscribers for new report");
        }
    }

    /// Publish a status change to the dashboard topic and the matching
    /// reporter topic. Both carry the same post-update payload.
    pub fn publish_status_change(&self, report: &Report) {
        if self.status_changes.send(report.clone()).is_err() {
            debug!(report_id = report.id, "no dashboard subscribers for status change");
        }

        let mut topics = self
            .reporter_topics
            .write()
            .unwrap_or_else(|e| e.into_inner());
        if let Some(tx) = topics.get(&report.reporter_id) {
            if tx.send(report.clone()).is_err() {
                // Last receiver for this reporter is gone; drop the topic.
                topics.remove(&report.reporter_id);
                debug!(
                    reporter_id = %report.reporter_id,
                    "pruned reporter topic with no subscribers"
                );
            }
        }
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

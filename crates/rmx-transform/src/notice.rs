//! Injectable sink for role-inference notices.
//!
//! Inference emits an informational notice naming the column it selected
//! for a role. Notices are advisory only and are never emitted for columns
//! the caller supplied explicitly.

use std::sync::Mutex;

use rmx_model::ColumnRole;

/// Receives informational notices from role inference.
pub trait NoticeSink {
    /// Called once per role that was inferred rather than supplied.
    fn column_inferred(&self, role: ColumnRole, column: &str);
}

/// Default sink that routes notices through `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotices;

impl NoticeSink for TracingNotices {
    fn column_inferred(&self, role: ColumnRole, column: &str) {
        tracing::info!(role = %role, column, "inferred column for role");
    }
}

/// Sink that records notices for later inspection.
#[derive(Debug, Default)]
pub struct CollectedNotices {
    entries: Mutex<Vec<(ColumnRole, String)>>,
}

impl CollectedNotices {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notices received so far, in emission order.
    pub fn entries(&self) -> Vec<(ColumnRole, String)> {
        self.entries.lock().expect("notice lock").clone()
    }
}

impl NoticeSink for CollectedNotices {
    fn column_inferred(&self, role: ColumnRole, column: &str) {
        self.entries
            .lock()
            .expect("notice lock")
            .push((role, column.to_string()));
    }
}

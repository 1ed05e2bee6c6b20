use confapi_core::BackupKind;

use metrics::counter;

/// Counters for backup operations
#[derive(Debug, Clone)]
pub struct BackupMetrics {
    prefix: &'static str,
}

impl BackupMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "confapi_backup",
        }
    }

    /// Record an export that ran inline (`sync`) or was submitted (`async`)
    pub fn export_started(&self, mode: &str) {
        counter!(format!("{}.exports.{}", self.prefix, mode)).increment(1);
    }

    pub fn import_started(&self, mode: &str) {
        counter!(format!("{}.imports.{}", self.prefix, mode)).increment(1);
    }

    pub fn validation_rejected(&self) {
        counter!(format!("{}.validation.rejected", self.prefix)).increment(1);
    }

    pub fn queue_polled(&self) {
        counter!(format!("{}.queue.polls", self.prefix)).increment(1);
    }

    pub fn reindex_triggered(&self) {
        counter!(format!("{}.reindex.triggered", self.prefix)).increment(1);
    }

    pub fn task_failed(&self, kind: BackupKind) {
        counter!(format!("{}.tasks.failed", self.prefix)).increment(1);
        counter!(format!(
            "{}.tasks.failed.{}",
            self.prefix,
            kind_label(kind)
        ))
        .increment(1);
    }
}

impl Default for BackupMetrics {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn kind_label(kind: BackupKind) -> &'static str {
    match kind {
        BackupKind::Export => "export",
        BackupKind::Import => "import",
    }
}

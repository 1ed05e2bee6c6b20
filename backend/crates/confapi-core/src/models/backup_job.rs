use crate::{ExportJob, ImportJob};

/// A job submitted to the task manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupJob {
    Export(ExportJob),
    Import(ImportJob),
}

impl BackupJob {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Export(_) => "space export",
            Self::Import(_) => "space import",
        }
    }
}

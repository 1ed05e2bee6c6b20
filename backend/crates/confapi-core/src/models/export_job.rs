use crate::{ArchiveFormat, Principal};

/// What an export covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// A single space, identified by `ExportJob::space_key`
    Space,
}

/// Export work handed to the execution engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub scope: ExportScope,
    pub space_key: String,
    pub archive_format: ArchiveFormat,
    pub include_attachments: bool,
    pub include_comments: bool,
    pub actor: Principal,
}

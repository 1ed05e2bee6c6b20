use crate::BackupErrorResult;
use crate::space_lookup::resolve_space;

use confapi_core::{BackupRequest, ContentService, ExportJob, ExportScope, Principal};

/// Turn a request into export work for a single space.
///
/// Format and include flags are copied verbatim.
pub fn build_export_job(
    content: &dyn ContentService,
    request: &BackupRequest,
    actor: &Principal,
) -> BackupErrorResult<ExportJob> {
    let space = resolve_space(content, request.space_key.as_deref())?;

    Ok(ExportJob {
        scope: ExportScope::Space,
        space_key: space.key,
        archive_format: request.archive_format,
        include_attachments: request.include_attachments,
        include_comments: request.include_comments,
        actor: actor.clone(),
    })
}

//! Export/import engine writing real zip archives to a local directory.
//!
//! Archives follow the layout the import validator expects: an
//! `entities.xml` content entry plus an `exportDescriptor.properties`
//! descriptor. HTML exports carry `index.html` instead and cannot be
//! imported again.

use crate::InMemoryContentService;

use confapi_backup::{
    FILE_ENTITIES_XML, FILE_EXPORT_DESCRIPTOR_PROPERTIES, PROPERTY_EXPORT_TYPE,
    PROPERTY_EXPORT_TYPE_SPACE, PROPERTY_SPACE_KEY, PROPERTY_SPACE_NAME, format_properties,
    read_descriptor,
};
use confapi_core::{
    ArchiveFormat, ArchiveResult, ContentService, CoreError, ExecutionEngine, ExportJob,
    ImportJob, ProgressListener, Result as CoreErrorResult, Space,
};

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use log::info;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// URL path exported archives are served under
pub const DOWNLOAD_PATH: &str = "download";

const FILE_INDEX_HTML: &str = "index.html";

pub struct LocalExecutionEngine {
    content: Arc<InMemoryContentService>,
    export_dir: PathBuf,
}

impl LocalExecutionEngine {
    pub fn new(content: Arc<InMemoryContentService>, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            content,
            export_dir: export_dir.into(),
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    fn write_archive(&self, path: &Path, space: &Space, job: &ExportJob) -> CoreErrorResult<()> {
        let file = File::create(path).map_err(|e| CoreError::io(path, e))?;
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        let (entry, body) = match job.archive_format {
            ArchiveFormat::Zip => (FILE_ENTITIES_XML, entities_xml(space)),
            ArchiveFormat::Html => (FILE_INDEX_HTML, index_html(space)),
        };
        zip.start_file(entry, options)
            .map_err(|e| CoreError::engine(format!("Cannot add {}: {}", entry, e)))?;
        zip.write_all(body.as_bytes())
            .map_err(|e| CoreError::io(path, e))?;

        zip.start_file(FILE_EXPORT_DESCRIPTOR_PROPERTIES, options)
            .map_err(|e| {
                CoreError::engine(format!(
                    "Cannot add {}: {}",
                    FILE_EXPORT_DESCRIPTOR_PROPERTIES, e
                ))
            })?;
        zip.write_all(descriptor(space, job).as_bytes())
            .map_err(|e| CoreError::io(path, e))?;

        zip.finish()
            .map_err(|e| CoreError::engine(format!("Cannot finish {}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl ExecutionEngine for LocalExecutionEngine {
    fn run_export(
        &self,
        job: &ExportJob,
        progress: &dyn ProgressListener,
    ) -> CoreErrorResult<ArchiveResult> {
        let space = self.content.find_space_by_key(&job.space_key).ok_or_else(|| {
            CoreError::engine(format!("Space '{}' no longer exists", job.space_key))
        })?;
        progress.update(10, "Preparing export");

        fs::create_dir_all(&self.export_dir).map_err(|e| CoreError::io(&self.export_dir, e))?;

        let file_name = format!(
            "{}-{}.zip",
            file_safe(&space.key),
            Utc::now().format("%Y%m%d-%H%M%S%3f")
        );
        let path = self.export_dir.join(&file_name);

        progress.update(40, "Writing archive");
        if let Err(e) = self.write_archive(&path, &space, job) {
            let _ = fs::remove_file(&path);
            return Err(e);
        }

        progress.update(100, "Export complete");
        info!("Exported space '{}' to {}", space.key, path.display());

        Ok(ArchiveResult::new(format!("{}/{}", DOWNLOAD_PATH, file_name)))
    }

    fn run_import(&self, job: &ImportJob, progress: &dyn ProgressListener) -> CoreErrorResult<()> {
        progress.update(10, "Reading archive");

        let descriptor = read_descriptor(&job.working_file)
            .map_err(|e| CoreError::engine(e.message().to_string()))?;
        let key = descriptor
            .space_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| CoreError::engine("Archive descriptor does not name a space key"))?;
        let name = descriptor.space_name().unwrap_or(key);

        progress.update(50, "Creating space");
        if !self.content.create_space(Space::new(key, name)) {
            return Err(CoreError::engine(format!(
                "Space '{}' already exists",
                key
            )));
        }

        progress.update(100, "Import complete");
        info!(
            "Imported space '{}' from {} for {}",
            key,
            job.working_file.display(),
            job.actor
        );
        Ok(())
    }
}

fn file_safe(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn entities_xml(space: &Space) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <hibernate-generic datetime=\"{}\">\n\
         <object class=\"Space\">\n\
         <property name=\"key\">{}</property>\n\
         <property name=\"name\">{}</property>\n\
         </object>\n\
         </hibernate-generic>\n",
        Utc::now().to_rfc3339(),
        xml_escape(&space.key),
        xml_escape(&space.name)
    )
}

fn index_html(space: &Space) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><title>{name}</title></head>\n\
         <body><h1>{name}</h1><p>Space key: {key}</p></body></html>\n",
        name = xml_escape(&space.name),
        key = xml_escape(&space.key)
    )
}

fn descriptor(space: &Space, job: &ExportJob) -> String {
    let created_at = Utc::now().to_rfc3339();
    let include_attachments = job.include_attachments.to_string();
    let include_comments = job.include_comments.to_string();
    format_properties(&[
        (PROPERTY_EXPORT_TYPE, PROPERTY_EXPORT_TYPE_SPACE),
        (PROPERTY_SPACE_KEY, &space.key),
        (PROPERTY_SPACE_NAME, &space.name),
        ("archiveFormat", job.archive_format.as_str()),
        ("includeAttachments", &include_attachments),
        ("includeComments", &include_comments),
        ("createdBy", &job.actor.username),
        ("createdAt", &created_at),
    ])
}

pub mod backup_service;
pub mod descriptor;
pub mod error;
pub mod export_context;
pub mod import_context;
pub mod metrics;
pub mod properties;
pub mod queue_status;
pub mod space_lookup;

#[cfg(test)]
mod tests;

pub use backup_service::BackupService;
pub use descriptor::{
    ArchiveDescriptorProperties, FILE_ENTITIES_XML, FILE_EXPORT_DESCRIPTOR_PROPERTIES,
    PROPERTY_EXPORT_TYPE, PROPERTY_EXPORT_TYPE_SPACE, PROPERTY_SPACE_KEY, PROPERTY_SPACE_NAME,
    read_descriptor, read_descriptor_from,
};
pub use error::{BackupError, BackupErrorResult};
pub use export_context::build_export_job;
pub use import_context::{build_import_job, validate_descriptor, validate_import_file};
pub use metrics::BackupMetrics;
pub use properties::{format_properties, parse_properties};
pub use space_lookup::{find_space, resolve_space};

/// Path segments under the REST prefix
pub const BACKUP: &str = "backup";
pub const BACKUP_QUEUE: &str = "queue";
pub const BACKUP_EXPORT: &str = "export";
pub const BACKUP_IMPORT: &str = "import";

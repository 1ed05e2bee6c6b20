use crate::properties::parse_properties;
use crate::{BackupError, BackupErrorResult};

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

pub const FILE_ENTITIES_XML: &str = "entities.xml";
pub const FILE_EXPORT_DESCRIPTOR_PROPERTIES: &str = "exportDescriptor.properties";

pub const PROPERTY_EXPORT_TYPE: &str = "exportType";
pub const PROPERTY_EXPORT_TYPE_SPACE: &str = "space";
pub const PROPERTY_SPACE_KEY: &str = "spaceKey";
pub const PROPERTY_SPACE_NAME: &str = "spaceName";

const NOT_AN_EXPORT_ARCHIVE: &str = "Not a valid export archive";

/// Properties read from an archive's `exportDescriptor.properties`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveDescriptorProperties {
    pub export_type: Option<String>,
    pub space_key: Option<String>,
    /// Every property of the descriptor, including the two above
    pub properties: HashMap<String, String>,
}

impl ArchiveDescriptorProperties {
    pub fn parse(text: &str) -> Self {
        Self::from_map(parse_properties(text))
    }

    pub fn from_map(properties: HashMap<String, String>) -> Self {
        Self {
            export_type: properties.get(PROPERTY_EXPORT_TYPE).cloned(),
            space_key: properties.get(PROPERTY_SPACE_KEY).cloned(),
            properties,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn space_name(&self) -> Option<&str> {
        self.get(PROPERTY_SPACE_NAME)
    }
}

/// Open the archive at `path` and read its descriptor.
///
/// A file that cannot be opened is an internal error; a file that opens but
/// is not a zip archive is a bad request.
pub fn read_descriptor(path: &Path) -> BackupErrorResult<ArchiveDescriptorProperties> {
    let file = File::open(path).map_err(|e| {
        BackupError::internal(format!("Cannot open archive {}: {}", path.display(), e))
    })?;

    let mut archive = ZipArchive::new(file).map_err(|e| match e {
        ZipError::Io(io) => {
            BackupError::internal(format!("Cannot read archive {}: {}", path.display(), io))
        }
        other => {
            log::debug!("Rejected upload {}: {}", path.display(), other);
            BackupError::bad_request(NOT_AN_EXPORT_ARCHIVE)
        }
    })?;

    read_descriptor_from(&mut archive)
}

/// Check the archive's entries and parse its descriptor.
///
/// Only the presence of `entities.xml` is checked, never its content.
pub fn read_descriptor_from<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
) -> BackupErrorResult<ArchiveDescriptorProperties> {
    let mut has_entities = false;
    let mut has_descriptor = false;
    for name in archive.file_names() {
        match name {
            FILE_ENTITIES_XML => has_entities = true,
            FILE_EXPORT_DESCRIPTOR_PROPERTIES => has_descriptor = true,
            _ => {}
        }
    }

    if !has_entities {
        return Err(BackupError::bad_request(format!(
            "{}: {} is missing",
            NOT_AN_EXPORT_ARCHIVE, FILE_ENTITIES_XML
        )));
    }
    if !has_descriptor {
        return Err(BackupError::bad_request(format!(
            "{}: {} is missing",
            NOT_AN_EXPORT_ARCHIVE, FILE_EXPORT_DESCRIPTOR_PROPERTIES
        )));
    }

    let mut entry = archive
        .by_name(FILE_EXPORT_DESCRIPTOR_PROPERTIES)
        .map_err(|e| {
            BackupError::internal(format!(
                "Cannot open {}: {}",
                FILE_EXPORT_DESCRIPTOR_PROPERTIES, e
            ))
        })?;

    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).map_err(|e| {
        BackupError::internal(format!(
            "Cannot read {}: {}",
            FILE_EXPORT_DESCRIPTOR_PROPERTIES, e
        ))
    })?;

    Ok(ArchiveDescriptorProperties::parse(&String::from_utf8_lossy(
        &bytes,
    )))
}

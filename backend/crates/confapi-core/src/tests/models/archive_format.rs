use crate::{ArchiveFormat, CoreError};

use std::str::FromStr;

#[test]
fn test_archive_format_defaults_to_zip() {
    assert_eq!(ArchiveFormat::default(), ArchiveFormat::Zip);
}

#[test]
fn test_archive_format_parses_case_insensitively() {
    assert_eq!(ArchiveFormat::from_str("ZIP").unwrap(), ArchiveFormat::Zip);
    assert_eq!(ArchiveFormat::from_str("xml").unwrap(), ArchiveFormat::Zip);
    assert_eq!(ArchiveFormat::from_str("Html").unwrap(), ArchiveFormat::Html);
}

#[test]
fn test_archive_format_rejects_unknown_value() {
    let result = ArchiveFormat::from_str("pdf");

    match result {
        Err(CoreError::InvalidArchiveFormat { value, .. }) => assert_eq!(value, "pdf"),
        other => panic!("Expected InvalidArchiveFormat, got {:?}", other),
    }
}

#[test]
fn test_archive_format_serializes_lowercase() {
    let json = serde_json::to_string(&ArchiveFormat::Html).unwrap();
    assert_eq!(json, "\"html\"");
}

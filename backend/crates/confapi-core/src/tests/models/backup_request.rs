use crate::{ArchiveFormat, BackupRequest};

use googletest::prelude::*;

#[test]
fn given_empty_json_when_deserialized_then_defaults_apply() {
    let request: BackupRequest = serde_json::from_str("{}").unwrap();

    assert_that!(request.space_key, none());
    assert_that!(request.archive_format, eq(ArchiveFormat::Zip));
    assert_that!(request.include_attachments, eq(true));
    assert_that!(request.include_comments, eq(true));
}

#[test]
fn given_camel_case_json_when_deserialized_then_fields_are_read() {
    let request: BackupRequest = serde_json::from_str(
        r#"{"spaceKey":"DOCS","archiveFormat":"html","includeAttachments":false,"includeComments":false}"#,
    )
    .unwrap();

    assert_that!(request.space_key, some(eq("DOCS")));
    assert_that!(request.archive_format, eq(ArchiveFormat::Html));
    assert_that!(request.include_attachments, eq(false));
    assert_that!(request.include_comments, eq(false));
}

#[test]
fn given_key_when_new_then_other_fields_use_defaults() {
    let request = BackupRequest::new("space");

    assert_that!(request.space_key, some(eq("space")));
    assert_that!(request.archive_format, eq(ArchiveFormat::Zip));
}

#[test]
fn given_uppercase_archive_format_when_deserialized_then_zip() {
    // Given
    let json = r#"{"spaceKey":"space","archiveFormat":"ZIP"}"#;

    // When
    let request: BackupRequest = serde_json::from_str(json).unwrap();

    // Then
    assert_that!(request.archive_format, eq(ArchiveFormat::Zip));
}

#[test]
fn given_unknown_archive_format_when_deserialized_then_error() {
    // Given
    let json = r#"{"spaceKey":"space","archiveFormat":"pdf"}"#;

    // When
    let result = serde_json::from_str::<BackupRequest>(json);

    // Then
    assert!(result.is_err());
}

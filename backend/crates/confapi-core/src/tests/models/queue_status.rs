use crate::{BackupKind, QueueStatus, TrackingId};

use http::Uri;

fn status(result_url: Option<Uri>) -> QueueStatus {
    QueueStatus {
        tracking_id: TrackingId::parse("a0b1cdef-0a12-3bcd-45e6-0a1bcd2345ef").unwrap(),
        kind: BackupKind::Export,
        percent_complete: 100,
        elapsed_millis: 2000,
        complete: true,
        successful: true,
        result_url,
    }
}

#[test]
fn test_queue_status_serializes_result_url_as_string() {
    let uri: Uri = "http://localhost:1990/confluence/space-export.zip"
        .parse()
        .unwrap();
    let json = serde_json::to_value(status(Some(uri))).unwrap();

    assert_eq!(json["trackingId"], "a0b1cdef-0a12-3bcd-45e6-0a1bcd2345ef");
    assert_eq!(json["kind"], "EXPORT");
    assert_eq!(json["percentComplete"], 100);
    assert_eq!(
        json["resultUrl"],
        "http://localhost:1990/confluence/space-export.zip"
    );
}

#[test]
fn test_queue_status_omits_missing_result_url() {
    let json = serde_json::to_value(status(None)).unwrap();

    assert!(json.get("resultUrl").is_none());
}

use crate::{CoreError, TrackingId};

#[test]
fn test_tracking_id_round_trips_through_display() {
    let id = TrackingId::parse("a0b1cdef-0a12-3bcd-45e6-0a1bcd2345ef").unwrap();

    assert_eq!(id.to_string(), "a0b1cdef-0a12-3bcd-45e6-0a1bcd2345ef");
}

#[test]
fn test_tracking_id_rejects_non_uuid() {
    match TrackingId::parse("not-a-uuid") {
        Err(CoreError::InvalidTrackingId { value, .. }) => assert_eq!(value, "not-a-uuid"),
        other => panic!("Expected InvalidTrackingId, got {:?}", other),
    }
}

#[test]
fn test_new_tracking_ids_are_unique() {
    assert_ne!(TrackingId::new(), TrackingId::new());
}

use super::*;
use crate::state::session::User;

fn signed_in_state() -> SessionState {
    SessionState {
        user: Some(User { id: Some("u-1".to_owned()), name: Some("Riley".to_owned()) }),
        connected: true,
    }
}

#[test]
fn default_state_round_trips() {
    let state = SessionState::default();
    let decoded = decode_state(&encode_state(&state)).expect("decode should succeed");
    assert_eq!(decoded, state);
}

#[test]
fn signed_in_state_round_trips() {
    let state = signed_in_state();
    let decoded = decode_state(&encode_state(&state)).expect("decode should succeed");
    assert_eq!(decoded, state);
}

#[test]
fn encoded_payload_contains_no_raw_angle_bracket() {
    let state = SessionState {
        user: Some(User { id: None, name: Some("</script><b>".to_owned()) }),
        connected: true,
    };
    let payload = encode_state(&state);
    assert!(!payload.contains('<'));
    assert!(payload.contains("\\u003c"));
}

#[test]
fn escaped_payload_still_round_trips() {
    let state = SessionState {
        user: Some(User { id: Some("<id>".to_owned()), name: None }),
        connected: false,
    };
    let decoded = decode_state(&encode_state(&state)).expect("decode should succeed");
    assert_eq!(decoded, state);
}

#[test]
fn decode_rejects_invalid_json() {
    let err = decode_state("{not json").expect_err("payload should be rejected");
    assert!(matches!(err, SnapshotError::Malformed(_)));
}

#[test]
fn decode_rejects_wrong_shape() {
    assert!(decode_state(r#"{"connected":"yes","user":null}"#).is_err());
}

#[test]
fn read_embedded_is_none_outside_the_browser() {
    assert!(read_embedded().is_none());
}

use super::*;

#[test]
fn fetch_is_unsupported_outside_the_browser() {
    let err = futures::executor::block_on(fetch_session()).expect_err("fetch should fail");
    assert!(matches!(err, FetchError::Unsupported));
}

#[test]
fn errors_name_the_failing_stage() {
    assert_eq!(
        FetchError::Request("connection refused".to_owned()).to_string(),
        "profile request failed: connection refused"
    );
    assert_eq!(FetchError::Status(503).to_string(), "profile request returned status 503");
    assert!(FetchError::Decode("eof".to_owned()).to_string().contains("malformed"));
}

use super::*;

#[test]
fn config_error_converts_and_keeps_message() {
    let err: HostError = ConfigError::ZeroTickInterval.into();
    assert_eq!(err.error_code(), "E_CONFIG");
    assert!(err.to_string().starts_with("invalid configuration: "));
}

#[test]
fn parse_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: HostError = json_err.into();
    assert_eq!(err.error_code(), "E_PARSE");
    assert!(err.to_string().starts_with("malformed event: "));
}

#[test]
fn io_error_converts() {
    let err: HostError = std::io::Error::other("boom").into();
    assert_eq!(err.error_code(), "E_IO");
    assert_eq!(err.to_string(), "io error: boom");
}

#[test]
fn channel_closed_has_fixed_message() {
    assert_eq!(HostError::ChannelClosed.to_string(), "controller task is gone");
    assert_eq!(HostError::ChannelClosed.error_code(), "E_CHANNEL_CLOSED");
}

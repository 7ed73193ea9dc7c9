use helphut_logger::{Logger, LoggerError};

#[test]
fn invalid_filter_fails_without_installing_a_subscriber() {
    let err = Logger::builder()
        .name("integration-invalid-filter")
        .env_filter("helphut_ui=loud")
        .init()
        .expect_err("invalid filter should fail");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }), "{err}");

    let logger = Logger::builder()
        .name("integration-valid-filter")
        .env_filter("helphut_ui=debug")
        .init();
    assert!(logger.is_ok(), "a valid filter should still initialize afterwards");
}

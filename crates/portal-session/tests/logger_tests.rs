mod common;

use common::{load_config, setup_config_dir};

use portal_session::{SessionError, logger};

use googletest::prelude::*;

// One process-wide logger, so everything lives in a single test.
#[test]
fn given_logging_file_in_config_when_initialize_then_writes_there_and_second_init_fails() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[logging]\nlevel = \"info\"\ncolored = false\nfile = \"portal.log\"\n",
    )
    .unwrap();
    let config = load_config();
    let log_path = temp.path().join("portal.log");

    // When
    let first = logger::initialize(&config);
    log::info!("portal ready");
    log::logger().flush();
    let second = logger::initialize(&config);

    // Then
    assert_that!(first, ok(anything()));
    assert!(matches!(second, Err(SessionError::Logger { .. })));
    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert_that!(contents.as_str(), contains_substring("Logger initialized"));
    assert_that!(contents.as_str(), contains_substring("portal ready"));
}

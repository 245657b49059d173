use crate::tests::{build_logger, console_config, file_config, fixed_time, utc};
use crate::{AppLoggerConfig, FileFormat};

use googletest::assert_that;
use googletest::prelude::{contains_substring, ends_with, eq, not};
use serde_json::Value;
use taglog_file::{FileError, Rotation};
use tempfile::TempDir;

fn last_json_line(contents: &str) -> Value {
    let line = contents.lines().last().unwrap();
    serde_json::from_str(line).unwrap()
}

// =========================================================================
// JSON Records
// =========================================================================

#[test]
fn given_file_logging_when_logging_then_file_gets_crlf_terminated_json() {
    // Given
    let temp = TempDir::new().unwrap();
    let (logger, _console, _clock) = build_logger(file_config(&temp), fixed_time());

    // When
    logger.info("HTTP", &["req"], "started", &["GET /x"]);

    // Then
    let contents = std::fs::read_to_string(logger.current_log_file().unwrap()).unwrap();
    assert_that!(contents, ends_with("\r\n"));

    let record = last_json_line(&contents);
    assert_that!(record["time"].as_str(), eq(Some("2026-10-19 08:30:15.123")));
    assert_that!(record["tag"].as_str(), eq(Some("HTTP")));
    assert_that!(record["level"].as_str(), eq(Some("info")));
    assert_that!(record["message"].as_str(), eq(Some("started")));
    assert_that!(record["subTags"].as_str(), eq(Some("req")));
    assert_that!(record["content"].as_str(), eq(Some("GET /x")));
}

#[test]
fn given_no_subtags_or_content_when_logging_then_keys_omitted_from_record() {
    // Given
    let temp = TempDir::new().unwrap();
    let (logger, _console, _clock) = build_logger(file_config(&temp), fixed_time());

    // When
    logger.warn("APP", &[], "bare", &[]);

    // Then
    let contents = std::fs::read_to_string(logger.current_log_file().unwrap()).unwrap();
    let record = last_json_line(&contents);
    assert!(record.get("subTags").is_none());
    assert!(record.get("content").is_none());
}

#[test]
fn given_same_as_console_format_when_logging_then_file_gets_text_line() {
    // Given
    let temp = TempDir::new().unwrap();
    let config = AppLoggerConfig {
        file_format: FileFormat::SameAsConsole,
        console_colored: true,
        ..file_config(&temp)
    };
    let (logger, console, _clock) = build_logger(config, fixed_time());

    // When
    logger.info("HTTP", &["req"], "started", &["GET /x"]);

    // Then
    let contents = std::fs::read_to_string(logger.current_log_file().unwrap()).unwrap();
    let last = contents.lines().last().unwrap();
    assert_that!(last, contains_substring("[INFO]"));
    assert_that!(last, not(contains_substring("\x1b[")));
    assert_that!(console.contents(), contains_substring("\x1b["));
}

#[test]
fn given_file_level_threshold_when_logging_below_then_not_in_file() {
    // Given
    let temp = TempDir::new().unwrap();
    let config = AppLoggerConfig {
        log_level: "warn".to_string(),
        ..file_config(&temp)
    };
    let (logger, _console, _clock) = build_logger(config, fixed_time());

    // When
    logger.debug("APP", &[], "too quiet", &[]);
    logger.error("APP", &[], "loud enough", &[]);

    // Then
    let contents = std::fs::read_to_string(logger.current_log_file().unwrap()).unwrap();
    assert_that!(contents, not(contains_substring("too quiet")));
    assert_that!(contents, contains_substring("loud enough"));
}

// =========================================================================
// Rotation
// =========================================================================

#[test]
fn given_date_change_when_rotation_checked_then_new_file_used_and_announced() {
    // Given
    let temp = TempDir::new().unwrap();
    let (logger, console, clock) = build_logger(file_config(&temp), utc(2026, 10, 19, 23, 50));
    let first = logger.current_log_file().unwrap();
    logger.info("APP", &[], "before midnight", &[]);

    // When
    clock.set(utc(2026, 10, 20, 0, 10));
    logger.check_rotation();
    logger.info("APP", &[], "after midnight", &[]);

    // Then
    let second = logger.current_log_file().unwrap();
    assert_that!(second, eq(&temp.path().join("logs").join("logs_2026-10-20.log")));
    assert_that!(console.contents(), contains_substring("New log file set"));
    assert_that!(console.contents(), contains_substring("logs_2026-10-20.log"));

    let old = std::fs::read_to_string(first).unwrap();
    assert_that!(old, contains_substring("before midnight"));
    assert_that!(old, not(contains_substring("after midnight")));

    let new = std::fs::read_to_string(second).unwrap();
    assert_that!(new, contains_substring("after midnight"));
    assert_that!(new, contains_substring("New log file set"));
}

#[test]
fn given_rotation_with_close_failure_when_reported_then_swap_announced_and_error_logged() {
    // Given
    let (logger, console, _clock) = build_logger(console_config(), fixed_time());
    let rotation = Rotation {
        previous: String::from("logs_2026-10-19.log"),
        current: String::from("logs_2026-10-20.log"),
        close_error: Some(FileError::flush(
            String::from("logs_2026-10-19.log"),
            std::io::Error::other("disk full"),
        )),
    };

    // When
    logger.inner.report_rotation(rotation);

    // Then
    let lines = console.lines();
    assert_that!(lines.len(), eq(2));
    assert_that!(lines[0], contains_substring("New log file set"));
    assert_that!(lines[0], contains_substring("logs_2026-10-20.log"));
    assert_that!(lines[1], contains_substring("[ERROR]"));
    assert_that!(lines[1], contains_substring("Error closing previous log file"));
    assert_that!(lines[1], contains_substring("disk full"));
}

#[test]
fn given_same_day_when_rotation_checked_then_nothing_logged() {
    // Given
    let temp = TempDir::new().unwrap();
    let (logger, console, clock) = build_logger(file_config(&temp), utc(2026, 10, 19, 8, 0));

    // When
    clock.set(utc(2026, 10, 19, 23, 59));
    logger.check_rotation();

    // Then
    assert_that!(console.contents(), eq(""));
}

#[test]
fn given_new_file_cannot_open_when_rotation_checked_then_error_on_console_and_old_file_kept() {
    // Given
    let temp = TempDir::new().unwrap();
    let (logger, console, clock) = build_logger(file_config(&temp), utc(2026, 10, 19, 23, 50));
    let first = logger.current_log_file().unwrap();
    std::fs::create_dir(temp.path().join("logs").join("logs_2026-10-20.log")).unwrap();

    // When
    clock.set(utc(2026, 10, 20, 0, 10));
    logger.check_rotation();
    logger.info("APP", &[], "still writing", &[]);

    // Then
    assert_that!(logger.current_log_file().unwrap(), eq(&first));
    assert_that!(console.contents(), contains_substring("Error rotating log file"));
    let old = std::fs::read_to_string(first).unwrap();
    assert_that!(old, contains_substring("still writing"));
    assert_that!(old, not(contains_substring("Error rotating log file")));
}

// =========================================================================
// Retention Sweep
// =========================================================================

#[test]
fn given_expired_files_when_swept_then_removed_and_logged_at_trace() {
    // Given
    let temp = TempDir::new().unwrap();
    let (logger, console, _clock) = build_logger(file_config(&temp), utc(2026, 10, 19, 12, 0));
    let log_dir = temp.path().join("logs");
    std::fs::write(log_dir.join("logs_2026-09-18.log"), b"old").unwrap();
    std::fs::write(log_dir.join("logs_2026-09-19.log"), b"recent").unwrap();

    // When
    logger.sweep_expired();

    // Then
    assert!(!log_dir.join("logs_2026-09-18.log").exists());
    assert!(log_dir.join("logs_2026-09-19.log").exists());
    assert!(log_dir.join("logs_2026-10-19.log").exists());

    let contents = console.contents();
    assert_that!(contents, contains_substring("[TRACE]"));
    assert_that!(contents, contains_substring("Log file removed"));
    assert_that!(contents, contains_substring("logs_2026-09-18.log"));
}

#[test]
fn given_shorter_window_when_swept_then_reconfigured_retention_used() {
    // Given
    let temp = TempDir::new().unwrap();
    let config = file_config(&temp);
    let (logger, _console, _clock) = build_logger(config.clone(), utc(2026, 10, 19, 12, 0));
    let log_dir = temp.path().join("logs");
    std::fs::write(log_dir.join("logs_2026-10-10.log"), b"nine days").unwrap();

    // When
    logger.reconfigure(AppLoggerConfig {
        log_file_rotate_days: 7,
        ..config
    });
    logger.sweep_expired();

    // Then
    assert!(!log_dir.join("logs_2026-10-10.log").exists());
}

#[test]
fn given_log_dir_removed_when_swept_then_error_logged() {
    // Given
    let temp = TempDir::new().unwrap();
    let (logger, console, _clock) = build_logger(file_config(&temp), utc(2026, 10, 19, 12, 0));
    std::fs::remove_dir_all(temp.path().join("logs")).unwrap();

    // When
    logger.sweep_expired();

    // Then
    assert_that!(console.contents(), contains_substring("Error cleaning older logs"));
}

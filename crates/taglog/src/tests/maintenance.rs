use crate::tests::{SharedBuffer, build_logger, console_config, file_config, utc};
use crate::{AppLogger, LoggerError, MaintenanceSchedule, ManualClock};

use std::sync::Arc;
use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq};
use tempfile::TempDir;

fn fast_schedule() -> MaintenanceSchedule {
    MaintenanceSchedule {
        rotation_check: Duration::from_millis(20),
        retention_sweep: Duration::from_millis(20),
    }
}

async fn wait_for<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    condition()
}

#[test]
fn given_default_schedule_when_created_then_thirty_minutes_and_two_hours() {
    let schedule = MaintenanceSchedule::default();

    assert_that!(schedule.rotation_check, eq(Duration::from_secs(1800)));
    assert_that!(schedule.retention_sweep, eq(Duration::from_secs(7200)));
}

#[test]
fn given_no_runtime_when_spawning_maintenance_then_error() {
    // Given
    let (logger, _console, _clock) = build_logger(console_config(), utc(2026, 10, 19, 8, 0));

    // When
    let result = logger.spawn_maintenance();

    // Then
    assert!(matches!(result, Err(LoggerError::NoRuntime { .. })));
}

#[tokio::test]
async fn given_running_maintenance_when_date_changes_then_file_rotated() {
    // Given
    let temp = TempDir::new().unwrap();
    let console = SharedBuffer::default();
    let clock = Arc::new(ManualClock::new(utc(2026, 10, 19, 23, 50)));
    let logger = AppLogger::builder(file_config(&temp))
        .console_writer(console.clone())
        .clock(clock.clone())
        .schedule(fast_schedule())
        .build()
        .unwrap();
    logger.spawn_maintenance().unwrap();

    // When
    clock.set(utc(2026, 10, 20, 0, 5));
    let rotated = wait_for(|| {
        logger
            .current_log_file()
            .is_some_and(|path| path.ends_with("logs_2026-10-20.log"))
    })
    .await;

    // Then
    assert!(rotated);
    assert_that!(console.contents(), contains_substring("New log file set"));
    logger.shutdown().await.unwrap();
}

#[tokio::test]
async fn given_running_maintenance_when_old_file_present_then_swept() {
    // Given
    let temp = TempDir::new().unwrap();
    let console = SharedBuffer::default();
    let clock = Arc::new(ManualClock::new(utc(2026, 10, 19, 12, 0)));
    let logger = AppLogger::builder(file_config(&temp))
        .console_writer(console.clone())
        .clock(clock.clone())
        .schedule(fast_schedule())
        .build()
        .unwrap();
    let expired = temp.path().join("logs").join("logs_2026-01-01.log");
    std::fs::write(&expired, b"stale").unwrap();

    // When
    logger.spawn_maintenance().unwrap();
    let swept = wait_for(|| !expired.exists()).await;

    // Then
    assert!(swept);
    logger.shutdown().await.unwrap();
}

#[tokio::test]
async fn given_maintenance_when_shut_down_then_file_closed_and_console_still_works() {
    // Given
    let temp = TempDir::new().unwrap();
    let (logger, console, _clock) = build_logger(file_config(&temp), utc(2026, 10, 19, 8, 0));
    logger.spawn_maintenance().unwrap();
    let path = logger.current_log_file().unwrap();

    // When
    logger.shutdown().await.unwrap();
    let before = std::fs::read(&path).unwrap();
    logger.info("APP", &[], "after shutdown", &[]);

    // Then
    assert!(logger.current_log_file().is_none());
    assert_that!(std::fs::read(&path).unwrap(), eq(&before));
    assert_that!(console.contents(), contains_substring("after shutdown"));
}

#[tokio::test]
async fn given_shut_down_logger_when_spawning_maintenance_then_error() {
    // Given
    let (logger, _console, _clock) = build_logger(console_config(), utc(2026, 10, 19, 8, 0));
    logger.shutdown().await.unwrap();

    // When
    let result = logger.spawn_maintenance();

    // Then
    assert!(matches!(result, Err(LoggerError::ShutDown { .. })));
}

#[tokio::test]
async fn given_shut_down_logger_when_file_logging_reenabled_then_file_stays_closed() {
    // Given
    let temp = TempDir::new().unwrap();
    let config = file_config(&temp);
    let (logger, _console, _clock) = build_logger(config.clone(), utc(2026, 10, 19, 8, 0));
    logger.shutdown().await.unwrap();

    // When
    logger.reconfigure(config);

    // Then
    assert!(logger.current_log_file().is_none());
}

#[tokio::test]
async fn given_maintenance_running_when_spawned_twice_then_ok() {
    // Given
    let (logger, _console, _clock) = build_logger(console_config(), utc(2026, 10, 19, 8, 0));
    logger.spawn_maintenance().unwrap();

    // When
    let second = logger.spawn_maintenance();

    // Then
    assert!(second.is_ok());
    logger.shutdown().await.unwrap();
}


use crate::{FileRotationManager, ManualClock};

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

pub(crate) fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// Manager writing into a fresh temp directory, driven by a manual clock.
pub(crate) fn setup_manager(now: DateTime<Utc>) -> (TempDir, Arc<ManualClock>, FileRotationManager) {
    let temp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(now));
    let manager = FileRotationManager::open(temp.path().join("logs"), clock.clone()).unwrap();
    (temp, clock, manager)
}

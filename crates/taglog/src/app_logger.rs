use crate::child_logger::ChildLogger;
use crate::maintenance::{MaintenanceSchedule, MaintenanceTask};
use crate::sink::Sink;
use crate::snapshot::LoggerSnapshot;
use crate::{LoggerError, LoggerResult};

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard};

use taglog_config::{AppLoggerConfig, LIB_TAG, LogLevel, UnknownLogLevel};
use taglog_file::{Clock, FileRotationManager, Rotation, SystemClock};
use taglog_format::{Fields, Formatter, LogEntry, keys};

/// One logging call before it is turned into an entry.
pub(crate) struct Call<'a> {
    pub(crate) level: LogLevel,
    pub(crate) tag: &'a str,
    pub(crate) sub_tags: &'a [&'a str],
    pub(crate) message: &'a str,
    pub(crate) content: &'a [&'a str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    AllSinks,
    ConsoleOnly,
}

struct FileSink {
    sink: Sink,
    manager: FileRotationManager,
}

impl FileSink {
    fn open(log_dir: &Path, clock: Arc<dyn Clock>) -> LoggerResult<Self> {
        let manager = FileRotationManager::open(log_dir, clock)?;
        let sink = Sink::new(Formatter::file(), Box::new(manager.writer()));
        Ok(Self { sink, manager })
    }
}

pub(crate) struct LoggerInner {
    snapshot: RwLock<Arc<LoggerSnapshot>>,
    reconfigure_lock: Mutex<()>,
    clock: Arc<dyn Clock>,
    console: Sink,
    file: RwLock<Option<FileSink>>,
    schedule: MaintenanceSchedule,
    maintenance: Mutex<Option<MaintenanceTask>>,
    shut_down: AtomicBool,
}

/// Tag-aware logger writing to the console and a daily log file.
///
/// Cloning is cheap; all clones share the same sinks and configuration.
#[derive(Clone)]
pub struct AppLogger {
    pub(crate) inner: Arc<LoggerInner>,
}

pub struct AppLoggerBuilder {
    config: AppLoggerConfig,
    console: Option<Box<dyn Write + Send>>,
    clock: Option<Arc<dyn Clock>>,
    schedule: MaintenanceSchedule,
}

impl AppLoggerBuilder {
    /// Replace stdout as the console destination.
    pub fn console_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.console = Some(Box::new(writer));
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn schedule(mut self, schedule: MaintenanceSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Open the file sink (unless disabled) and apply the configuration.
    ///
    /// Failing to create the log directory or today's file is returned here;
    /// later file failures are only reported on the console.
    pub fn build(self) -> LoggerResult<AppLogger> {
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>);
        let console_writer = self
            .console
            .unwrap_or_else(|| Box::new(std::io::stdout()) as Box<dyn Write + Send>);

        let file = if self.config.file_log_disabled {
            None
        } else {
            Some(FileSink::open(&self.config.log_dir, clock.clone())?)
        };

        let initial = AppLoggerConfig {
            log_level: LogLevel::Trace.as_str().to_string(),
            ..AppLoggerConfig::default()
        };

        let inner = Arc::new(LoggerInner {
            snapshot: RwLock::new(Arc::new(LoggerSnapshot::new(initial, LogLevel::Trace))),
            reconfigure_lock: Mutex::new(()),
            clock,
            console: Sink::new(Formatter::console(), console_writer),
            file: RwLock::new(file),
            schedule: self.schedule,
            maintenance: Mutex::new(None),
            shut_down: AtomicBool::new(false),
        });

        inner.reconfigure(self.config);

        Ok(AppLogger { inner })
    }
}

impl AppLogger {
    pub fn new(config: AppLoggerConfig) -> LoggerResult<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: AppLoggerConfig) -> AppLoggerBuilder {
        AppLoggerBuilder {
            config,
            console: None,
            clock: None,
            schedule: MaintenanceSchedule::default(),
        }
    }

    pub fn log(
        &self,
        level: LogLevel,
        tag: &str,
        sub_tags: &[&str],
        message: &str,
        content: &[&str],
    ) {
        self.inner.dispatch(
            Call {
                level,
                tag,
                sub_tags,
                message,
                content,
            },
            Fields::new(),
        );
    }

    /// Like [`AppLogger::log`] with extra fields attached to the entry.
    ///
    /// Fields named after message options override them for this call only;
    /// `tag`, `subTags` and `content` always come from the arguments.
    pub fn log_with_fields(
        &self,
        level: LogLevel,
        tag: &str,
        sub_tags: &[&str],
        message: &str,
        content: &[&str],
        fields: Fields,
    ) {
        self.inner.dispatch(
            Call {
                level,
                tag,
                sub_tags,
                message,
                content,
            },
            fields,
        );
    }

    pub fn trace(&self, tag: &str, sub_tags: &[&str], message: &str, content: &[&str]) {
        self.log(LogLevel::Trace, tag, sub_tags, message, content);
    }

    pub fn debug(&self, tag: &str, sub_tags: &[&str], message: &str, content: &[&str]) {
        self.log(LogLevel::Debug, tag, sub_tags, message, content);
    }

    pub fn info(&self, tag: &str, sub_tags: &[&str], message: &str, content: &[&str]) {
        self.log(LogLevel::Info, tag, sub_tags, message, content);
    }

    pub fn warn(&self, tag: &str, sub_tags: &[&str], message: &str, content: &[&str]) {
        self.log(LogLevel::Warn, tag, sub_tags, message, content);
    }

    pub fn error(&self, tag: &str, sub_tags: &[&str], message: &str, content: &[&str]) {
        self.log(LogLevel::Error, tag, sub_tags, message, content);
    }

    /// Logged at panic severity; the caller keeps running.
    pub fn panic(&self, tag: &str, sub_tags: &[&str], message: &str, content: &[&str]) {
        self.log(LogLevel::Panic, tag, sub_tags, message, content);
    }

    /// Logged at fatal severity; the process is not terminated.
    pub fn fatal(&self, tag: &str, sub_tags: &[&str], message: &str, content: &[&str]) {
        self.log(LogLevel::Fatal, tag, sub_tags, message, content);
    }

    /// Replace the active configuration.
    ///
    /// Disabled tags, level, file switch, message options and render
    /// settings are replaced as a whole. The retention window only changes
    /// when the new value is positive. An unknown level falls back to trace
    /// with a warning, and the applied configuration is logged at info.
    pub fn reconfigure(&self, config: AppLoggerConfig) {
        self.inner.reconfigure(config);
    }

    /// The configuration currently applied, with the level normalized.
    pub fn config(&self) -> AppLoggerConfig {
        self.inner.snapshot().config.clone()
    }

    pub fn level(&self) -> LogLevel {
        self.inner.snapshot().level
    }

    pub fn is_tag_disabled(&self, tag: &str) -> bool {
        self.inner.snapshot().is_tag_disabled(tag)
    }

    /// Logger bound to `tag`.
    pub fn child<S: Into<String>>(&self, tag: S) -> ChildLogger {
        ChildLogger::new(tag.into(), Arc::downgrade(&self.inner))
    }

    /// Path of the open log file, if file logging is active.
    pub fn current_log_file(&self) -> Option<PathBuf> {
        self.inner
            .read_file()
            .as_ref()
            .filter(|file| file.manager.is_open())
            .map(|file| file.manager.current_path())
    }

    /// Run one rotation check now.
    pub fn check_rotation(&self) {
        self.inner.run_rotation_check();
    }

    /// Run one retention sweep now.
    pub fn sweep_expired(&self) {
        self.inner.run_retention_sweep();
    }

    /// Start the background rotation check and retention sweep.
    ///
    /// Must be called from within a tokio runtime. Calling it again while the
    /// task is running does nothing.
    pub fn spawn_maintenance(&self) -> LoggerResult<()> {
        if self.inner.shut_down.load(Ordering::Acquire) {
            return Err(LoggerError::shut_down());
        }

        let mut slot = self.inner.lock_maintenance();
        if slot.as_ref().is_some_and(|task| !task.is_finished()) {
            return Ok(());
        }

        *slot = Some(MaintenanceTask::spawn(
            Arc::downgrade(&self.inner),
            self.inner.schedule,
        )?);
        Ok(())
    }

    pub fn flush(&self) {
        self.inner.console.flush();
        if let Some(file) = self.inner.read_file().as_ref() {
            file.sink.flush();
        }
    }

    /// Stop maintenance, then flush and close the log file.
    ///
    /// Console logging keeps working afterwards; file writes are dropped.
    pub async fn shutdown(&self) -> LoggerResult<()> {
        self.inner.shut_down.store(true, Ordering::Release);

        let task = self.inner.lock_maintenance().take();
        if let Some(task) = task {
            task.stop().await?;
        }

        self.inner.console.flush();

        let file = self
            .inner
            .file
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(file) = file {
            file.sink.flush();
            file.manager.close()?;
        }

        Ok(())
    }
}

impl LoggerInner {
    pub(crate) fn snapshot(&self) -> Arc<LoggerSnapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn read_file(&self) -> RwLockReadGuard<'_, Option<FileSink>> {
        self.file.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_maintenance(&self) -> MutexGuard<'_, Option<MaintenanceTask>> {
        self.maintenance
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn dispatch(&self, call: Call<'_>, fields: Fields) {
        self.route(call, fields, Route::AllSinks);
    }

    fn route(&self, call: Call<'_>, fields: Fields, route: Route) {
        let snapshot = self.snapshot();
        if snapshot.is_tag_disabled(call.tag) {
            return;
        }

        let file_guard = (route == Route::AllSinks && !snapshot.config.file_log_disabled)
            .then(|| self.read_file());
        let file = file_guard.as_ref().and_then(|guard| guard.as_ref());

        let to_console = self.console.enabled(call.level);
        let to_file = file.is_some_and(|file| file.sink.enabled(call.level));
        if !to_console && !to_file {
            return;
        }

        let entry = self.entry(&snapshot, &call, fields);
        if to_console {
            self.console.emit(&entry, &snapshot.settings);
        }
        if let Some(file) = file.filter(|_| to_file) {
            file.sink.emit(&entry, &snapshot.settings);
        }
    }

    fn entry(&self, snapshot: &LoggerSnapshot, call: &Call<'_>, fields: Fields) -> LogEntry {
        let mut all = snapshot.option_fields.clone();
        all.extend(fields);
        all.insert(keys::TAG.to_string(), call.tag.into());
        all.insert(keys::SUB_TAGS.to_string(), call.sub_tags.into());
        all.insert(keys::CONTENT.to_string(), call.content.into());

        LogEntry {
            timestamp: self.clock.now(),
            level: call.level,
            message: call.message.to_string(),
            fields: all,
        }
    }

    /// Report a problem with the file sink without writing to it.
    fn console_error(&self, message: &str, content: &[&str]) {
        self.route(
            Call {
                level: LogLevel::Error,
                tag: LIB_TAG,
                sub_tags: &[],
                message,
                content,
            },
            Fields::new(),
            Route::ConsoleOnly,
        );
    }

    fn lib_log(&self, level: LogLevel, message: &str, content: &[&str]) {
        self.dispatch(
            Call {
                level,
                tag: LIB_TAG,
                sub_tags: &[],
                message,
                content,
            },
            Fields::new(),
        );
    }

    pub(crate) fn reconfigure(&self, mut config: AppLoggerConfig) {
        let _reconfiguring = self
            .reconfigure_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let current = self.snapshot();
        config.log_file_rotate_days =
            config.retention_days_or(current.config.log_file_rotate_days);

        let (level, unknown_level) = match config.log_level.parse::<LogLevel>() {
            Ok(level) => (level, None),
            Err(UnknownLogLevel(raw)) => (LogLevel::Trace, Some(raw)),
        };
        config.log_level = level.as_str().to_string();

        let invalid_options = config.message_options.validate().err();
        if invalid_options.is_some() {
            config.message_options = current.config.message_options.clone();
        }

        let open_error = if config.file_log_disabled {
            None
        } else {
            self.ensure_file_sink(&config.log_dir).err()
        };

        let snapshot = Arc::new(LoggerSnapshot::new(config.clone(), level));
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = snapshot;

        self.console.set_level(level);
        if let Some(file) = self.read_file().as_ref() {
            file.sink.set_level(level);
        }

        if let Some(e) = open_error {
            self.console_error("Error opening log file", &[&e.to_string()]);
        }

        if let Some(raw) = unknown_level {
            self.lib_log(
                LogLevel::Warn,
                "Unknown log level on log config update, trace level set",
                &[&raw],
            );
        }

        if let Some(e) = invalid_options {
            self.lib_log(
                LogLevel::Warn,
                "Invalid message options on log config update, previous options kept",
                &[&e.to_string()],
            );
        }

        let serialized = serde_json::to_string(&config).unwrap_or_else(|_| String::from("{}"));
        self.lib_log(LogLevel::Info, "New logger config set", &[&serialized]);
    }

    /// Open the file sink if file logging was off until now.
    fn ensure_file_sink(&self, log_dir: &Path) -> LoggerResult<()> {
        if self.shut_down.load(Ordering::Acquire) || self.read_file().is_some() {
            return Ok(());
        }

        let mut slot = self.file.write().unwrap_or_else(PoisonError::into_inner);
        if slot.is_none() {
            *slot = Some(FileSink::open(log_dir, self.clock.clone())?);
        }
        Ok(())
    }

    pub(crate) fn run_rotation_check(&self) {
        let result = match self.read_file().as_ref() {
            Some(file) => file.manager.check_rotation(),
            None => return,
        };

        match result {
            Ok(Some(rotation)) => self.report_rotation(rotation),
            Ok(None) => {}
            Err(e) => self.console_error("Error rotating log file", &[&e.to_string()]),
        }
    }

    pub(crate) fn report_rotation(&self, rotation: Rotation) {
        self.lib_log(LogLevel::Info, "New log file set", &[&rotation.current]);
        if let Some(e) = rotation.close_error {
            self.console_error("Error closing previous log file", &[&e.to_string()]);
        }
    }

    pub(crate) fn run_retention_sweep(&self) {
        let retention_days = self.snapshot().config.log_file_rotate_days;
        let result = match self.read_file().as_ref() {
            Some(file) => file.manager.sweep(retention_days),
            None => return,
        };

        match result {
            Ok(report) => {
                for name in &report.removed {
                    self.lib_log(LogLevel::Trace, "Log file removed", &[name.as_str()]);
                }
                for failure in &report.failed {
                    self.lib_log(
                        LogLevel::Error,
                        "Error removing log file",
                        &[failure.file_name.as_str(), &failure.error.to_string()],
                    );
                }
                for error in &report.unreadable {
                    self.lib_log(
                        LogLevel::Error,
                        "Error reading log directory entry",
                        &[&error.to_string()],
                    );
                }
            }
            Err(e) => self.lib_log(
                LogLevel::Error,
                "Error cleaning older logs",
                &[&e.to_string()],
            ),
        }
    }
}

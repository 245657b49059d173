use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};

use log::{LevelFilter, Record};
use taglog_config::LogLevel;
use taglog_format::{Formatter, LogEntry, RenderSettings};

const TARGET: &str = "taglog";

/// One output: a formatter, a minimum level and the fern dispatch that writes
/// the rendered bytes.
pub(crate) struct Sink {
    formatter: Formatter,
    threshold: AtomicU8,
    output: Box<dyn log::Log>,
}

impl Sink {
    pub(crate) fn new(formatter: Formatter, writer: Box<dyn Write + Send>) -> Self {
        // Lines arrive fully rendered, terminator included.
        let (_, output) = fern::Dispatch::new()
            .level(LevelFilter::Trace)
            .chain(fern::Output::writer(writer, ""))
            .into_log();

        Self {
            formatter,
            threshold: AtomicU8::new(LogLevel::Trace.as_u8()),
            output,
        }
    }

    pub(crate) fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.threshold.load(Ordering::Acquire))
    }

    pub(crate) fn set_level(&self, level: LogLevel) {
        self.threshold.store(level.as_u8(), Ordering::Release);
    }

    pub(crate) fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    pub(crate) fn emit(&self, entry: &LogEntry, settings: &RenderSettings) {
        if !self.enabled(entry.level) {
            return;
        }

        let rendered = self.formatter.render(entry, settings);
        let line = String::from_utf8_lossy(&rendered);

        self.output.log(
            &Record::builder()
                .args(format_args!("{line}"))
                .level(entry.level.to_log_level())
                .target(TARGET)
                .build(),
        );
    }

    pub(crate) fn flush(&self) {
        self.output.flush();
    }
}

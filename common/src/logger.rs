use std::fmt;
use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}] {}", timestamp, prefix, level, message),
            None => format!("[{}][{}] {}", timestamp, level, message),
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        let line = self.format_line(level, message);
        match level {
            LogLevel::Info => println!("{}", line),
            LogLevel::Error => eprintln!("{}", line),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(level: LogLevel, message: &str) {
    // Messages logged before init_logger (unit tests) are dropped.
    if let Some(logger) = LOGGER.get() {
        logger.log(level, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Error, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_contains_prefix_and_level() {
        let logger = Logger::new(Some("Client".to_string()));
        let line = logger.format_line(LogLevel::Error, "boom");
        assert!(line.contains("[Client][ERROR] boom"));
    }

    #[test]
    fn test_line_without_prefix() {
        let logger = Logger::new(None);
        let line = logger.format_line(LogLevel::Info, "hello");
        assert!(line.ends_with("[INFO] hello"));
        assert!(line.starts_with('['));
    }
}

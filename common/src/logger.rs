use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    file: Mutex<File>,
}

impl Logger {
    fn new(prefix: Option<String>, file: File) -> Self {
        Self {
            prefix,
            file: Mutex::new(file),
        }
    }

    fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        let line = self.format_line(message);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", line);
        }
    }
}

fn open_log_file(path: &str) -> Result<File, String> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Failed to open log file {}: {}", path, e))
}

/// Appends to `path`. The terminal belongs to the board, so logs go to a file.
pub fn init_file_logger(prefix: Option<String>, path: &str) -> Result<(), String> {
    let file = open_log_file(path)?;
    LOGGER.get_or_init(|| Logger::new(prefix, file));
    Ok(())
}

/// Messages logged before initialization are dropped.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_log_path() -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("snake_logger_test_{}.log", rand::random::<u32>()));
        path.to_str().unwrap().to_string()
    }

    fn create_logger(prefix: Option<&str>, path: &str) -> Logger {
        Logger::new(prefix.map(str::to_string), open_log_file(path).unwrap())
    }

    #[test]
    fn test_format_line_includes_prefix() {
        let path = get_temp_log_path();
        let logger = create_logger(Some("Client"), &path);

        let line = logger.format_line("hello");

        assert!(line.ends_with("[Client] hello"));
        assert!(line.starts_with('['));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_format_line_without_prefix() {
        let path = get_temp_log_path();
        let logger = create_logger(None, &path);

        let line = logger.format_line("hello");

        assert!(line.ends_with("] hello"));
        assert!(!line.contains("]["));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_log_appends_lines() {
        let path = get_temp_log_path();
        std::fs::write(&path, "earlier run\n").unwrap();
        let logger = create_logger(None, &path);

        logger.log("first");
        logger.log("second");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "earlier run");
        assert!(lines[1].ends_with("first"));
        assert!(lines[2].ends_with("second"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_open_log_file_reports_bad_path() {
        let error = open_log_file("/nonexistent_dir_for_snake_logger/x.log").unwrap_err();

        assert!(error.contains("Failed to open log file"));
    }
}

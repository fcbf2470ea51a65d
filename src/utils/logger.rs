//! Logger utility for application-wide logging
//!
//! A custom logger that bridges the standard log crate to a log file while
//! mirroring messages to the console, so batch runs leave an auditable
//! record next to their outputs.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Maximum level mirrored to the console and file
    max_level: Level,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    /// * `log_file` - Path to the log file
    /// * `verbose` - Whether debug messages are recorded
    ///
    /// # Returns
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str, verbose: bool) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            max_level: if verbose { Level::Debug } else { Level::Info },
        })
    }

    /// Writes a line to the log file
    ///
    /// # Arguments
    /// * `message` - The message to log
    pub fn log_line(&self, message: &str) -> io::Result<()> {
        if let Some(file) = &mut *self.file.lock().unwrap() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Install a logger as the global handler for the log crate
    ///
    /// # Arguments
    /// * `log_file` - Path to the log file
    /// * `verbose` - Whether debug messages are recorded
    pub fn init_global_logger(log_file: &str, verbose: bool) -> io::Result<()> {
        let global_logger = Logger::new(log_file, verbose)?;
        let max_level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        // Ignore the SetLoggerError; this is only called once at startup
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(max_level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log_line(&message);
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // log_line already flushes after every write
    }
}

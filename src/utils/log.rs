use crate::config::ProcessorConfig;
use chrono::Local;
use colored::Colorize;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "fourier_plotter.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl LogLevel {
    fn tag(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Formats a single log line with a local timestamp.
pub fn format_entry(level: LogLevel, message: &str) -> String {
    format!(
        "[{}] {:<5} {}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        level.tag(),
        message
    )
}

/// Logs a message to a file with timestamp
///
/// # Arguments
///
/// * `filename` - The name of the log file (created under `logs/`)
/// * `message` - The message to log
pub fn log_to_file(filename: &str, message: &str) -> io::Result<()> {
    if !Path::new(LOG_DIR).exists() {
        std::fs::create_dir_all(LOG_DIR)?;
    }

    let path = Path::new(LOG_DIR).join(filename);
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    writeln!(file, "{}", message)?;
    file.flush()?;

    Ok(())
}

/// Console + optional file logger driven by `ProcessorConfig`.
#[derive(Debug, Clone)]
pub struct Logger {
    verbose: bool,
    file: Option<String>,
}

impl Logger {
    pub fn new(config: &ProcessorConfig) -> Self {
        Self {
            verbose: config.verbose,
            file: config
                .enable_debug_logging
                .then(|| LOG_FILE.to_string()),
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if level == LogLevel::Debug && !self.verbose {
            return;
        }

        let entry = format_entry(level, message);
        match level {
            LogLevel::Debug => println!("{}", entry.dimmed()),
            LogLevel::Info => println!("{}", entry.green()),
            LogLevel::Error => eprintln!("{}", entry.red()),
        }

        if let Some(file) = &self.file {
            // never let a broken log file take the UI down
            if let Err(e) = log_to_file(file, &entry) {
                eprintln!("{}", format!("Failed to write log file: {}", e).red());
            }
        }
    }
}

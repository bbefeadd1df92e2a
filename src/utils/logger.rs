//! Logger utility for application-wide logging
//!
//! Diagnostics go through the `log` facade, backed by `env_logger`. The
//! `Logger` type is a separate operation journal: commands append every
//! geometry they compute so a batch run can be audited afterwards.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use log::LevelFilter;

use crate::geometry::Rectangle;

/// Environment variable that overrides the console log filter
pub const LOG_ENV_VAR: &str = "WALLCROP_LOG";

/// Append-only operation journal
pub struct Logger {
    /// File handle for journal output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a new journal, appending to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the journal file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be opened
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// A journal that discards everything
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
        }
    }

    /// Appends a line to the journal
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock().map_err(|_| io::Error::new(io::ErrorKind::Other, "journal lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Records one computed crop
    ///
    /// # Arguments
    ///
    /// * `image` - Image the crop belongs to
    /// * `label` - Ratio label, e.g. `1440x2560`
    /// * `crop` - The computed rectangle
    pub fn record_crop(&self, image: &str, label: &str, crop: &Rectangle) -> io::Result<()> {
        self.log(&format!("{}\t{}\t{}", image, label, crop.to_geometry()))
    }

    /// Initialize the global `log` backend
    ///
    /// Console output defaults to `info` (`debug` when verbose) and can be
    /// overridden with the `WALLCROP_LOG` environment variable.
    pub fn init_global_logger(verbose: bool) {
        let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

        let result = env_logger::Builder::new()
            .filter_level(level)
            .parse_env(LOG_ENV_VAR)
            .format_timestamp(None)
            .try_init();

        if result.is_err() {
            // Logger was already set, e.g. by a test harness
            eprintln!("Warning: Global logger was already initialized");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn journal_appends_geometry_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.log");

        let logger = Logger::new(&path).unwrap();
        let crop = Rectangle::new(300, 0, 700, 500).unwrap();
        logger.record_crop("wall.png", "1440x2560", &crop).unwrap();
        drop(logger);

        let logger = Logger::new(&path).unwrap();
        logger.log("second run").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "wall.png\t1440x2560\t400x500+300+0\nsecond run\n");
    }

    #[test]
    fn disabled_journal_accepts_writes() {
        assert!(Logger::disabled().log("ignored").is_ok());
    }
}

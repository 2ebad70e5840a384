//! Console and optional file logging.
//!
//! Records go to stderr through `env_logger`. When a log file is configured,
//! every formatted record is also appended to it (UTF-8, plain text, parent
//! directories created). `RUST_LOG` takes precedence over the level chosen
//! on the command line.

use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Cannot open log file {path}: {source}")]
    LogFile { path: PathBuf, source: io::Error },
    #[error("Logger already installed: {0}")]
    Install(#[from] log::SetLoggerError),
}

/// Writes each record to stderr and to the log file.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

/// Open `path` for appending, creating it and its parent directories.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open = || -> io::Result<File> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    };
    open().map_err(|source| LoggingError::LogFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Logger builder for `level`, teeing into `log_file` when given.
pub fn builder(level: LevelFilter, log_file: Option<&Path>) -> Result<Builder, LoggingError> {
    let mut builder = Builder::new();
    builder.filter_level(level);
    if let Some(path) = log_file {
        let file = open_log_file(path)?;
        builder
            .target(Target::Pipe(Box::new(Tee { file })))
            .write_style(WriteStyle::Never);
    }
    Ok(builder)
}

/// Install the global logger.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<(), LoggingError> {
    builder(level, log_file)?.parse_default_env().try_init()?;
    Ok(())
}

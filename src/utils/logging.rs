// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/logging.rs
// Version: 1.0.0
//
// This file initializes log4rs for the quad-bench binary, either from a YAML
// configuration file or with a console appender built in code.
//
// Tree Location:
// - src/utils/logging.rs (logging setup)
// - Depends on: log, log4rs, thiserror

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONSOLE_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:5})} {t} - {m}{n}";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logging configuration file {path:?} does not exist")]
    FileNotFound { path: PathBuf },

    #[error("Failed to load logging configuration {path:?}: {message}")]
    FileConfig { path: PathBuf, message: String },

    #[error("Invalid logging configuration: {message}")]
    Config { message: String },

    #[error("A logger is already installed")]
    AlreadyInitialized {
        #[from]
        source: log::SetLoggerError,
    },
}

/// Console appender config used when no YAML file is given
pub fn console_config(level: LevelFilter) -> Result<Config, LoggingError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|e| LoggingError::Config {
            message: e.to_string(),
        })
}

/// Install the global logger.
pub fn init_logging(config_file: Option<&Path>, level: LevelFilter) -> Result<(), LoggingError> {
    match config_file {
        Some(path) => {
            if !path.exists() {
                return Err(LoggingError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            log4rs::init_file(path, Default::default()).map_err(|e| LoggingError::FileConfig {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
        None => {
            log4rs::init_config(console_config(level)?)?;
            Ok(())
        }
    }
}


// Changelog:
// - v1.0.0 (2026-10-18): Initial logging setup.
//   - Purpose: log4rs initialization for the binary; YAML file when provided
//     (see log4rs_sample.yml), console appender otherwise.

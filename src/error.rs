use std::io;

use thiserror::Error;

/// Rejected command-line input. The schedulers never see these values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("Initial head must be an integer, got '{0}'")]
    InvalidStart(String),

    #[error("Initial head must be between 0 and {max}, got {value}")]
    StartOutOfRange { value: i64, max: usize },

    #[error("Direction must be LEFT or RIGHT, got '{0}'")]
    InvalidDirection(String),

    #[error("Unknown scheduling algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("Disk must have at least one cylinder")]
    EmptyDisk,

    #[error("Disk has {cylinders} cylinders, at most {max} are supported")]
    DiskTooLarge { cylinders: usize, max: usize },

    #[error("Invalid value for {name}: '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Failures while loading the binary request file.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("could not read request file: {0}")]
    Io(#[from] io::Error),

    #[error("could not read all requests: expected {expected}, read {read}")]
    ShortRead { expected: usize, read: usize },

    #[error("request {index} is {value}, outside cylinders 0..{cylinders}")]
    RequestOutOfRange {
        index: usize,
        value: i32,
        cylinders: usize,
    },
}

//! datagen-config: job configuration for synthetic data generation
//!
//! This library parses the JSON job list consumed by a data generator and
//! validates it, handing the resulting jobs to a pluggable sink.

pub mod config;
pub mod sink;

// Re-export commonly used items
pub use config::{load_config, parse_config, ConfigError, ErrorKind, JobDescriptor, Violation};
pub use sink::{CollectingSink, JobSink, LoggingSink, SinkError};

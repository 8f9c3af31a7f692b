//! Config module - parses and validates data-generation job lists

pub mod error;
pub mod job;
pub mod parser;

pub use error::{ConfigError, ErrorKind, Violation};
pub use job::JobDescriptor;
pub use parser::{load_config, parse_config};

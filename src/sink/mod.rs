//! Sink abstraction for validated jobs
//!
//! The data generator itself lives behind [`JobSink`]; this crate only ships
//! sinks that log or collect jobs.

pub mod collecting;
pub mod logging;

pub use collecting::CollectingSink;
pub use logging::LoggingSink;

use crate::config::JobDescriptor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Job rejected by sink: {0}")]
    Rejected(String),
}

/// Consumer of validated jobs
pub trait JobSink {
    /// Hand a single job to the sink
    fn submit(&mut self, job: &JobDescriptor) -> Result<(), SinkError>;

    /// Submit jobs in order, stopping at the first failure.
    ///
    /// Returns the number of jobs submitted.
    fn submit_all(&mut self, jobs: &[JobDescriptor]) -> Result<usize, SinkError> {
        for job in jobs {
            self.submit(job)?;
        }
        Ok(jobs.len())
    }
}

//! Logging job sink.
//!
//! This sink logs jobs instead of generating documents. Useful as a dry run
//! to check what a configuration would produce.

use super::{JobSink, SinkError};
use crate::config::JobDescriptor;
use log::info;

/// Sink that logs each job and tallies the documents it would generate.
#[derive(Clone, Debug, Default)]
pub struct LoggingSink {
    jobs: usize,
    documents: u64,
}

impl LoggingSink {
    /// Create a new logging sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of jobs seen so far.
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Total documents across all jobs seen so far.
    pub fn documents(&self) -> u64 {
        self.documents
    }
}

impl JobSink for LoggingSink {
    fn submit(&mut self, job: &JobDescriptor) -> Result<(), SinkError> {
        info!("[DRY RUN] {} <- {} documents", job.namespace(), job.count);
        self.jobs += 1;
        self.documents = self.documents.saturating_add(job.count);
        Ok(())
    }
}

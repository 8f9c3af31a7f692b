//! Collecting job sink, keeps a copy of every job it receives.

use super::{JobSink, SinkError};
use crate::config::JobDescriptor;

#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    pub jobs: Vec<JobDescriptor>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JobSink for CollectingSink {
    fn submit(&mut self, job: &JobDescriptor) -> Result<(), SinkError> {
        self.jobs.push(job.clone());
        Ok(())
    }
}

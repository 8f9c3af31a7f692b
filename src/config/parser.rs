//! Configuration parser and validator
//!
//! Turns the JSON job list into validated [`JobDescriptor`]s. A document is
//! either accepted whole or rejected with every problem it contains.

use super::error::{ConfigError, Violation};
use super::job::{JobDescriptor, RawJob};
use log::{debug, info, warn};
use std::path::Path;

/// Parse and validate a configuration document.
///
/// With `ignore_missing_db` set, entries may omit `database`; the caller is
/// then expected to supply it.
pub fn parse_config(input: &[u8], ignore_missing_db: bool) -> Result<Vec<JobDescriptor>, ConfigError> {
    let raw: Vec<RawJob> =
        serde_json::from_slice(input).map_err(|e| ConfigError::syntax(input, &e))?;

    let violations: Vec<Violation> = raw
        .iter()
        .enumerate()
        .flat_map(|(index, job)| check_job(index, job, ignore_missing_db))
        .collect();

    if !violations.is_empty() {
        return Err(ConfigError::Invalid(violations));
    }

    Ok(raw.into_iter().map(RawJob::into_descriptor).collect())
}

/// Read a configuration file and parse it
pub fn load_config<P: AsRef<Path>>(path: P, ignore_missing_db: bool) -> Result<Vec<JobDescriptor>, ConfigError> {
    let path_ref = path.as_ref();
    info!("Loading configuration from: {}", path_ref.display());

    let content = std::fs::read(path_ref)?;
    debug!("  - Read {} bytes", content.len());

    match parse_config(&content, ignore_missing_db) {
        Ok(jobs) => {
            info!("✓ Config validation passed");
            debug!("  - Collections: {}", jobs.len());
            debug!("  - Documents: {}", jobs.iter().map(|j| j.count).sum::<u64>());
            Ok(jobs)
        }
        Err(e) => {
            warn!("Rejected configuration {}: {} problem(s)", path_ref.display(), e.violations().len().max(1));
            Err(e)
        }
    }
}

/// Rules for a single entry; name check first, then count
fn check_job(index: usize, job: &RawJob, ignore_missing_db: bool) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut missing = Vec::new();
    if job.collection.is_empty() {
        missing.push("collection");
    }
    if !ignore_missing_db && job.database.is_empty() {
        missing.push("database");
    }
    if !missing.is_empty() {
        violations.push(Violation::EmptyName { index, missing });
    }

    if job.count <= 0 {
        violations.push(Violation::NonPositiveCount {
            index,
            collection: job.collection.clone(),
            count: job.count,
        });
    }

    violations
}

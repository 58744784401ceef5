use std::path::PathBuf;

use crate::domain::AppError;

/// Resource request attached to a job submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobResources {
    /// Number of scheduler tasks to request.
    pub ntasks: u32,
    /// Wall-time request in hours.
    pub hours: u32,
}

/// Handle for a queued job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    /// Job identifier as known to the scheduler.
    pub job_id: String,
    /// Batch script backing the submission.
    pub script_path: PathBuf,
}

/// Boundary to the batch scheduling system.
pub trait JobScheduler {
    /// Queue `command` under `job_name` with the given resource request.
    fn submit(
        &self,
        job_name: &str,
        command: &str,
        resources: &JobResources,
    ) -> Result<JobHandle, AppError>;
}

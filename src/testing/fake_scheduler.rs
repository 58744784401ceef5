use std::cell::RefCell;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::{JobHandle, JobResources, JobScheduler};

/// A submission captured by [`RecordingScheduler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedJob {
    pub job_name: String,
    pub command: String,
    pub ntasks: u32,
    pub hours: u32,
}

/// Fake scheduler recording every submission, optionally rejecting some.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    submissions: RefCell<Vec<SubmittedJob>>,
    rejected: Vec<usize>,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the n-th submission (0-based) instead of accepting it.
    pub fn rejecting_nth(mut self, n: usize) -> Self {
        self.rejected.push(n);
        self
    }

    /// Every submission attempted so far, accepted or rejected.
    pub fn submissions(&self) -> Vec<SubmittedJob> {
        self.submissions.borrow().clone()
    }
}

impl JobScheduler for RecordingScheduler {
    fn submit(
        &self,
        job_name: &str,
        command: &str,
        resources: &JobResources,
    ) -> Result<JobHandle, AppError> {
        let index = self.submissions.borrow().len();
        self.submissions.borrow_mut().push(SubmittedJob {
            job_name: job_name.to_string(),
            command: command.to_string(),
            ntasks: resources.ntasks,
            hours: resources.hours,
        });

        if self.rejected.contains(&index) {
            return Err(AppError::JobSubmission {
                job: job_name.to_string(),
                details: "rejected by fake scheduler".to_string(),
            });
        }

        Ok(JobHandle {
            job_id: job_name.to_string(),
            script_path: PathBuf::from(format!("{job_name}run.j")),
        })
    }
}

use std::path::PathBuf;

use crate::ports::JobHandle;

pub mod bias_correction;
pub mod disaggregation;
pub mod fill_final;

/// Options shared by the scheduled job-generation commands.
#[derive(Debug, Clone)]
pub struct DispatchOptions {
    /// First forecast year of the work grid.
    pub fcst_start_year: i32,
    /// Last forecast year of the work grid, inclusive.
    pub fcst_end_year: i32,
    /// Abbreviation of the initialization month, as used in directory names.
    pub month_abbr: String,
    /// Integer number of the initialization month.
    pub month_num: u32,
    /// Path to the forecast configuration file.
    pub config_file: PathBuf,
    /// Base name for generated batch jobs.
    pub job_name: String,
    /// Number of scheduler tasks per job.
    pub ntasks: u32,
    /// Wall-time request in hours.
    pub hours: u32,
    /// Working directory of the forecast project.
    pub work_dir: PathBuf,
    /// NMME model token.
    pub model: String,
}

/// Options for the final-month fill command.
#[derive(Debug, Clone)]
pub struct FillOptions {
    /// Forecast year whose final tree is filled.
    pub year: i32,
    /// Abbreviation of the initialization month.
    pub month_abbr: String,
    /// Integer number of the initialization month.
    pub month_num: u32,
    /// Path to the forecast configuration file.
    pub config_file: PathBuf,
    /// Working directory of the forecast project.
    pub work_dir: PathBuf,
}

/// Outcome of one scheduled job-generation run.
///
/// Submission failures do not abort the run; they are collected here so the
/// caller can report each one.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub submitted: Vec<JobHandle>,
    pub failures: Vec<SubmissionFailure>,
}

/// A work unit whose submission was rejected by the scheduler.
#[derive(Debug)]
pub struct SubmissionFailure {
    pub year: i32,
    pub details: String,
}

/// Outcome of the final-month fill sweep.
#[derive(Debug, Default)]
pub struct CopyReport {
    /// Number of member files copied forward.
    pub copies: usize,
}

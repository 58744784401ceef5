use std::fs;
use std::path::PathBuf;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;
use crate::ports::{JobHandle, JobResources, JobScheduler};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const JOB_TEMPLATE: &str = "job_script.j2";

/// Scheduler adapter that queues work by materializing each submission as a
/// batch script in the working directory.
///
/// The script carries the resource directives and the task command; picking
/// it up is the batch system's concern.
#[derive(Debug, Clone)]
pub struct BatchScriptScheduler {
    work_dir: PathBuf,
    log_dir: PathBuf,
}

impl BatchScriptScheduler {
    pub fn new(work_dir: PathBuf, log_dir: PathBuf) -> Self {
        Self { work_dir, log_dir }
    }

    fn render(
        &self,
        job_name: &str,
        command: &str,
        resources: &JobResources,
    ) -> Result<String, AppError> {
        let template = TEMPLATE_DIR
            .get_file(JOB_TEMPLATE)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| {
                AppError::config_error(format!("Missing embedded template '{}'", JOB_TEMPLATE))
            })?;

        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        env.render_str(
            template,
            context! {
                job_name,
                ntasks => resources.ntasks,
                hours => resources.hours,
                work_dir => self.work_dir.display().to_string(),
                log_dir => self.log_dir.display().to_string(),
                command,
            },
        )
        .map_err(|e| AppError::JobSubmission { job: job_name.to_string(), details: e.to_string() })
    }
}

impl JobScheduler for BatchScriptScheduler {
    fn submit(
        &self,
        job_name: &str,
        command: &str,
        resources: &JobResources,
    ) -> Result<JobHandle, AppError> {
        let script_path = self.work_dir.join(format!("{job_name}run.j"));
        let rendered = self.render(job_name, command, resources)?;

        fs::write(&script_path, rendered).map_err(|e| AppError::JobSubmission {
            job: job_name.to_string(),
            details: e.to_string(),
        })?;

        Ok(JobHandle { job_id: job_name.to_string(), script_path })
    }
}

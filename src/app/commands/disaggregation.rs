use std::fs;

use crate::app::commands::{DispatchOptions, DispatchReport, SubmissionFailure};
use crate::domain::{
    AppError, CalendarSpec, DisaggregationTask, ForecastConfig, ForecastLayout, NmmeModel,
    VariableSpec,
};
use crate::ports::{JobResources, JobScheduler};

/// The monthly step already bias-corrected precipitation, so the sub-daily
/// step disaggregates the same field against itself.
const PRECIP: VariableSpec = VariableSpec {
    obs_var: "PRECTOT",
    fcst_var: "PRECTOT",
    var_type: "PRCP",
    unit: "kg/m^2/s",
};

/// Generate and queue one temporal-disaggregation job per forecast year.
pub fn execute<S: JobScheduler>(
    options: &DispatchOptions,
    config: &ForecastConfig,
    scheduler: &S,
) -> Result<DispatchReport, AppError> {
    let model = NmmeModel::from_token(&options.model)?;
    let calendar =
        CalendarSpec::new(options.fcst_start_year, options.month_num, config.lead_months)?;
    let layout = ForecastLayout::new(options.work_dir.clone(), config.install_root.clone());

    fs::create_dir_all(layout.bcsd_subdaily_dir(&options.month_abbr, model))?;
    fs::create_dir_all(layout.log_dir())?;

    let resources = JobResources { ntasks: options.ntasks, hours: options.hours };
    let mut report = DispatchReport::default();

    for year in options.fcst_start_year..=options.fcst_end_year {
        let task = DisaggregationTask::build(
            model,
            calendar.with_year(year),
            PRECIP,
            config,
            &layout,
            &options.month_abbr,
        );
        let job_name = format!("{}_{}_", options.job_name, model);

        match scheduler.submit(&job_name, &task.invocation().command_line(), &resources) {
            Ok(handle) => report.submitted.push(handle),
            Err(err) => {
                report.failures.push(SubmissionFailure { year, details: err.to_string() })
            }
        }
    }

    Ok(report)
}

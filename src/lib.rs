//! bcsd-fcst: generate and dispatch the batch jobs that bias-correct and
//! temporally disaggregate NMME seasonal forecasts against observational
//! climatology.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::commands::{bias_correction, disaggregation, fill_final};
use domain::{ForecastConfig, ForecastLayout};
use services::{BatchScriptScheduler, ShellCopier};

pub use app::commands::{
    CopyReport, DispatchOptions, DispatchReport, FillOptions, SubmissionFailure,
};
pub use domain::AppError;

/// Generate and queue monthly bias-correction jobs for one NMME model.
pub fn bias_correct(options: DispatchOptions) -> Result<DispatchReport, AppError> {
    let config = ForecastConfig::load(&options.config_file)?;
    println!("Processing forecast bias correction of NMME-{} precip", options.model);

    let report = bias_correction::execute(&options, &config, &scheduler(&options, &config))?;
    report_failures(&report);
    println!("Completed writing bias correction scripts for: {}", options.month_abbr);
    Ok(report)
}

/// Generate and queue 6-hourly temporal-disaggregation jobs for one NMME model.
pub fn disaggregate(options: DispatchOptions) -> Result<DispatchReport, AppError> {
    let config = ForecastConfig::load(&options.config_file)?;
    println!("Processing temporal disaggregation of NMME-{} precip", options.model);

    let report = disaggregation::execute(&options, &config, &scheduler(&options, &config))?;
    report_failures(&report);
    println!("Completed writing temporal disaggregation scripts for: {}", options.month_abbr);
    Ok(report)
}

/// Copy each ensemble member's last lead month forward in the final tree.
///
/// Runs synchronously across all six models and aborts on the first failed
/// copy.
pub fn fill_final(options: FillOptions) -> Result<CopyReport, AppError> {
    let config = ForecastConfig::load(&options.config_file)?;

    let report = fill_final::execute(&options, &config, &ShellCopier::new())?;
    println!("Copied {} member files forward for: {}", report.copies, options.month_abbr);
    Ok(report)
}

fn scheduler(options: &DispatchOptions, config: &ForecastConfig) -> BatchScriptScheduler {
    let layout = ForecastLayout::new(options.work_dir.clone(), config.install_root.clone());
    BatchScriptScheduler::new(options.work_dir.clone(), layout.log_dir())
}

fn report_failures(report: &DispatchReport) {
    for failure in &report.failures {
        eprintln!("Error: submission for year {} failed: {}", failure.year, failure.details);
    }
}

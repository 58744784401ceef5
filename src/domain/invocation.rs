use std::path::{Path, PathBuf};

use crate::domain::calendar::{CalendarSpec, LeadWindow};
use crate::domain::config::{DomainExtent, ForecastConfig};
use crate::domain::layout::ForecastLayout;
use crate::domain::model::{EnsembleTopology, NmmeModel};

/// Interpreter used to run the numerical programs.
const INTERPRETER: &str = "python";

const BIAS_CORRECTION_PROGRAM: &str = "bias_correction_nmme_modulefast.py";
const DISAGGREGATION_PROGRAM: &str = "temporal_disaggregation_nmme_6hourly_module.py";

/// Variable selection handed to the numerical programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableSpec {
    pub obs_var: &'static str,
    pub fcst_var: &'static str,
    pub var_type: &'static str,
    pub unit: &'static str,
}

/// One fully parameterized external-process call.
///
/// Parameters are positional. Their order is part of the contract with the
/// downstream program and must not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInvocation {
    script: PathBuf,
    args: Vec<String>,
}

impl TaskInvocation {
    fn new(script: PathBuf, args: Vec<String>) -> Self {
        Self { script, args }
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Render the invocation as a single shell command line.
    pub fn command_line(&self) -> String {
        let mut cmd = format!("{} {}", INTERPRETER, self.script.display());
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(arg);
        }
        cmd
    }
}

/// Parameter record for one monthly bias-correction run of a model-year.
#[derive(Debug, Clone, PartialEq)]
pub struct BiasCorrectionTask {
    pub model: NmmeModel,
    pub topology: EnsembleTopology,
    pub calendar: CalendarSpec,
    pub variables: VariableSpec,
    pub extent: DomainExtent,
    pub clim_start_year: i32,
    pub clim_end_year: i32,
    pub forecast_climatology_dir: PathBuf,
    pub observation_climatology_dir: PathBuf,
    pub forecast_dir: PathBuf,
    pub mask_file: PathBuf,
    pub output_dir: PathBuf,
    pub log_dir: PathBuf,
    pub script: PathBuf,
}

impl BiasCorrectionTask {
    /// Assemble the record for one (model, year) work unit.
    pub fn build(
        model: NmmeModel,
        calendar: CalendarSpec,
        variables: VariableSpec,
        config: &ForecastConfig,
        layout: &ForecastLayout,
        month_abbr: &str,
    ) -> Self {
        Self {
            model,
            topology: model.topology(),
            calendar,
            variables,
            extent: config.extent,
            clim_start_year: config.clim_start_year,
            clim_end_year: config.clim_end_year,
            forecast_climatology_dir: layout.raw_climatology_dir(month_abbr),
            observation_climatology_dir: layout.obs_climatology_dir(),
            forecast_dir: layout.raw_monthly_dir(month_abbr),
            mask_file: layout.mask_file(),
            output_dir: layout.bcsd_monthly_dir(month_abbr),
            log_dir: layout.log_dir(),
            script: layout.script_library().join(BIAS_CORRECTION_PROGRAM),
        }
    }

    /// Positional invocation for the bias-correction program.
    pub fn invocation(&self) -> TaskInvocation {
        let args = vec![
            self.variables.obs_var.to_string(),
            self.variables.fcst_var.to_string(),
            self.variables.var_type.to_string(),
            self.variables.unit.to_string(),
            self.extent.south.to_string(),
            self.extent.north.to_string(),
            self.extent.west.to_string(),
            self.extent.east.to_string(),
            self.calendar.month().to_string(),
            self.model.to_string(),
            self.calendar.lead_months().to_string(),
            self.topology.climatology_members.to_string(),
            self.topology.forecast_members.to_string(),
            self.calendar.year().to_string(),
            self.calendar.year().to_string(),
            self.clim_start_year.to_string(),
            self.clim_end_year.to_string(),
            self.forecast_climatology_dir.display().to_string(),
            self.observation_climatology_dir.display().to_string(),
            self.forecast_dir.display().to_string(),
            self.mask_file.display().to_string(),
            self.output_dir.display().to_string(),
            self.topology.member_start.to_string(),
            self.topology.member_end.to_string(),
            self.log_dir.display().to_string(),
        ];
        TaskInvocation::new(self.script.clone(), args)
    }
}

/// Parameter record for one 6-hourly temporal-disaggregation run.
#[derive(Debug, Clone, PartialEq)]
pub struct DisaggregationTask {
    pub model: NmmeModel,
    pub topology: EnsembleTopology,
    pub calendar: CalendarSpec,
    pub variables: VariableSpec,
    pub extent: DomainExtent,
    pub domain: String,
    pub precip_mask_file: PathBuf,
    pub nonprecip_mask_file: PathBuf,
    pub monthly_bcsd_dir: PathBuf,
    pub monthly_raw_dir: PathBuf,
    pub subdaily_raw_dir: PathBuf,
    pub output_dir: PathBuf,
    pub log_dir: PathBuf,
    pub script: PathBuf,
}

impl DisaggregationTask {
    /// Assemble the record for one (model, year) work unit.
    pub fn build(
        model: NmmeModel,
        calendar: CalendarSpec,
        variables: VariableSpec,
        config: &ForecastConfig,
        layout: &ForecastLayout,
        month_abbr: &str,
    ) -> Self {
        Self {
            model,
            topology: model.topology(),
            calendar,
            variables,
            extent: config.extent,
            domain: config.domain.clone(),
            precip_mask_file: layout.mask_file(),
            nonprecip_mask_file: layout.mask_file(),
            monthly_bcsd_dir: layout.bcsd_monthly_dir(month_abbr),
            monthly_raw_dir: layout.raw_monthly_dir(month_abbr),
            subdaily_raw_dir: layout.linked_precip_dir(month_abbr),
            output_dir: layout.bcsd_subdaily_dir(month_abbr, model),
            log_dir: layout.log_dir(),
            script: layout.script_library().join(DISAGGREGATION_PROGRAM),
        }
    }

    /// Positional invocation for the disaggregation program.
    pub fn invocation(&self) -> TaskInvocation {
        let args = vec![
            self.variables.obs_var.to_string(),
            self.variables.fcst_var.to_string(),
            self.calendar.year().to_string(),
            self.calendar.month().to_string(),
            self.variables.var_type.to_string(),
            self.variables.unit.to_string(),
            self.extent.south.to_string(),
            self.extent.north.to_string(),
            self.extent.west.to_string(),
            self.extent.east.to_string(),
            self.model.to_string(),
            self.topology.forecast_members.to_string(),
            self.calendar.lead_months().to_string(),
            self.calendar.year().to_string(),
            self.calendar.year().to_string(),
            self.precip_mask_file.display().to_string(),
            self.nonprecip_mask_file.display().to_string(),
            self.monthly_bcsd_dir.display().to_string(),
            self.monthly_raw_dir.display().to_string(),
            self.subdaily_raw_dir.display().to_string(),
            self.output_dir.display().to_string(),
            self.topology.member_start.to_string(),
            self.topology.member_end.to_string(),
            self.domain.clone(),
            self.log_dir.display().to_string(),
        ];
        TaskInvocation::new(self.script.clone(), args)
    }
}

/// One member-level copy forwarding the last lead month's file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberCopy {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl MemberCopy {
    pub fn build(member_dir: &Path, window: &LeadWindow) -> Self {
        Self {
            source: member_dir.join(format!("PRECTOT.{}.nc4", window.source)),
            destination: member_dir.join(format!("PRECTOT.{}.nc4", window.destination)),
        }
    }
}

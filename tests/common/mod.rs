//! Shared testing harness for `bcsd-fcst` integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated forecast project for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("proj");
        fs::create_dir_all(&work_dir).expect("Failed to create test project directory");
        Self { root, work_dir }
    }

    /// Path to the forecast project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write a forecast config with the default test values and return its path.
    pub fn write_config(&self) -> PathBuf {
        self.write_config_with_lead(9)
    }

    /// Write a forecast config with a custom lead-month count.
    pub fn write_config_with_lead(&self, lead_months: u32) -> PathBuf {
        let path = self.root.path().join("forecast.yml");
        let content = format!(
            r#"SETUP:
  LISFDIR: {install}
EXP:
  domain_extent:
    LAT_SW: -39.875
    LAT_NE: 39.875
    LON_SW: -19.875
    LON_NE: 59.875
  lead_months: {lead_months}
  domain: AFRICOM
BCSD:
  clim_start_year: 2008
  clim_end_year: 2020
  nof_raw_ens: 12
"#,
            install = self.root.path().join("LISF").display(),
        );
        fs::write(&path, content).expect("Failed to write test forecast config");
        path
    }

    /// Build a command for invoking the compiled `bcsd-fcst` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("bcsd-fcst").expect("Failed to locate bcsd-fcst binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to a generated batch script in the project directory.
    pub fn job_script(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Per-member directory in the final 6-hourly tree.
    pub fn final_member_dir(
        &self,
        model: &str,
        year: i32,
        month_abbr: &str,
        member: u32,
    ) -> PathBuf {
        self.work_dir
            .join("bcsd_fcst/NMME/final/6-Hourly")
            .join(model)
            .join(year.to_string())
            .join(format!("{month_abbr}01"))
            .join(format!("ens{member}"))
    }

    /// Seed one member's source file for the given month label.
    pub fn seed_member_file(
        &self,
        model: &str,
        year: i32,
        month_abbr: &str,
        member: u32,
        label: &str,
    ) {
        let dir = self.final_member_dir(model, year, month_abbr, member);
        fs::create_dir_all(&dir).expect("Failed to create member directory");
        fs::write(dir.join(format!("PRECTOT.{label}.nc4")), b"nc4")
            .expect("Failed to seed member file");
    }
}

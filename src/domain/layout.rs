use std::path::PathBuf;

use crate::domain::NmmeModel;

/// Fixed directory layout of the forecast working tree.
///
/// Every path is derived from the project directory (the working directory
/// the commands were pointed at) and the installation root taken from the
/// forecast configuration.
#[derive(Debug, Clone)]
pub struct ForecastLayout {
    project_dir: PathBuf,
    install_root: PathBuf,
}

impl ForecastLayout {
    pub fn new(project_dir: PathBuf, install_root: PathBuf) -> Self {
        Self { project_dir, install_root }
    }

    /// Directory holding the numerical bias-correction programs.
    pub fn script_library(&self) -> PathBuf {
        self.install_root.join("lis/utils/usaf/s2s/s2s_modules/bcsd_fcst/bcsd_library")
    }

    /// Destination for batch job logs.
    pub fn log_dir(&self) -> PathBuf {
        self.project_dir.join("log_files")
    }

    pub fn supplementary_dir(&self) -> PathBuf {
        self.project_dir.join("bcsd_fcst/supplementary_files")
    }

    /// Land mask applied by the numerical programs.
    pub fn mask_file(&self) -> PathBuf {
        self.supplementary_dir().join("Mask_nafpa.nc")
    }

    /// Climatology derived from the observational forcing archive.
    pub fn obs_climatology_dir(&self) -> PathBuf {
        self.project_dir.join("bcsd_fcst/USAF-LIS7.3rc8_25km/raw/Climatology")
    }

    fn nmme_dir(&self) -> PathBuf {
        self.project_dir.join("bcsd_fcst/NMME")
    }

    pub fn raw_climatology_dir(&self, month_abbr: &str) -> PathBuf {
        self.nmme_dir().join("raw/Climatology").join(format!("{month_abbr}01"))
    }

    pub fn raw_monthly_dir(&self, month_abbr: &str) -> PathBuf {
        self.nmme_dir().join("raw/Monthly").join(format!("{month_abbr}01"))
    }

    pub fn bcsd_monthly_dir(&self, month_abbr: &str) -> PathBuf {
        self.nmme_dir().join("bcsd/Monthly").join(format!("{month_abbr}01"))
    }

    pub fn bcsd_subdaily_dir(&self, month_abbr: &str, model: NmmeModel) -> PathBuf {
        self.nmme_dir().join("bcsd/6-Hourly").join(format!("{month_abbr}01")).join(model.token())
    }

    /// Sub-daily raw precipitation inputs linked in from the CFSv2 archive.
    pub fn linked_precip_dir(&self, month_abbr: &str) -> PathBuf {
        self.nmme_dir().join("linked_cfsv2_precip_files").join(format!("{month_abbr}01"))
    }

    /// Per-member directory in the final 6-hourly tree.
    pub fn final_member_dir(
        &self,
        model: NmmeModel,
        year: i32,
        month_abbr: &str,
        member: u32,
    ) -> PathBuf {
        self.nmme_dir()
            .join("final/6-Hourly")
            .join(model.token())
            .join(year.to_string())
            .join(format!("{month_abbr}01"))
            .join(format!("ens{member}"))
    }
}

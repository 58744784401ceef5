use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Geographic bounds of the forecast domain, in degrees.
///
/// Bounds are passed through to the numerical programs unmodified; the
/// configuration is trusted to provide south < north and west < east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainExtent {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

/// Validated forecast configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    /// Installation root of the forecasting system.
    pub install_root: PathBuf,
    /// Geographic bounds of the forecast domain.
    pub extent: DomainExtent,
    /// Number of lead months covered by each forecast.
    pub lead_months: u32,
    /// Domain tag handed to the disaggregation program.
    pub domain: String,
    /// First year of the climatological reference period.
    pub clim_start_year: i32,
    /// Last year of the climatological reference period.
    pub clim_end_year: i32,
    /// Raw ensemble member count as configured upstream. The effective
    /// per-model member counts come from the ensemble registry.
    pub raw_ensemble_members: u32,
}

impl ForecastConfig {
    /// Load and validate the forecast configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::ConfigMissing(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse the configuration from YAML content.
    pub fn parse_yaml(content: &str) -> Result<Self, AppError> {
        let dto: dto::ConfigDto = serde_yaml::from_str(content)?;
        dto.try_into()
    }
}

mod dto {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct ConfigDto {
        #[serde(rename = "SETUP")]
        pub setup: SetupDto,
        #[serde(rename = "EXP")]
        pub exp: ExpDto,
        #[serde(rename = "BCSD")]
        pub bcsd: BcsdDto,
    }

    #[derive(Debug, Deserialize)]
    pub struct SetupDto {
        #[serde(rename = "LISFDIR")]
        pub lisf_dir: PathBuf,
    }

    #[derive(Debug, Deserialize)]
    pub struct ExpDto {
        pub domain_extent: ExtentDto,
        pub lead_months: u32,
        pub domain: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct ExtentDto {
        #[serde(rename = "LAT_SW")]
        pub lat_sw: f64,
        #[serde(rename = "LAT_NE")]
        pub lat_ne: f64,
        #[serde(rename = "LON_SW")]
        pub lon_sw: f64,
        #[serde(rename = "LON_NE")]
        pub lon_ne: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct BcsdDto {
        pub clim_start_year: i32,
        pub clim_end_year: i32,
        pub nof_raw_ens: u32,
    }

    impl TryFrom<ConfigDto> for ForecastConfig {
        type Error = AppError;

        fn try_from(dto: ConfigDto) -> Result<Self, Self::Error> {
            if dto.bcsd.clim_start_year > dto.bcsd.clim_end_year {
                return Err(AppError::config_error(format!(
                    "Climatology period is inverted: {} > {}",
                    dto.bcsd.clim_start_year, dto.bcsd.clim_end_year
                )));
            }

            Ok(ForecastConfig {
                install_root: dto.setup.lisf_dir,
                extent: DomainExtent {
                    south: dto.exp.domain_extent.lat_sw,
                    north: dto.exp.domain_extent.lat_ne,
                    west: dto.exp.domain_extent.lon_sw,
                    east: dto.exp.domain_extent.lon_ne,
                },
                lead_months: dto.exp.lead_months,
                domain: dto.exp.domain,
                clim_start_year: dto.bcsd.clim_start_year,
                clim_end_year: dto.bcsd.clim_end_year,
                raw_ensemble_members: dto.bcsd.nof_raw_ens,
            })
        }
    }
}

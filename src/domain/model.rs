use std::fmt;

use crate::domain::AppError;

/// The closed set of NMME ensemble models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NmmeModel {
    CFSv2,
    GEOSv2,
    CCM4,
    GNEMO5,
    CCSM4,
    GFDL,
}

/// Ensemble topology for one NMME model.
///
/// Member indices are 1-based and globally unique: each model owns a
/// contiguous slice of the combined 1-94 member range, and the slices of
/// different models never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnsembleTopology {
    /// Number of ensemble members in the forecast.
    pub forecast_members: u32,
    /// Number of ensemble members in the climatology.
    pub climatology_members: u32,
    /// First global member index owned by this model.
    pub member_start: u32,
    /// Last global member index owned by this model.
    pub member_end: u32,
}

impl NmmeModel {
    /// All models in global member-index order.
    pub const ALL: [NmmeModel; 6] = [
        NmmeModel::CFSv2,
        NmmeModel::GEOSv2,
        NmmeModel::CCM4,
        NmmeModel::GNEMO5,
        NmmeModel::CCSM4,
        NmmeModel::GFDL,
    ];

    /// Parse a model token as it appears on the command line.
    pub fn from_token(token: &str) -> Result<NmmeModel, AppError> {
        match token {
            "CFSv2" => Ok(NmmeModel::CFSv2),
            "GEOSv2" => Ok(NmmeModel::GEOSv2),
            "CCM4" => Ok(NmmeModel::CCM4),
            "GNEMO5" => Ok(NmmeModel::GNEMO5),
            "CCSM4" => Ok(NmmeModel::CCSM4),
            "GFDL" => Ok(NmmeModel::GFDL),
            _ => Err(AppError::UnknownModel(token.to_string())),
        }
    }

    /// Canonical token for this model, as used in paths and job names.
    pub fn token(&self) -> &'static str {
        match self {
            NmmeModel::CFSv2 => "CFSv2",
            NmmeModel::GEOSv2 => "GEOSv2",
            NmmeModel::CCM4 => "CCM4",
            NmmeModel::GNEMO5 => "GNEMO5",
            NmmeModel::CCSM4 => "CCSM4",
            NmmeModel::GFDL => "GFDL",
        }
    }

    /// Ensemble topology for this model.
    pub fn topology(&self) -> EnsembleTopology {
        match self {
            NmmeModel::CFSv2 => EnsembleTopology {
                forecast_members: 24,
                climatology_members: 12,
                member_start: 1,
                member_end: 24,
            },
            NmmeModel::GEOSv2 => EnsembleTopology {
                forecast_members: 10,
                climatology_members: 4,
                member_start: 25,
                member_end: 34,
            },
            NmmeModel::CCM4 => EnsembleTopology {
                forecast_members: 10,
                climatology_members: 10,
                member_start: 35,
                member_end: 44,
            },
            NmmeModel::GNEMO5 => EnsembleTopology {
                forecast_members: 10,
                climatology_members: 10,
                member_start: 45,
                member_end: 54,
            },
            NmmeModel::CCSM4 => EnsembleTopology {
                forecast_members: 10,
                climatology_members: 10,
                member_start: 55,
                member_end: 64,
            },
            NmmeModel::GFDL => EnsembleTopology {
                forecast_members: 30,
                climatology_members: 15,
                member_start: 65,
                member_end: 94,
            },
        }
    }
}

impl fmt::Display for NmmeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

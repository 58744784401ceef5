use crate::app::commands::{CopyReport, FillOptions};
use crate::domain::{
    AppError, CalendarSpec, ForecastConfig, ForecastLayout, MemberCopy, NmmeModel,
};
use crate::ports::FileTransfer;

/// Copy each member's last lead month forward in the final 6-hourly tree.
///
/// The full-average write-out expects one month beyond the lead window, so
/// the last produced month is duplicated under the next month's label.
///
/// Runs synchronously and aborts on the first failed copy; later members
/// rely on the directory state left behind by earlier ones.
pub fn execute<T: FileTransfer>(
    options: &FillOptions,
    config: &ForecastConfig,
    transfer: &T,
) -> Result<CopyReport, AppError> {
    let calendar = CalendarSpec::new(options.year, options.month_num, config.lead_months)?;
    let window = calendar.lead_window()?;
    let layout = ForecastLayout::new(options.work_dir.clone(), config.install_root.clone());

    let mut report = CopyReport::default();

    for model in NmmeModel::ALL {
        let topology = model.topology();

        for member in 1..=topology.forecast_members {
            let member_dir =
                layout.final_member_dir(model, options.year, &options.month_abbr, member);
            let copy = MemberCopy::build(&member_dir, &window);

            transfer.copy(&copy.source, &copy.destination)?;
            report.copies += 1;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::DomainExtent;
    use crate::testing::RecordingTransfer;

    fn config() -> ForecastConfig {
        ForecastConfig {
            install_root: PathBuf::from("/opt/lisf"),
            extent: DomainExtent { south: -39.875, north: 39.875, west: -19.875, east: 59.875 },
            lead_months: 9,
            domain: "AFRICOM".to_string(),
            clim_start_year: 2008,
            clim_end_year: 2020,
            raw_ensemble_members: 12,
        }
    }

    fn options() -> FillOptions {
        FillOptions {
            year: 2021,
            month_abbr: "Jun".to_string(),
            month_num: 6,
            config_file: PathBuf::from("forecast.yml"),
            work_dir: PathBuf::from("/proj"),
        }
    }

    #[test]
    fn copies_every_member_of_every_model() {
        let transfer = RecordingTransfer::new();

        let report = execute(&options(), &config(), &transfer).unwrap();

        let copies = transfer.copies();
        assert_eq!(report.copies, 94);
        assert_eq!(copies.len(), 94);

        // Ten GEOSv2 members, one copy per member directory.
        let geos: Vec<_> = copies
            .iter()
            .filter(|(source, _)| source.to_string_lossy().contains("/GEOSv2/"))
            .collect();
        assert_eq!(geos.len(), 10);
        assert!(geos[0].0.to_string_lossy().ends_with("ens1/PRECTOT.202202.nc4"));
        assert!(geos[9].1.to_string_lossy().ends_with("ens10/PRECTOT.202203.nc4"));
    }

    #[test]
    fn source_and_destination_share_the_member_directory() {
        let transfer = RecordingTransfer::new();

        execute(&options(), &config(), &transfer).unwrap();

        let copies = transfer.copies();
        assert_eq!(
            copies[0].0,
            PathBuf::from("/proj/bcsd_fcst/NMME/final/6-Hourly/CFSv2/2021/Jun01/ens1/PRECTOT.202202.nc4")
        );
        assert_eq!(
            copies[0].1,
            PathBuf::from("/proj/bcsd_fcst/NMME/final/6-Hourly/CFSv2/2021/Jun01/ens1/PRECTOT.202203.nc4")
        );
    }

    #[test]
    fn halts_on_the_first_failed_copy() {
        // Index 24 is the first GEOSv2 member, right after CFSv2's 24.
        let transfer = RecordingTransfer::failing_at(24);

        let err = execute(&options(), &config(), &transfer).unwrap_err();

        assert!(matches!(err, AppError::CopyFailure { ref src, .. } if src.contains("GEOSv2")));
        assert_eq!(transfer.copies().len(), 24);
    }

    #[test]
    fn invalid_month_fails_before_any_copy() {
        let transfer = RecordingTransfer::new();

        let mut options = options();
        options.month_num = 0;
        let err = execute(&options, &config(), &transfer).unwrap_err();

        assert!(matches!(err, AppError::InvalidCalendarInput { month: 0 }));
        assert!(transfer.copies().is_empty());
    }
}

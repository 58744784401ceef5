use std::path::PathBuf;

use bcsd_fcst::{AppError, DispatchOptions, FillOptions};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bcsd-fcst")]
#[command(version)]
#[command(
    about = "Generate and dispatch NMME bias-correction and disaggregation batch jobs",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DispatchArgs {
    /// Start year of the forecast
    #[arg(short = 's', long)]
    fcst_syr: i32,
    /// End year of the forecast
    #[arg(short = 'e', long)]
    fcst_eyr: i32,
    /// Abbreviation of the initialization month
    #[arg(short = 'm', long)]
    month_abbr: String,
    /// Integer number of the initialization month
    #[arg(short = 'n', long)]
    month_num: u32,
    /// Config file that sets up the forecast environment
    #[arg(short = 'c', long)]
    config_file: PathBuf,
    /// Base name for generated batch jobs
    #[arg(short = 'j', long)]
    job_name: String,
    /// Number of scheduler tasks per job
    #[arg(short = 't', long)]
    ntasks: u32,
    /// Wall-time request in hours
    #[arg(short = 'H', long)]
    hours: u32,
    /// Working directory of the forecast project
    #[arg(short = 'w', long)]
    cwd: PathBuf,
    /// NMME model name
    #[arg(short = 'M', long)]
    nmme_model: String,
}

impl From<DispatchArgs> for DispatchOptions {
    fn from(args: DispatchArgs) -> Self {
        DispatchOptions {
            fcst_start_year: args.fcst_syr,
            fcst_end_year: args.fcst_eyr,
            month_abbr: args.month_abbr,
            month_num: args.month_num,
            config_file: args.config_file,
            job_name: args.job_name,
            ntasks: args.ntasks,
            hours: args.hours,
            work_dir: args.cwd,
            model: args.nmme_model,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate monthly bias-correction jobs for one NMME model
    #[clap(visible_alias = "bc")]
    BiasCorrect(DispatchArgs),
    /// Generate 6-hourly temporal-disaggregation jobs for one NMME model
    #[clap(visible_alias = "td")]
    Disaggregate(DispatchArgs),
    /// Copy each member's last lead month forward in the final tree
    #[clap(visible_alias = "ff")]
    FillFinal {
        /// Forecast year to fill
        #[arg(short = 's', long)]
        year: i32,
        /// Abbreviation of the initialization month
        #[arg(short = 'm', long)]
        month_abbr: String,
        /// Integer number of the initialization month
        #[arg(short = 'n', long)]
        month_num: u32,
        /// Config file that sets up the forecast environment
        #[arg(short = 'c', long)]
        config_file: PathBuf,
        /// Working directory of the forecast project
        #[arg(short = 'w', long)]
        cwd: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::BiasCorrect(args) => bcsd_fcst::bias_correct(args.into()).map(|_| ()),
        Commands::Disaggregate(args) => bcsd_fcst::disaggregate(args.into()).map(|_| ()),
        Commands::FillFinal { year, month_abbr, month_num, config_file, cwd } => {
            bcsd_fcst::fill_final(FillOptions {
                year,
                month_abbr,
                month_num,
                config_file,
                work_dir: cwd,
            })
            .map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};

use attendance_cli::cli::{
    handle_days_command, handle_export_command, handle_show_command, ExportArgs, PeriodArgs,
    ShowArgs,
};
use attendance_cli::config::{paths::AttendancePaths, settings::Settings};
use attendance_cli::logging::{self, LogTarget};

#[derive(Parser)]
#[command(
    name = "attendance",
    version,
    about = "Monthly class attendance grid with PDF export",
    long_about = "Fill in a day-by-class attendance grid for one month, see per-day \
                  and per-class totals, and export the table as a PDF named \
                  attendance_report_<Month>_<Year>.pdf."
)]
struct Cli {
    #[command(flatten)]
    period: PeriodArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Print the number of days in the month
    Days,

    /// Print the grid with row sums and column totals
    Show(ShowArgs),

    /// Write the attendance report to a file
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AttendancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let period = cli.period.resolve();

    let target = match cli.command {
        None | Some(Commands::Tui) => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(&paths, &settings, target)?;
    tracing::debug!(period = %period, "resolved period");

    match cli.command {
        None | Some(Commands::Tui) => {
            attendance_cli::tui::run_tui(&settings, period)?;
        }
        Some(Commands::Days) => {
            handle_days_command(period, settings.locale())?;
        }
        Some(Commands::Show(args)) => {
            handle_show_command(period, settings.locale(), args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(period, &settings, args)?;
        }
        Some(Commands::Config) => {
            println!("Attendance Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Locale:         {:?}", settings.locale());
            println!("  Export dir:     {}", settings.export_dir().display());
            println!("  Default format: {}", settings.default_format.extension());
            println!(
                "  PDF layout:     {:?} {:?}, {}pt font, {}pt margin",
                settings.pdf.page_size,
                settings.pdf.orientation,
                settings.pdf.font_size,
                settings.pdf.margin
            );
            println!("  Log level:      {}", settings.log_level);
        }
    }

    Ok(())
}

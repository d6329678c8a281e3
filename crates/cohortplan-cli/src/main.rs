//! cohortplan CLI - Cohort Training Schedule Generator
//!
//! Command-line interface for loading, scheduling, and rendering a school
//! year of cohorts.
//!
//! ## Exit Codes
//!
//! | Exit Code | Meaning |
//! |-----------|---------|
//! | 0 | Success |
//! | 1 | Failure: invalid configuration, data, allocation or output |

mod output;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cohortplan_core::{DelayMode, Renderer, Schedule, Scheduler, TrainingPlan, MAX_DELAY_WEEKS};
use cohortplan_data::builtin::{
    school_year_2026_2027, MODULES_FILE, ROOMS_FILE, SAMPLE_MODULES_CSV, SAMPLE_ROOMS_CSV,
};
use cohortplan_data::load_plan;
use cohortplan_render::{ExcelRenderer, HtmlTimelineRenderer, SvgTimelineRenderer};
use cohortplan_solver::{drill_down, CohortAllocator};

use output::{format_details, format_schedule, DetailsFormat, ScheduleFormat};

/// Default configuration file name written by `init`
const CONFIG_FILE: &str = "cohortplan.toml";

#[derive(Parser)]
#[command(name = "cohortplan")]
#[command(author, version, about = "Cohort training schedule generator", long_about = None)]
struct Cli {
    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample configuration and its tables
    Init {
        /// Target directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Load and validate a configuration
    Check {
        /// Configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },

    /// Compute the schedule and print the detail table
    Schedule {
        /// Configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ScheduleFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        selection: Selection,
    },

    /// Render the timeline chart
    Timeline {
        /// Configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Chart format
        #[arg(long, value_enum, default_value = "html")]
        format: TimelineFormat,

        /// Dark page theme (html only)
        #[arg(long)]
        dark: bool,

        #[command(flatten)]
        selection: Selection,
    },

    /// Export the schedule to an Excel workbook
    Export {
        /// Configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Output .xlsx path
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        selection: Selection,
    },

    /// Show one module of one cohort, period by period
    Details {
        /// Configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Cohort ID
        #[arg(long)]
        cohort: String,

        /// Module ID
        #[arg(long)]
        module: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: DetailsFormat,

        #[command(flatten)]
        delay: DelayOverride,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TimelineFormat {
    Svg,
    Html,
}

/// Cohort filter and delay overrides
#[derive(clap::Args)]
struct Selection {
    /// Only schedule this cohort
    #[arg(long)]
    cohort: Option<String>,

    #[command(flatten)]
    delay: DelayOverride,
}

/// Overrides of the configured delay
#[derive(clap::Args)]
struct DelayOverride {
    /// Delay of the designated module, in weeks
    #[arg(
        long,
        value_name = "WEEKS",
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_DELAY_WEEKS))
    )]
    delay: Option<u32>,

    /// Move the schedule by the delay instead of ignoring it
    #[arg(long)]
    apply_delay: bool,
}

impl DelayOverride {
    fn apply_to(&self, plan: &mut TrainingPlan) {
        if let Some(weeks) = self.delay {
            plan.delay.weeks = weeks;
        }
        if self.apply_delay {
            plan.delay.mode = DelayMode::Apply;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Init { output } => cmd_init(&output),
        Commands::Check { config } => cmd_check(&config),
        Commands::Schedule {
            config,
            format,
            output,
            selection,
        } => {
            let (plan, schedule) = load_and_schedule(&config, &selection)?;
            let text = format_schedule(&plan, &schedule, format)?;
            emit(&text, output.as_deref())
        }
        Commands::Timeline {
            config,
            output,
            format,
            dark,
            selection,
        } => {
            let (plan, schedule) = load_and_schedule(&config, &selection)?;
            let chart = match format {
                TimelineFormat::Svg => SvgTimelineRenderer::new().render(&plan, &schedule),
                TimelineFormat::Html if dark => HtmlTimelineRenderer::new()
                    .dark_theme()
                    .render(&plan, &schedule),
                TimelineFormat::Html => HtmlTimelineRenderer::new().render(&plan, &schedule),
            }
            .context("Failed to render timeline")?;
            write_file(&output, chart.as_bytes())?;
            println!("Timeline written to {}", output.display());
            Ok(())
        }
        Commands::Export {
            config,
            output,
            selection,
        } => {
            let (plan, schedule) = load_and_schedule(&config, &selection)?;
            let bytes = ExcelRenderer::new()
                .render(&plan, &schedule)
                .context("Failed to render workbook")?;
            write_file(&output, &bytes)?;
            println!("Workbook written to {}", output.display());
            Ok(())
        }
        Commands::Details {
            config,
            cohort,
            module,
            format,
            delay,
        } => {
            let mut plan = load(&config)?;
            delay.apply_to(&mut plan);
            let schedule = CohortAllocator::new().schedule(&plan)?;
            let details = drill_down(&plan, &schedule, &cohort, &module)?;
            print!("{}", format_details(&details, format)?);
            Ok(())
        }
    }
}

fn load(config: &Path) -> Result<TrainingPlan> {
    load_plan(config).with_context(|| format!("Failed to load {}", config.display()))
}

fn load_and_schedule(config: &Path, selection: &Selection) -> Result<(TrainingPlan, Schedule)> {
    let mut plan = load(config)?;
    selection.delay.apply_to(&mut plan);

    if let Some(cohort) = &selection.cohort {
        if plan.get_cohort(cohort).is_none() {
            let known: Vec<&str> = plan.cohorts.iter().map(|c| c.id.as_str()).collect();
            bail!("Unknown cohort '{}' (known: {})", cohort, known.join(", "));
        }
        plan.cohorts.retain(|c| &c.id == cohort);
    }

    let schedule = CohortAllocator::new().schedule(&plan)?;
    Ok((plan, schedule))
}

fn cmd_init(dir: &Path) -> Result<()> {
    let files = [
        (CONFIG_FILE, school_year_2026_2027().to_toml_string()?),
        (MODULES_FILE, SAMPLE_MODULES_CSV.to_string()),
        (ROOMS_FILE, SAMPLE_ROOMS_CSV.to_string()),
    ];

    for (name, _) in &files {
        let path = dir.join(name);
        if path.exists() {
            bail!("{} already exists", path.display());
        }
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    for (name, content) in &files {
        let path = dir.join(name);
        write_file(&path, content.as_bytes())?;
        println!("Created: {}", path.display());
    }

    println!();
    println!("Next steps:");
    println!("  cohortplan check {}", dir.join(CONFIG_FILE).display());
    println!("  cohortplan schedule {}", dir.join(CONFIG_FILE).display());
    Ok(())
}

fn cmd_check(config: &Path) -> Result<()> {
    let plan = load(config)?;

    println!("{}", plan.title);
    println!("School year:    {}", plan.school_year);
    println!("Cohorts:        {}", plan.cohorts.len());
    println!(
        "Modules:        {} ({}h)",
        plan.modules.len(),
        plan.total_hours()
    );
    println!("Rooms:          {}", plan.rooms.len());
    println!("Off days:       {}", plan.off_days.len());
    println!(
        "Daily capacity: {}h in {} periods",
        plan.daily_capacity_hours,
        plan.periods.periods.len()
    );
    let delay = &plan.delay;
    let mode = match delay.mode {
        DelayMode::Ignore => "ignored",
        DelayMode::Apply => "applied",
    };
    println!(
        "Delay:          {} week(s) before {} ({})",
        delay.weeks, delay.module, mode
    );

    info!(config = %config.display(), "configuration is valid");
    println!("OK");
    Ok(())
}

/// Write to `path`, or stdout when absent
fn emit(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            write_file(path, text.as_bytes())?;
            println!("Schedule written to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

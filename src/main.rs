use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use color_eyre::Result;
use env_logger::Env;
use log::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;

use circles_states::config::{GeneratorConfig, GeneratorSettings};
use circles_states::config_loader;
use circles_states::error::{StartStateError, EXIT_USAGE};
use circles_states::orchestrator::generate_start_states;
use circles_states::utils::parse_agent_count;

/// Generate an initial-state file for the Circles agent-based model
#[derive(Parser, Debug)]
#[command(name = "createstartstates", author, version, about, long_about = None)]
struct Args {
    /// Number of agents to generate
    #[arg(allow_negative_numbers = true)]
    agent_count: String,

    /// Output file ("-" writes to stdout) [default: 0.xml]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Radius of every agent [default: 2.0]
    #[arg(short, long)]
    radius: Option<f64>,

    /// Seed for reproducible placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path to a YAML generator settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Settings given on the command line, which override the settings file
    fn overrides(&self) -> GeneratorSettings {
        GeneratorSettings {
            output: self.output.clone(),
            radius: self.radius,
            seed: self.seed,
        }
    }
}

fn print_usage() {
    eprintln!("{}", Args::command().render_usage());
}

fn main() -> ExitCode {
    if let Err(report) = color_eyre::install() {
        eprintln!("{:?}", report);
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return exit_status(EXIT_USAGE);
        }
    };

    // Initialize logging with the requested default filter level
    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => match report.downcast_ref::<StartStateError>() {
            Some(err) => {
                eprintln!("{}", err);
                if err.wants_usage() {
                    print_usage();
                }
                exit_status(err.exit_code())
            }
            None => {
                eprintln!("Error: {:?}", report);
                exit_status(EXIT_USAGE)
            }
        },
    }
}

fn run(args: &Args) -> Result<()> {
    let agent_count = parse_agent_count(&args.agent_count)?;

    let settings = match &args.config {
        Some(path) => config_loader::load_settings(path)?,
        None => GeneratorSettings::default(),
    };
    let config = GeneratorConfig::resolve(agent_count, &settings, &args.overrides())
        .map_err(StartStateError::from)?;
    debug!("Resolved configuration: {:?}", config);

    info!("Generating {} agents into {}", config.agent_count, config.output);
    let summary = generate_start_states(&config)?;

    info!("Start states written to {}", summary.destination);
    Ok(())
}

fn exit_status(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use fvcast::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct ProjectionArgs {
    /// Investment amount: monthly for SIP, one-time for lumpsum
    #[arg(short, long)]
    amount: Option<f64>,

    /// Annual interest rate in percent
    #[arg(short, long)]
    rate: Option<f64>,

    /// Investment period in whole years
    #[arg(short, long)]
    years: Option<u32>,

    /// Save the rendered projection as a PDF report
    #[arg(short, long)]
    export: bool,
}

impl From<&ProjectionArgs> for fvcast::ProjectionRequest {
    fn from(args: &ProjectionArgs) -> fvcast::ProjectionRequest {
        fvcast::ProjectionRequest {
            amount: args.amount,
            rate: args.rate,
            years: args.years,
            export: args.export,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Project a recurring monthly investment (SIP)
    Sip(ProjectionArgs),
    /// Project a one-time lumpsum investment
    Lumpsum(ProjectionArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match &cli.command {
        Some(Commands::Setup) => fvcast::cli::setup::setup(),
        Some(Commands::Sip(args)) => {
            fvcast::run_command(fvcast::AppCommand::Sip(args.into()), cli.config_path.as_deref())
        }
        Some(Commands::Lumpsum(args)) => fvcast::run_command(
            fvcast::AppCommand::Lumpsum(args.into()),
            cli.config_path.as_deref(),
        ),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

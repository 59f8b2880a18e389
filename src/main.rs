use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tripfx::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Fail on unknown currencies and missing rates instead of assuming 1:1
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for tripfx::AppCommand {
    fn from(cmd: Commands) -> tripfx::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                from,
                to,
                json,
            } => tripfx::AppCommand::Convert {
                amount,
                from: from.to_uppercase(),
                to: to.to_uppercase(),
                json,
            },
            Commands::Rate { from, to } => tripfx::AppCommand::Rate {
                from: from.to_uppercase(),
                to: to.to_uppercase(),
            },
            Commands::Popular => tripfx::AppCommand::Popular,
            Commands::Currencies => tripfx::AppCommand::Currencies,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        amount: String,
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the exchange rate for a currency pair
    Rate { from: String, to: String },
    /// Display popular conversions and their rates
    Popular,
    /// List the supported currencies
    Currencies,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let options = tripfx::RunOptions {
        config_path: cli.config_path.as_deref(),
        strict: cli.strict,
    };
    let result = match cli.command {
        Some(Commands::Setup) => tripfx::cli::setup::setup(),
        Some(cmd) => tripfx::run_command(cmd.into(), options).await,
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

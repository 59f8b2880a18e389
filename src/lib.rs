pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use crate::core::converter::delay_from_millis;
use crate::core::{Converter, ResolutionPolicy};
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        amount: String,
        from: String,
        to: String,
        json: bool,
    },
    Rate {
        from: String,
        to: String,
    },
    Popular,
    Currencies,
}

pub struct RunOptions<'a> {
    pub config_path: Option<&'a str>,
    /// Overrides the configured policy with strict resolution
    pub strict: bool,
}

pub async fn run_command(command: AppCommand, options: RunOptions<'_>) -> Result<()> {
    info!("tripfx starting...");

    let config = match options.config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let policy = if options.strict {
        ResolutionPolicy::Strict
    } else {
        config.policy
    };
    let converter = Converter::new(config.build_resolver()?, policy)
        .with_delay(delay_from_millis(config.latency_ms));

    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            json,
        } => cli::convert::run(&converter, &amount, &from, &to, json).await,
        AppCommand::Rate { from, to } => cli::convert::rate(&converter, &from, &to),
        AppCommand::Popular => cli::popular::run(&converter, &config.popular),
        AppCommand::Currencies => {
            cli::currencies::run(converter.resolver().catalog());
            Ok(())
        }
    }
}

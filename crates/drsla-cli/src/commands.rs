use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::config::Config;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = HandlerContext::new(cli.format);

    match cli.command {
        Commands::Analyze {
            snapshot,
            group,
            now,
            fail_on,
            verbose,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            handlers::analyze::handle(
                &snapshot,
                handlers::analyze::AnalyzeOptions {
                    group,
                    now,
                    fail_on,
                    verbose,
                },
                &config,
                &ctx,
            )
        }

        Commands::Rpo {
            current_minutes,
            target_minutes,
        } => handlers::rpo::handle(current_minutes, target_minutes, &ctx),

        Commands::Duration { minutes } => handlers::duration::handle(minutes, &ctx),

        Commands::Codes { category } => handlers::codes::handle(category, &ctx),
    }
}

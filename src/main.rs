use anyhow::Result;
use clap::Parser;
use metricmap::cli::{Cli, Commands};
use metricmap::commands::analyze::AnalyzeConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            lint,
            linter,
            recursion_limit,
            config,
        } => metricmap::commands::analyze::handle_analyze(AnalyzeConfig {
            path,
            format: format.into(),
            output,
            lint,
            linter,
            recursion_limit,
            config,
        }),
        Commands::Init { force } => metricmap::commands::init::init_config(force),
    }
}

//! DocuMind CLI entry point: format model responses, inspect the artifact cache.

mod cli;
mod run;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, CacheSubcommand, Commands};

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    let config = documind::config::load();

    let result = match &args.command {
        None => run::run_format(&args),
        Some(Commands::Cache { subcommand }) => match subcommand {
            CacheSubcommand::List { kind } => run::run_cache_list(&config, kind.as_deref()),
            CacheSubcommand::Clear { kind } => run::run_cache_clear(&config, kind),
        },
        Some(Commands::Config) => {
            run::run_config(&config);
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            let name = cmd.get_name().to_string();
            cli::generate(*shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

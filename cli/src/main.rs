#![deny(missing_docs)]

//! # Stubgen CLI
//!
//! Command Line Interface for generating FastAPI service stubs from OpenAPI.
//!
//! Supported Commands:
//! - `generate`: OpenAPI -> Pydantic models + FastAPI routers + app wiring.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use stubgen_core::AppResult;

mod generate;
mod logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI -> FastAPI stub generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate models, routers and app wiring into a project tree.
    Generate(generate::GenerateArgs),
}

fn run(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::Generate(args) => {
            generate::execute(args)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("stubgen: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "stubgen",
            "generate",
            "--openapi-path",
            "docs/openapi.json",
            "--generate",
            "n",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command;
        assert_eq!(args.openapi_path.as_deref(), Some(std::path::Path::new("docs/openapi.json")));
        assert_eq!(args.generate, Some(false));
    }
}

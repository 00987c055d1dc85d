//! Persona Quiz CLI
//!
//! # Commands
//!
//! - `match <answer>...`: aggregate answers and print the matched persona
//! - `optimize`: search for trait weights that diversify persona outcomes
//!
//! Configuration comes from `PERSONA_QUIZ__*` environment variables; logs go
//! to stderr and results to stdout as JSON.

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{error, warn};

use persona_quiz::adapters::FsQuizDataSource;
use persona_quiz::application::{
    MatchPersonaCommand, MatchPersonaHandler, OptimizeWeightsCommand, OptimizeWeightsHandler,
};
use persona_quiz::config::AppConfig;
use persona_quiz::domain::foundation::ErrorCode;
use persona_quiz::domain::persona::{Persona, SharedSelectionState};
use persona_quiz::telemetry::init_tracing;

/// Persona Quiz - match quiz answers to personas
#[derive(Parser)]
#[command(name = "persona-quiz")]
#[command(version)]
#[command(about = "Match quiz answers to personas and tune trait weights")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a set of answers to a persona
    Match {
        /// Answer texts, one per question
        #[arg(required = true)]
        answers: Vec<String>,
    },
    /// Search for trait weights that spread selections across personas
    Optimize {
        /// Override the configured number of hill-climbing iterations
        #[arg(long)]
        iterations: Option<usize>,
        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "persona-quiz failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.telemetry)?;

    let source = Arc::new(FsQuizDataSource::with_files(
        &config.data.dir,
        config.data.files(),
    ));

    let output = match command {
        Commands::Match { answers } => {
            let handler = MatchPersonaHandler::new(source, Arc::new(SharedSelectionState::new()))
                .with_diversity_boost(config.matching.diversity_boost)
                .with_fetch_timeout(config.data.fetch_timeout());

            match handler.handle(MatchPersonaCommand::new(answers)).await {
                Ok(result) => json!({
                    "name": result.persona.name,
                    "image": result.persona.image,
                    "description": result.persona.description,
                    "score": result.score,
                    "traits": result.traits,
                    "skipped_answers": result.skipped_answers,
                }),
                Err(e) if e.code == ErrorCode::EmptyRoster => {
                    warn!(error = %e, "No personas to match against");
                    let unknown = Persona::unknown();
                    json!({
                        "name": unknown.name,
                        "image": unknown.image,
                        "description": unknown.description,
                        "score": null,
                    })
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Optimize { iterations, seed } => {
            let mut params = config.tuning.params();
            if let Some(iterations) = iterations {
                params.iterations = iterations;
            }

            let handler =
                OptimizeWeightsHandler::new(source).with_fetch_timeout(config.data.fetch_timeout());
            let result = handler
                .handle(OptimizeWeightsCommand {
                    params,
                    seed: seed.or(config.tuning.seed),
                })
                .await?;
            serde_json::to_value(&result)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

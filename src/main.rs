// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use clap::Parser;
use propsearch::{load_properties, load_weights_or_default, parse_query, SearchEngine};
use propsearch::{Result, ScoredCatalog};

mod cli;
use cli::{display, Cli, Commands};

fn main() -> ExitCode {
    // Logs go to stderr so --json output on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Parse { query, json } => {
            let text = query.join(" ");
            let parsed = parse_query(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                display::print_parsed_query(&text, &parsed);
            }
        }

        Commands::Search {
            catalog,
            scores,
            query,
            limit,
            pool,
            weights,
            json,
        } => {
            let weights = load_weights_or_default(weights.as_deref())?;
            let source = ScoredCatalog::load(&catalog, &scores)?;
            let engine = SearchEngine::new(source)
                .with_weights(weights)
                .with_candidate_pool(pool)
                .with_page_size(limit);

            let text = query.join(" ");
            let response = engine.search(&text)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                display::print_results(&text, &response);
            }
        }

        Commands::Check { catalog, weights } => {
            let weights = load_weights_or_default(weights.as_deref())?;
            let properties = load_properties(&catalog)?;
            display::print_check(properties.len(), &weights);
        }
    }

    Ok(())
}

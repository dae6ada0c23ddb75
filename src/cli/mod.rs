// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the propsearch command-line interface.
//!
//! Three subcommands: `parse` to see what the parser extracts from a query,
//! `search` to rank a catalog against precomputed semantic scores, and `check`
//! to validate a catalog and a weights file without searching.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "propsearch",
    about = "Hybrid semantic + structured real-estate search",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the structured intent extracted from a query
    Parse {
        /// Free-text search query
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank catalog listings for a query
    Search {
        /// JSON array of property records
        #[arg(short, long)]
        catalog: PathBuf,

        /// JSON array of {"id", "score"} semantic similarities for this query
        #[arg(short, long)]
        scores: PathBuf,

        /// Free-text search query
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Number of scored candidates to consider before ranking
        #[arg(long, default_value = "50")]
        pool: usize,

        /// JSON file overriding ranking weights
        #[arg(short, long, env = "PROPSEARCH_WEIGHTS")]
        weights: Option<PathBuf>,

        /// Print the JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog and ranking weights
    Check {
        /// JSON array of property records
        #[arg(short, long)]
        catalog: PathBuf,

        /// JSON file overriding ranking weights
        #[arg(short, long, env = "PROPSEARCH_WEIGHTS")]
        weights: Option<PathBuf>,
    },
}

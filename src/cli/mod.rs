// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the searchbox command-line interface.
//!
//! Three subcommands, all running the same controller the browser runs, over
//! in-memory elements: `query` types a query into the box and prints the
//! dropdown, `resolve` shows which corpus URL a page would fetch, and
//! `inspect` summarizes a corpus and the index built from it.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "searchbox",
    about = "Try the site search box against a search.json corpus",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show what the dropdown would contain after typing QUERY
    Query {
        /// Path to search.json
        corpus: PathBuf,

        /// Raw input value, as typed
        query: String,

        /// Print the panel markup instead of a formatted listing
        #[arg(long)]
        html: bool,

        /// Maximum number of results (default: the widget's 8)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Widget options as a JSON file (same keys as mountSearchBox)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the corpus URL a page at PAGE_PATH would fetch
    Resolve {
        /// Page path, e.g. /docs/guide/intro.html
        page_path: String,

        /// Corpus file name
        #[arg(long, default_value = "search.json")]
        index_file: String,
    },

    /// Summarize a corpus and its index
    Inspect {
        /// Path to search.json
        corpus: PathBuf,

        /// Widget options as a JSON file (boosts affect the index)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

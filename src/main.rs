// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use log::LevelFilter;
use std::fs;
use std::path::Path;
use std::time::Instant;

use searchbox::headless::{self, HeadlessWidget};
use searchbox::index::FullTextIndex;
use searchbox::{
    search_index_url, Corpus, FileSource, FullTextBuilder, IndexPhase, IndexSchema, WidgetConfig,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Query {
            corpus,
            query,
            html,
            limit,
            config,
        } => run_query(&corpus, &query, html, limit, config.as_deref()),
        Commands::Resolve {
            page_path,
            index_file,
        } => {
            println!("{}", search_index_url(&page_path, &index_file));
            Ok(())
        }
        Commands::Inspect { corpus, config } => run_inspect(&corpus, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<WidgetConfig, String> {
    let Some(path) = path else {
        return Ok(WidgetConfig::default());
    };
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    WidgetConfig::from_json(&json).map_err(|e| format!("Invalid config JSON: {}", e))
}

/// Mount a headless widget as if the page sat next to `corpus`, and load it.
fn mount_beside(corpus: &Path, config: WidgetConfig) -> Result<HeadlessWidget<FullTextBuilder>, String> {
    let root = corpus.parent().unwrap_or_else(|| Path::new("."));
    let index_file = corpus
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("Not a file path: {}", corpus.display()))?;
    let config = WidgetConfig {
        index_file: index_file.to_string(),
        ..config
    };

    let builder = FullTextBuilder::new(IndexSchema::site(config.title_boost, config.content_boost));
    let mut widget = headless::mount(builder, config);
    headless::load_blocking(&mut widget, &FileSource::new(root), "/index.html");

    if widget.phase() != IndexPhase::Ready {
        return Err(format!("Could not load corpus {}", corpus.display()));
    }
    Ok(widget)
}

fn run_query(
    corpus: &Path,
    query: &str,
    html: bool,
    limit: Option<usize>,
    config: Option<&Path>,
) -> Result<(), String> {
    let mut config = load_config(config)?;
    if let Some(limit) = limit {
        config.max_results = limit;
    }
    let mut widget = mount_beside(corpus, config)?;

    let start = Instant::now();
    widget.on_input(query);
    let elapsed_us = start.elapsed().as_secs_f64() * 1e6;

    if html {
        if let Some((_, panel)) = widget.elements() {
            println!("{}", panel.html);
        }
    } else {
        display::print_view(widget.query(), widget.view(), elapsed_us);
    }
    Ok(())
}

fn run_inspect(corpus_path: &Path, config: Option<&Path>) -> Result<(), String> {
    let config = load_config(config)?;
    let json = fs::read_to_string(corpus_path)
        .map_err(|e| format!("Failed to read {}: {}", corpus_path.display(), e))?;
    let corpus = Corpus::from_json(&json)
        .map_err(|e| format!("Invalid corpus {}: {}", corpus_path.display(), e))?;
    let index = FullTextIndex::build(
        &corpus,
        IndexSchema::site(config.title_boost, config.content_boost),
    );

    display::print_stats(
        &corpus_path.display().to_string(),
        json.len(),
        &corpus,
        &index.stats(),
    );
    Ok(())
}

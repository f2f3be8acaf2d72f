// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use zyros::{highlight, load_site, Error, QueryRequest, SearchConfig, SearchSession};

mod cli;
use cli::{display, Cli, Commands};

/// Log filter from `ZYROS_LOG`, then `RUST_LOG`, else warnings only.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("ZYROS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn main() {
    let cli = Cli::parse();

    // stdout carries results (and JSON), so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let outcome = match cli.command {
        Commands::Search {
            site,
            query,
            category,
            tags,
            sort,
            limit,
            config,
            json,
        } => run_search(SearchArgs {
            site,
            query,
            category,
            tags,
            sort,
            limit,
            config,
            json,
        }),
        Commands::Inspect { site } => run_inspect(&site),
        Commands::Highlight { text, query } => {
            println!("{}", highlight(&text, &query));
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

struct SearchArgs {
    site: PathBuf,
    query: String,
    category: Option<String>,
    tags: Vec<String>,
    sort: Option<String>,
    limit: Option<usize>,
    config: Option<PathBuf>,
    json: bool,
}

fn run_search(args: SearchArgs) -> Result<(), Error> {
    let loaded = load_site(&args.site)?;
    let config = match &args.config {
        Some(path) => SearchConfig::load(path)?,
        None => loaded.config,
    };
    debug!(?config, "effective search config");

    let mut request = QueryRequest::from_raw(
        &args.query,
        args.category.as_deref(),
        &args.tags,
        args.sort.as_deref(),
    )?;
    if args.sort.is_none() {
        request.sort = config.default_sort;
    }
    request.limit = args.limit.or(config.limit);

    let mut session = SearchSession::from_records(loaded.records)?;
    let result = session.search(&request)?;
    info!(query = %request.query, results = result.len(), "search finished");

    if args.json {
        let out = serde_json::to_string_pretty(&result).map_err(Error::Output)?;
        println!("{}", out);
    } else {
        display::print_results(
            loaded.title.as_deref(),
            &request,
            &result,
            &config.highlight.open,
            &config.highlight.close,
        );
    }
    Ok(())
}

fn run_inspect(site: &Path) -> Result<(), Error> {
    let loaded = load_site(site)?;
    display::print_inspect(loaded.title.as_deref(), &loaded.records);
    Ok(())
}

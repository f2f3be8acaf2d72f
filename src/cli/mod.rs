// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the zyros search command-line interface.
//!
//! Three subcommands: `search` to query a site config, `inspect` to see
//! what got loaded, and `highlight` to try the highlighter on any text.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "zyros",
    about = "Search the pages of a zyros site config",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a site config and display ranked results
    Search {
        /// Path to the site config JSON
        site: PathBuf,

        /// Search query (at least 2 characters)
        query: String,

        /// Only pages in this category ("all" disables the filter)
        #[arg(short, long)]
        category: Option<String>,

        /// Only pages with this tag (repeatable, all must match)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Result order: relevance, date or title
        #[arg(short, long)]
        sort: Option<String>,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Search settings JSON, overriding the site's `search` section
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the records loaded from a site config
    Inspect {
        /// Path to the site config JSON
        site: PathBuf,
    },

    /// Highlight query matches in a piece of text
    Highlight {
        text: String,
        query: String,
    },
}

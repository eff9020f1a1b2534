// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - list: discover every animation file and print them grouped by repository
// - show: discover, then print the preview and source links for one file
//
// Options shared by both live in CommonArgs and are flattened into each
// subcommand, so `--config` and `--json` work the same everywhere.
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "html-gallery",
    version,
    about = "Lists HTML animation files across GitHub repositories and builds preview links",
    long_about = "html-gallery fetches the full file tree of each configured GitHub repository \
                  (two API requests per repository), picks out the HTML files and prints them \
                  grouped by repository with raw, preview and source links."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every animation file, grouped by repository
    ///
    /// Example: html-gallery list --search wave
    List {
        #[command(flatten)]
        common: CommonArgs,

        /// Only show files whose name or folder contains this text
        #[arg(long)]
        search: Option<String>,

        /// Skip the GitHub API and list guessed file names instead
        ///
        /// Useful when the hourly rate limit is exhausted. Makes no requests.
        #[arg(long, conflicts_with = "retry")]
        fallback: bool,

        /// If nothing is found, wait 60 seconds and run discovery once more
        #[arg(long)]
        retry: bool,
    },

    /// Show the preview, raw and source links for one file
    ///
    /// Example: html-gallery show Animated-DesignsP1 sub/index.html
    Show {
        /// Repository as `owner/name` or just `name`
        repo: String,

        /// Path of the file inside the repository
        path: String,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// TOML file with owner, repositories and hosts (defaults built in)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Pause between repositories in milliseconds (overrides the config)
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

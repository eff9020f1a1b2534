// src/main.rs
// =============================================================================
// This is the entry point of the html-gallery CLI.
//
// What happens here:
// 1. Set up logging (tracing, to stderr)
// 2. Parse command-line arguments using clap
// 3. Load the gallery configuration
// 4. Run repository discovery (or the fallback listing)
// 5. Print the result as a grouped table or JSON
// 6. Exit with proper code (0 = files listed, 1 = nothing found, 2 = error)
// =============================================================================

mod catalog;       // src/catalog.rs - grouping, lookup and search
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - owner, repositories, hosts
mod discovery;     // src/discovery/ - tree-based file discovery
mod error;         // src/error.rs - typed errors
mod github;        // src/github/ - transport, API types, URLs
mod usage;         // src/usage.rs - request and rate-limit tracking

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands, CommonArgs};
use config::GalleryConfig;
use discovery::{FileRecord, Pacer, TokioPacer};
use error::DiscoveryError;
use github::{ReqwestTransport, Transport};
use usage::UsageCounters;

/// How long `--retry` waits before the second discovery run.
const RETRY_DELAY_SECS: u64 = 60;

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("html_gallery=info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

// Returns:
//   Ok(0) = files listed
//   Ok(1) = nothing found (or the requested file does not exist)
//   Err   = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            common,
            search,
            fallback,
            retry,
        } => handle_list(&common, search.as_deref(), fallback, retry).await,
        Commands::Show { repo, path, common } => handle_show(&common, &repo, &path).await,
    }
}

fn load_config(common: &CommonArgs) -> Result<GalleryConfig> {
    let mut config = GalleryConfig::load(common.config.as_deref())?;
    if let Some(delay_ms) = common.delay_ms {
        config.delay_ms = delay_ms;
    }
    Ok(config)
}

type Outcome = std::result::Result<Vec<FileRecord>, DiscoveryError>;

/// Runs discovery, optionally once more after a countdown when it finds
/// nothing. The returned usage describes the last run only.
async fn discover(
    transport: &dyn Transport,
    pacer: &dyn Pacer,
    config: &GalleryConfig,
    retry: bool,
) -> (Outcome, UsageCounters) {
    let mut usage = UsageCounters::default();

    let mut outcome = discovery::discover_all(transport, pacer, config, &mut usage)
        .await
        .into_files();

    if retry && outcome.is_err() {
        tracing::warn!("Nothing found, waiting {}s before retrying", RETRY_DELAY_SECS);
        retry_countdown(RETRY_DELAY_SECS).await;
        outcome = discovery::discover_all(transport, pacer, config, &mut usage)
            .await
            .into_files();
    }

    (outcome, usage.current())
}

async fn retry_countdown(secs: u64) {
    for remaining in (1..=secs).rev() {
        if remaining % 10 == 0 || remaining <= 5 {
            tracing::info!("Retrying in {}s...", remaining);
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

fn report_nothing_found(e: &DiscoveryError, usage: &UsageCounters) {
    eprintln!("⚠️  {}", e);
    eprintln!("   {}", usage.summary());
    eprintln!(
        "   GitHub allows {} requests/hour without a token. \
         Try again later, or use --fallback for a limited listing.",
        usage.limit
    );
}

// Handles the 'list' subcommand
async fn handle_list(common: &CommonArgs, search: Option<&str>, fallback: bool, retry: bool) -> Result<i32> {
    let config = load_config(common)?;

    let (files, usage) = if fallback {
        (discovery::fallback_all(&config), None)
    } else {
        let transport = ReqwestTransport::new()?;
        match discover(&transport, &TokioPacer, &config, retry).await {
            (Ok(files), usage) => (files, Some(usage)),
            (Err(e), usage) => {
                report_nothing_found(&e, &usage);
                return Ok(1);
            }
        }
    };

    let files: Vec<FileRecord> = match search {
        Some(query) => catalog::search(&files, query).into_iter().cloned().collect(),
        None => files,
    };

    if common.json {
        println!("{}", serde_json::to_string_pretty(&files)?);
    } else {
        print!("{}", render_table(&files, usage.as_ref()));
    }

    Ok(0)
}

/// JSON shape for `show`: the record plus its preview link.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowOutput<'a> {
    #[serde(flatten)]
    record: &'a FileRecord,
    subtitle: String,
    preview_url: String,
}

// Handles the 'show' subcommand
async fn handle_show(common: &CommonArgs, repo: &str, path: &str) -> Result<i32> {
    let config = load_config(common)?;

    let transport = ReqwestTransport::new()?;
    let files = match discover(&transport, &TokioPacer, &config, false).await {
        (Ok(files), _) => files,
        (Err(e), usage) => {
            report_nothing_found(&e, &usage);
            return Ok(1);
        }
    };

    let Some(record) = catalog::find(&files, repo, path) else {
        eprintln!("❌ No file '{}' in repository '{}'", path, repo);
        return Ok(1);
    };

    let output = ShowOutput {
        record,
        subtitle: record.subtitle(),
        preview_url: record.preview_url(&config),
    };

    if common.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", record.display_name);
        println!("{}", output.subtitle);
        println!();
        println!("  Preview: {}", output.preview_url);
        println!("  Raw:     {}", record.raw_content_url);
        println!("  Code:    {}", record.source_view_url);
    }

    Ok(0)
}

// Renders files grouped by repository:
//
//   Animated Designs P1 (2)
//     Index                          (root)      https://github.com/...
//     Orbit                          space       https://github.com/...
//
// followed by the usage summary when the listing came from the API.
fn render_table(files: &[FileRecord], usage: Option<&UsageCounters>) -> String {
    let mut out = String::new();

    if files.is_empty() {
        out.push_str("📁 No animations found\n");
    }

    for group in catalog::group(files) {
        out.push_str(&format!("\n{} ({})\n", group.repository_display_name, group.files.len()));
        for file in &group.files {
            let folder = if file.folder.is_empty() { "(root)" } else { file.folder.as_str() };
            out.push_str(&format!(
                "  {:<30} {:<20} {}\n",
                file.display_name, folder, file.source_view_url
            ));
        }
    }

    out.push('\n');
    out.push_str(&format!("📋 Total: {}\n", files.len()));
    if let Some(usage) = usage {
        out.push_str(&format!("📊 {}\n", usage.summary()));
    }

    out
}

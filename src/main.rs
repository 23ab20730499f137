//! folio CLI
//!
//! Renders a portfolio page from a JSON document.

#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use folio_vdom::config::{DEFAULT_CONFIG_FILE, FolioConfig};
use folio_vdom::host::ConsoleHost;
use folio_vdom::id::PageSeed;
use folio_vdom::loader::Loader;
use folio_vdom::page::Page;
use folio_vdom::template::standard_page;

/// folio - portfolio page renderer
#[derive(Parser, Debug)]
#[command(name = "folio", version)]
#[command(about = "Render a portfolio page from a JSON document", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page and write it as HTML
    Render(RenderArgs),
    /// Load and validate the portfolio document
    Check {
        /// Portfolio document path or URL
        #[arg(short, long)]
        data: Option<String>,
    },
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Portfolio document path or URL (relative paths resolve against the output directory)
    #[arg(short, long)]
    data: Option<String>,

    /// Output HTML file
    #[arg(short, long)]
    out: Option<String>,

    /// Emit stable id attributes
    #[arg(long)]
    emit_ids: bool,

    /// Drop newlines between block elements
    #[arg(long)]
    minify: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = FolioConfig::load(&cli.config)?;

    match cli.command {
        Command::Render(args) => render(config, args).await,
        Command::Check { data } => check(config, data).await,
    }
}

async fn render(mut config: FolioConfig, args: RenderArgs) -> Result<()> {
    if let Some(data) = args.data {
        config.data = data;
    }
    if let Some(out) = args.out {
        config.output = out;
    }
    config.render.emit_ids |= args.emit_ids;
    config.render.minify |= args.minify;

    let output = config.output_path();
    let loader = Loader::new(config.data_source());

    let mut page = Page::new(standard_page(&config.title), PageSeed::from_path(&config.page_path))?;
    let booted = page.boot(&loader, &mut ConsoleHost).await;

    // The page is written either way, as a browser would still show it
    let html = page.to_html(&config.render.to_render_config());
    tokio::fs::write(&output, html)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(output = %output.display(), "page written");

    booted.with_context(|| format!("failed to load {}", loader.source().describe()))
}

async fn check(mut config: FolioConfig, data: Option<String>) -> Result<()> {
    if let Some(data) = data {
        config.data = data;
    }
    // Resolved against the output directory, as in `render`
    let source = config.data_source();
    let described = source.describe();
    let document = Loader::new(source)
        .load()
        .await
        .with_context(|| format!("failed to load {described}"))?;

    println!("{described}: ok ({})", document.personal.name);
    for (section, count) in document.section_counts() {
        println!("  {section:<16} {count}");
    }
    Ok(())
}

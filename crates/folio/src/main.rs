//! folio CLI - documentation site engine.
//!
//! Provides commands for:
//! - `build`: Render the documentation site to static HTML
//! - `search`: Query the search dataset
//! - `toc`: Print the outline of a markdown file
//! - `breadcrumbs`: Print the breadcrumb trail for a URL path
//! - `versions`: List the documentation versions

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BreadcrumbsArgs, BuildArgs, SearchArgs, TocArgs, VersionsArgs};
use output::Output;

/// folio - documentation site engine.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static documentation site.
    Build(BuildArgs),
    /// Search the documentation.
    Search(SearchArgs),
    /// Print the table of contents of a markdown file.
    Toc(TocArgs),
    /// Print the breadcrumb trail for a URL path.
    Breadcrumbs(BreadcrumbsArgs),
    /// List documentation versions.
    Versions(VersionsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Search(args) => args.execute(),
        Commands::Toc(args) => args.execute(),
        Commands::Breadcrumbs(args) => args.execute(),
        Commands::Versions(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

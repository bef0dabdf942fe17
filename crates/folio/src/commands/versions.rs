//! `folio versions` command implementation.

use std::fmt::Write;
use std::path::PathBuf;

use clap::Args;
use folio_config::Config;
use folio_site::{Version, VersionSelector};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the versions command.
#[derive(Args)]
pub(crate) struct VersionsArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl VersionsArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let out = Output::stdout();
        let config = Config::load(self.config.as_deref(), None)?;
        let selector = VersionSelector::new(config.versions.current);

        for (kind, versions) in selector.groups() {
            out.highlight(kind.group_label());
            for version in versions {
                out.info(&format_version(version, selector.selected()));
            }
        }
        Ok(())
    }
}

fn format_version(version: &Version, selected: &str) -> String {
    let marker = if version.id == selected { "*" } else { " " };
    let mut line = format!("{marker} {}", version.name);
    if version.is_latest {
        line.push_str(" [Latest]");
    }
    if version.is_prerelease {
        line.push_str(" [Beta]");
    }
    if let Some(date) = version.release_date {
        let _ = write!(line, " ({date})");
    }
    line
}

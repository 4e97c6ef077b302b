//! CLI command implementations.

pub(crate) mod doc;
pub(crate) mod menu;
pub(crate) mod serve;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_site::Docs;
use folio_storage::FsStorage;
use serde::Serialize;

pub(crate) use doc::DocArgs;
pub(crate) use menu::MenuArgs;
pub(crate) use serve::ServeArgs;

use crate::error::CliError;
use crate::output::Output;

/// Content location arguments shared by the read-only commands.
#[derive(Args)]
pub(crate) struct ContentArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data root holding the docs directory (overrides config).
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

impl ContentArgs {
    /// Load configuration and open the documentation pipeline.
    fn docs(&self) -> Result<Docs, CliError> {
        let cli_settings = CliSettings {
            data_dir: self.data_dir.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        tracing::debug!(data_dir = %config.content_resolved.data_dir.display(), "Opening corpus");
        Ok(Docs::new(Arc::new(FsStorage::new(
            config.content_resolved.data_dir,
        ))))
    }
}

/// Print `value` as pretty JSON on stdout.
fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    Output::new().data(&json)?;
    Ok(())
}

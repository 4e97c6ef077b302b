//! `folio menu` command implementation.

use clap::Args;

use super::{ContentArgs, print_json};
use crate::error::CliError;

/// Arguments for the menu command.
#[derive(Args)]
pub(crate) struct MenuArgs {
    #[command(flatten)]
    content: ContentArgs,
}

impl MenuArgs {
    /// Print the navigation menu as JSON.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let menu = self.content.docs()?.menu()?;
        print_json(&menu)
    }
}

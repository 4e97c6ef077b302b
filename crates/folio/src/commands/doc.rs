//! `folio doc` command implementation.

use clap::Args;

use super::{ContentArgs, print_json};
use crate::error::CliError;

/// Arguments for the doc command.
#[derive(Args)]
pub(crate) struct DocArgs {
    /// Document slug relative to the data root (e.g. `docs/guides/routing`).
    slug: String,

    #[command(flatten)]
    content: ContentArgs,
}

impl DocArgs {
    /// Print a rendered document as JSON.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let doc = self.content.docs()?.doc(&self.slug)?;
        print_json(&doc)
    }
}

//! Command implementations for the dlguard CLI.

mod add;
mod authorize;
mod reconcile;
mod resolve;
mod status;

pub use add::run_add;
pub use authorize::{run_authorize, AuthorizeOpts};
pub use reconcile::run_reconcile;
pub use resolve::{run_resolve, ResolveOpts};
pub use status::run_status;

use anyhow::{anyhow, Result};
use dlguard_core::records::DestinationKind;

pub(crate) fn parse_destination(s: &str) -> Result<DestinationKind> {
    DestinationKind::from_str(s).ok_or_else(|| {
        anyhow!("unknown destination kind: {s} (expected external, file_uri, non_download_manager, or cache_partition)")
    })
}

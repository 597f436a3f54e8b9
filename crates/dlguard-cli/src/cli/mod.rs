//! CLI for the dlguard download destination guard.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dlguard_core::config;
use dlguard_core::records::DownloadDb;

use commands::{
    run_add, run_authorize, run_reconcile, run_resolve, run_status, AuthorizeOpts, ResolveOpts,
};

/// Top-level CLI for the dlguard download destination guard.
#[derive(Debug, Parser)]
#[command(name = "dlguard")]
#[command(about = "dlguard: download destination authorization and record reconciliation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Record a new download row.
    Add {
        /// Owning app uid.
        uid: u32,
        /// Destination kind: external, file_uri, non_download_manager, cache_partition.
        destination: String,
        /// Absolute path the download is written to.
        data_path: String,
        /// Source URL.
        #[arg(long, default_value = "")]
        url: String,
    },

    /// Show all download records.
    Status,

    /// Check whether a caller may write a destination path. Exits non-zero
    /// on denial.
    Authorize(AuthorizeOpts),

    /// Reconcile record ownership against the installed package set.
    Reconcile {
        /// Only reconsider records owned by this uid (a single
        /// package-removal event). Omit to sweep every record.
        #[arg(long)]
        uid: Option<u32>,

        /// Installed package table entries, repeated: `--installed 10001=com.example.app`.
        #[arg(long = "installed", value_name = "UID=PACKAGE")]
        installed: Vec<String>,
    },

    /// Derive the save-file path for a download request.
    Resolve(ResolveOpts),
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Add {
                uid,
                destination,
                data_path,
                url,
            } => {
                let db = DownloadDb::open_default().await?;
                run_add(&db, uid, &destination, &data_path, &url).await?;
            }
            CliCommand::Status => {
                let db = DownloadDb::open_default().await?;
                run_status(&db).await?;
            }
            CliCommand::Authorize(opts) => run_authorize(&cfg, &opts)?,
            CliCommand::Reconcile { uid, installed } => {
                let db = DownloadDb::open_default().await?;
                run_reconcile(&db, &cfg, uid, &installed).await?;
            }
            CliCommand::Resolve(opts) => run_resolve(&cfg, &opts)?,
        }

        Ok(())
    }
}

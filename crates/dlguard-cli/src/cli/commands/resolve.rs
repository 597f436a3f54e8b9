//! `dlguard resolve <url>` – derive the save-file path for a request.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use dlguard_core::config::DlguardConfig;
use dlguard_core::save_file::SaveFileResolver;

use super::parse_destination;

#[derive(Debug, Args)]
pub struct ResolveOpts {
    /// Source URL of the download.
    pub url: String,

    /// Directory the file lands in (defaults to the current directory).
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Explicit destination hint (path or file:// URI).
    #[arg(long)]
    pub hint: Option<String>,

    /// Content-Disposition header value from the response.
    #[arg(long)]
    pub content_disposition: Option<String>,

    /// Content-Location header value from the response.
    #[arg(long)]
    pub content_location: Option<String>,

    /// MIME type of the response body.
    #[arg(long)]
    pub mime: Option<String>,

    /// Destination kind: external, file_uri, non_download_manager, cache_partition.
    #[arg(long, default_value = "external")]
    pub destination: String,
}

pub fn run_resolve(cfg: &DlguardConfig, opts: &ResolveOpts) -> Result<()> {
    let dir = match &opts.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let resolver = SaveFileResolver::new(cfg.max_unique_name_attempts);
    let path = resolver.resolve(
        &dir,
        &opts.url,
        opts.hint.as_deref(),
        opts.content_disposition.as_deref(),
        opts.content_location.as_deref(),
        opts.mime.as_deref(),
        parse_destination(&opts.destination)?,
    )?;

    println!("{}", path.display());
    Ok(())
}

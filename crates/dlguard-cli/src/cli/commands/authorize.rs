//! `dlguard authorize <path>` – check a destination path against the zone
//! policy, with capabilities simulated from flags.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use dlguard_core::config::DlguardConfig;
use dlguard_core::path_authz::{CallerGrant, PathAuthorizer, StaticCapabilityCheck};

#[derive(Debug, Args)]
pub struct AuthorizeOpts {
    /// Destination path to check.
    pub path: String,

    /// Calling package name.
    #[arg(long)]
    pub package: String,

    /// Attribution tag forwarded to the app-op checks.
    #[arg(long)]
    pub attribution_tag: Option<String>,

    /// Caller is exempt from scoped storage.
    #[arg(long)]
    pub legacy: bool,

    /// Restrict the call to the public Download directory.
    #[arg(long)]
    pub downloads_dir_only: bool,

    /// Caller holds the install-packages permission.
    #[arg(long)]
    pub install_permission: bool,

    /// Caller holds the install-packages app-op grant.
    #[arg(long)]
    pub install_app_op: bool,

    /// Caller holds the write-external-storage permission.
    #[arg(long)]
    pub write_permission: bool,

    /// Caller holds the write-external-storage app-op grant.
    #[arg(long)]
    pub write_app_op: bool,
}

pub fn run_authorize(cfg: &DlguardConfig, opts: &AuthorizeOpts) -> Result<()> {
    let check = StaticCapabilityCheck {
        install_permission: opts.install_permission,
        install_app_op: opts.install_app_op,
        write_permission: opts.write_permission,
        write_app_op: opts.write_app_op,
    };
    let grant = CallerGrant::resolve(&check, &opts.package, opts.attribution_tag.as_deref());

    let authorizer = PathAuthorizer::new(cfg.storage_layout());
    // A denial propagates as the command's error so the exit code reflects it.
    authorizer.authorize(
        Path::new(&opts.path),
        &opts.package,
        &grant,
        opts.legacy,
        opts.downloads_dir_only,
    )?;

    println!("allowed: {}", opts.path);
    Ok(())
}

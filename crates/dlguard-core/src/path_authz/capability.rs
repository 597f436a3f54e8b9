//! Caller capabilities and their two grant sources.
//!
//! A capability is satisfied by either a static permission or a revocable
//! app-op style grant. Call sites only ever see the combined answer through
//! [`Capability::granted`].

/// The two capabilities the authorizer ever consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityKind {
    /// Lets installers stage obb files for other packages.
    InstallPackages,
    /// Legacy broad write access to shared storage.
    WriteExternalStorage,
}

/// Answers the two underlying grant sources for a capability. The platform
/// permission service sits behind this trait.
pub trait CapabilityCheck {
    /// Static (install-time) permission check.
    fn has_permission(&self, kind: CapabilityKind) -> bool;

    /// Revocable per-attribution grant check.
    fn has_app_op(
        &self,
        kind: CapabilityKind,
        calling_package: &str,
        attribution_tag: Option<&str>,
    ) -> bool;
}

/// One capability resolved from both sources. Either source suffices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    permission: bool,
    app_op: bool,
}

impl Capability {
    pub fn resolve(
        check: &dyn CapabilityCheck,
        kind: CapabilityKind,
        calling_package: &str,
        attribution_tag: Option<&str>,
    ) -> Self {
        Capability {
            permission: check.has_permission(kind),
            app_op: check.has_app_op(kind, calling_package, attribution_tag),
        }
    }

    /// Construct directly from the two sources (tests, CLI flags).
    pub fn from_sources(permission: bool, app_op: bool) -> Self {
        Capability { permission, app_op }
    }

    pub fn granted(self) -> bool {
        self.permission || self.app_op
    }
}

/// Both capabilities resolved once at the start of an authorization call.
#[derive(Debug, Clone, Copy)]
pub struct CallerGrant {
    pub install_packages: Capability,
    pub write_external_storage: Capability,
}

impl CallerGrant {
    pub fn resolve(
        check: &dyn CapabilityCheck,
        calling_package: &str,
        attribution_tag: Option<&str>,
    ) -> Self {
        CallerGrant {
            install_packages: Capability::resolve(
                check,
                CapabilityKind::InstallPackages,
                calling_package,
                attribution_tag,
            ),
            write_external_storage: Capability::resolve(
                check,
                CapabilityKind::WriteExternalStorage,
                calling_package,
                attribution_tag,
            ),
        }
    }

    /// A caller holding neither capability.
    pub fn none() -> Self {
        CallerGrant {
            install_packages: Capability::from_sources(false, false),
            write_external_storage: Capability::from_sources(false, false),
        }
    }
}

/// Fixed-answer capability check for tests and the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCapabilityCheck {
    pub install_permission: bool,
    pub install_app_op: bool,
    pub write_permission: bool,
    pub write_app_op: bool,
}

impl CapabilityCheck for StaticCapabilityCheck {
    fn has_permission(&self, kind: CapabilityKind) -> bool {
        match kind {
            CapabilityKind::InstallPackages => self.install_permission,
            CapabilityKind::WriteExternalStorage => self.write_permission,
        }
    }

    fn has_app_op(
        &self,
        kind: CapabilityKind,
        _calling_package: &str,
        _attribution_tag: Option<&str>,
    ) -> bool {
        match kind {
            CapabilityKind::InstallPackages => self.install_app_op,
            CapabilityKind::WriteExternalStorage => self.write_app_op,
        }
    }
}

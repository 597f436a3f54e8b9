//! Owner identity resolution seam.
//!
//! The reconciler only needs to know which installed packages (if any) a
//! stored uid still maps to; the platform-specific lookup stays behind this
//! trait.

use std::collections::HashMap;

/// Maps a numeric owner uid to the set of installed package names sharing it.
/// An empty result means the uid no longer belongs to any installed package.
pub trait OwnerResolver {
    fn resolve_owners(&self, uid: u32) -> Vec<String>;
}

/// Table-backed resolver for tests and the CLI.
#[derive(Debug, Clone, Default)]
pub struct StaticOwnerResolver {
    packages: HashMap<u32, Vec<String>>,
}

impl StaticOwnerResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, uid: u32, package: impl Into<String>) {
        self.packages.entry(uid).or_default().push(package.into());
    }
}

impl OwnerResolver for StaticOwnerResolver {
    fn resolve_owners(&self, uid: u32) -> Vec<String> {
        self.packages.get(&uid).cloned().unwrap_or_default()
    }
}

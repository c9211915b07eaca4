//! Installed-package version resolution.
//!
//! Two interchangeable strategies sit behind [`VersionResolver`]: reading
//! the interpreter's `*.dist-info` metadata directly, and shelling out to
//! pip. [`select_resolver`] probes the environment once at startup and
//! picks whichever is usable; the scan pipeline never re-probes.

mod dist_info;
mod pip_cli;

pub use dist_info::{normalize_name, DistInfoResolver};
pub use pip_cli::PipCliResolver;

use std::path::Path;

use crate::manifest::Manifest;
use crate::python;

/// Outcome of looking up one candidate module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exact lookup hit.
    Found { name: String, version: String },
    /// Secondary substring search hit; `name` is the installed package's
    /// reported name, which may differ from the import name.
    Fuzzy { name: String, version: String },
    /// Neither strategy produced a match.
    NotFound,
}

/// A strategy for mapping module names to installed package versions.
pub trait VersionResolver {
    /// Short label for logging which strategy is active.
    fn describe(&self) -> &'static str;

    /// Look up one candidate module name.
    fn resolve(&self, module: &str) -> Resolution;
}

/// Pick a resolver for this environment.
///
/// Prefers the dist-info registry when the interpreter's site-packages
/// can be located; otherwise falls back to the pip CLI.
pub fn select_resolver(python: Option<&Path>) -> Box<dyn VersionResolver> {
    if let Some(python) = python {
        let dirs = python::site_package_dirs(python);
        if !dirs.is_empty() {
            tracing::debug!(
                "resolving versions from {} site-packages dir(s)",
                dirs.len()
            );
            return Box::new(DistInfoResolver::from_dirs(&dirs));
        }
        tracing::debug!("no site-packages found for {}", python.display());
    }

    let pip = python::locate_pip(python);
    if pip.is_none() {
        tracing::warn!("no pip executable found; versions will not resolve");
    }
    Box::new(PipCliResolver::new(pip))
}

/// Resolve every candidate, building the manifest and the not-found list.
pub fn resolve_all(
    candidates: &[String],
    resolver: &dyn VersionResolver,
) -> (Manifest, Vec<String>) {
    let mut manifest = Manifest::new();
    let mut not_found = Vec::new();

    for module in candidates {
        match resolver.resolve(module) {
            Resolution::Found { name, version } => {
                manifest.insert(name, version);
            }
            Resolution::Fuzzy { name, version } => {
                tracing::info!("found `{name}`, adding it to the manifest");
                manifest.insert(name, version);
            }
            Resolution::NotFound => {
                tracing::warn!("failed to find a candidate for `{module}`");
                not_found.push(module.clone());
            }
        }
    }

    (manifest, not_found)
}

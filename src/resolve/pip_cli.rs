//! Version resolution by shelling out to pip.
//!
//! Used when the interpreter's site-packages cannot be located. `pip show`
//! answers the primary lookup; `pip list` backs the fuzzy secondary search.

use std::path::PathBuf;
use std::process::Command;

use regex::Regex;

use super::{normalize_name, Resolution, VersionResolver};

/// Resolver that scrapes pip subcommand output.
#[derive(Debug)]
pub struct PipCliResolver {
    pip: Option<PathBuf>,
}

impl PipCliResolver {
    /// Create a resolver around a located pip executable, if any.
    ///
    /// With no executable every lookup reports [`Resolution::NotFound`].
    pub fn new(pip: Option<PathBuf>) -> Self {
        Self { pip }
    }

    fn run_pip(&self, args: &[&str]) -> Option<String> {
        let pip = self.pip.as_ref()?;
        let output = Command::new(pip).args(args).output().ok()?;
        if !output.status.success() {
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VersionResolver for PipCliResolver {
    fn describe(&self) -> &'static str {
        "pip CLI"
    }

    fn resolve(&self, module: &str) -> Resolution {
        if let Some(version) = self
            .run_pip(&["show", module])
            .as_deref()
            .and_then(parse_show_version)
        {
            return Resolution::Found {
                name: module.to_string(),
                version,
            };
        }
        tracing::warn!(
            "could not find `{module}`, searching installed packages for the best candidate"
        );
        if let Some(listing) = self.run_pip(&["list"]) {
            if let Some((name, version)) = search_listing(&listing, module) {
                return Resolution::Fuzzy { name, version };
            }
        }
        Resolution::NotFound
    }
}

/// Scrape the `Version:` line from `pip show` output.
fn parse_show_version(output: &str) -> Option<String> {
    let re = Regex::new(r"(?m)^Version:[ \t]*(\S+)").ok()?;
    Some(re.captures(output)?.get(1)?.as_str().to_string())
}

/// Find the first `pip list` row whose package name contains `module`.
///
/// Skips the header rows pip prints above the table.
fn search_listing(listing: &str, module: &str) -> Option<(String, String)> {
    let needle = normalize_name(module);
    if needle.is_empty() {
        return None;
    }
    for line in listing.lines() {
        let mut parts = line.split_whitespace();
        let (Some(name), Some(version)) = (parts.next(), parts.next()) else {
            continue;
        };
        if name == "Package" || name.starts_with('-') {
            continue;
        }
        if normalize_name(name).contains(&needle) {
            return Some((name.to_string(), version.to_string()));
        }
    }
    None
}

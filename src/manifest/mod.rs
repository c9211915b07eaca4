//! Requirement collection and manifest rendering.
//!
//! A [`Manifest`] is the ordered set of resolved dependencies a scan
//! produced; rendering turns it into `requirements.txt` lines.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{ReqscanError, Result};

/// Version-comparison token written between name and version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Specifier {
    /// Minimum version (`>=`).
    #[default]
    #[value(name = ">=")]
    GreaterEq,
    /// Exact pin (`==`).
    #[value(name = "==")]
    Exact,
    /// Compatible release (`~=`).
    #[value(name = "~=")]
    Compatible,
}

impl Specifier {
    /// The literal token used in manifest lines.
    pub fn token(self) -> &'static str {
        match self {
            Specifier::GreaterEq => ">=",
            Specifier::Exact => "==",
            Specifier::Compatible => "~=",
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A single resolved dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Package name as reported by the resolver.
    pub name: String,
    /// Installed version; empty when pinning is disabled.
    pub version: String,
}

/// Ordered set of requirements, keyed by package name.
///
/// Insertion order is preserved and the first resolution of a name wins;
/// later duplicates (e.g. two modules fuzzy-matching the same package)
/// are ignored.
#[derive(Debug, Default)]
pub struct Manifest {
    entries: Vec<Requirement>,
    seen: HashSet<String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a requirement unless the name was already recorded.
    ///
    /// Returns whether the entry was added.
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) -> bool {
        let name = name.into();
        if !self.seen.insert(name.clone()) {
            return false;
        }
        self.entries.push(Requirement {
            name,
            version: version.into(),
        });
        true
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in first-resolution order.
    pub fn entries(&self) -> &[Requirement] {
        &self.entries
    }

    /// Render manifest lines, one per entry, each with a trailing newline.
    ///
    /// Entries without a version render as a bare name regardless of
    /// `with_version`; no header or footer is emitted.
    pub fn render(&self, specifier: Specifier, with_version: bool) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            if with_version && !entry.version.is_empty() {
                out.push_str(&entry.name);
                out.push_str(specifier.token());
                out.push_str(&entry.version);
            } else {
                out.push_str(&entry.name);
            }
            out.push('\n');
        }
        out
    }

    /// Write the rendered manifest to `path`, UTF-8.
    pub fn write(&self, path: &Path, specifier: Specifier, with_version: bool) -> Result<()> {
        fs::write(path, self.render(specifier, with_version)).map_err(|err| {
            ReqscanError::ManifestWriteError {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn specifier_tokens() {
        assert_eq!(Specifier::GreaterEq.token(), ">=");
        assert_eq!(Specifier::Exact.token(), "==");
        assert_eq!(Specifier::Compatible.token(), "~=");
        assert_eq!(Specifier::Exact.to_string(), "==");
    }

    #[test]
    fn exact_specifier_renders_pinned_line() {
        let mut manifest = Manifest::new();
        manifest.insert("foo", "1.2.3");
        assert_eq!(manifest.render(Specifier::Exact, true), "foo==1.2.3\n");
    }

    #[test]
    fn default_specifier_renders_minimum_version() {
        let mut manifest = Manifest::new();
        manifest.insert("requests", "2.31.0");
        assert_eq!(
            manifest.render(Specifier::GreaterEq, true),
            "requests>=2.31.0\n"
        );
    }

    #[test]
    fn without_version_renders_bare_names() {
        let mut manifest = Manifest::new();
        manifest.insert("foo", "1.2.3");
        manifest.insert("bar", "");
        assert_eq!(manifest.render(Specifier::GreaterEq, false), "foo\nbar\n");
    }

    #[test]
    fn empty_version_renders_bare_even_with_versions_on() {
        let mut manifest = Manifest::new();
        manifest.insert("foo", "");
        assert_eq!(manifest.render(Specifier::GreaterEq, true), "foo\n");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut manifest = Manifest::new();
        manifest.insert("zebra", "1.0");
        manifest.insert("alpha", "2.0");
        let names: Vec<_> = manifest.entries().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["zebra", "alpha"]);
    }

    #[test]
    fn first_resolution_wins() {
        let mut manifest = Manifest::new();
        assert!(manifest.insert("foo", "1.0"));
        assert!(!manifest.insert("foo", "2.0"));
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.entries()[0].version, "1.0");
    }

    #[test]
    fn empty_manifest_renders_nothing() {
        let manifest = Manifest::new();
        assert!(manifest.is_empty());
        assert_eq!(manifest.render(Specifier::GreaterEq, true), "");
    }

    #[test]
    fn write_produces_byte_identical_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");

        let mut manifest = Manifest::new();
        manifest.insert("foo", "1.2.3");
        manifest.insert("bar", "0.9");

        manifest.write(&path, Specifier::GreaterEq, true).unwrap();
        let first = std::fs::read(&path).unwrap();
        manifest.write(&path, Specifier::GreaterEq, true).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, b"foo>=1.2.3\nbar>=0.9\n");
    }

    #[test]
    fn write_into_missing_directory_fails_with_manifest_error() {
        let manifest = Manifest::new();
        let err = manifest
            .write(
                Path::new("/nonexistent/dir/requirements.txt"),
                Specifier::GreaterEq,
                true,
            )
            .unwrap_err();
        assert!(matches!(err, ReqscanError::ManifestWriteError { .. }));
    }
}

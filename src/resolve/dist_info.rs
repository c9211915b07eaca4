//! Version resolution from installed `*.dist-info` metadata.
//!
//! pip records every installed distribution as a `<name>-<version>.dist-info`
//! directory whose `METADATA` file carries `Name:` and `Version:` headers.
//! Indexing those directories answers version queries without spawning a
//! single subprocess.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::{Resolution, VersionResolver};

/// An installed distribution read from site-packages.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Distribution {
    name: String,
    version: String,
}

/// Resolver backed by an index of installed dist-info metadata.
#[derive(Debug, Default)]
pub struct DistInfoResolver {
    /// Sorted by name so fuzzy matches are deterministic.
    distributions: Vec<Distribution>,
    /// Normalized name to index into `distributions`.
    by_name: HashMap<String, usize>,
}

/// PEP 503 name normalization: lowercase, with runs of `-`, `_`, and `.`
/// collapsed to a single `-`.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = false;
    for c in name.chars() {
        if c == '-' || c == '_' || c == '.' {
            if !last_was_sep {
                out.push('-');
            }
            last_was_sep = true;
        } else {
            out.extend(c.to_lowercase());
            last_was_sep = false;
        }
    }
    out
}

impl DistInfoResolver {
    /// Index every dist-info directory found under `dirs`.
    pub fn from_dirs<P: AsRef<Path>>(dirs: &[P]) -> Self {
        let mut distributions = Vec::new();
        for dir in dirs {
            collect_distributions(dir.as_ref(), &mut distributions);
        }
        distributions.sort_by(|a, b| a.name.cmp(&b.name));

        let mut by_name = HashMap::new();
        for (idx, dist) in distributions.iter().enumerate() {
            by_name.entry(normalize_name(&dist.name)).or_insert(idx);
        }

        tracing::debug!("indexed {} installed distribution(s)", distributions.len());
        Self {
            distributions,
            by_name,
        }
    }

    fn lookup(&self, module: &str) -> Option<&Distribution> {
        self.by_name
            .get(&normalize_name(module))
            .map(|&idx| &self.distributions[idx])
    }

    /// First distribution whose normalized name contains the module name.
    fn fuzzy(&self, module: &str) -> Option<&Distribution> {
        let needle = normalize_name(module);
        if needle.is_empty() {
            return None;
        }
        self.distributions
            .iter()
            .find(|dist| normalize_name(&dist.name).contains(&needle))
    }
}

impl VersionResolver for DistInfoResolver {
    fn describe(&self) -> &'static str {
        "dist-info metadata"
    }

    fn resolve(&self, module: &str) -> Resolution {
        if let Some(dist) = self.lookup(module) {
            return Resolution::Found {
                name: dist.name.clone(),
                version: dist.version.clone(),
            };
        }
        tracing::warn!(
            "could not find `{module}`, searching installed packages for the best candidate"
        );
        match self.fuzzy(module) {
            Some(dist) => Resolution::Fuzzy {
                name: dist.name.clone(),
                version: dist.version.clone(),
            },
            None => Resolution::NotFound,
        }
    }
}

/// Scan one site-packages directory for dist-info metadata.
fn collect_distributions(dir: &Path, out: &mut Vec<Distribution>) {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::debug!("cannot read {}", dir.display());
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(dir_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !dir_name.ends_with(".dist-info") || !path.is_dir() {
            continue;
        }
        match fs::read_to_string(path.join("METADATA"))
            .ok()
            .as_deref()
            .and_then(parse_metadata)
        {
            Some(dist) => out.push(dist),
            None => tracing::debug!("no usable METADATA in {}", path.display()),
        }
    }
}

/// Pull `Name:` and `Version:` out of a METADATA header block.
fn parse_metadata(content: &str) -> Option<Distribution> {
    let mut name = None;
    let mut version = None;
    for line in content.lines() {
        // Headers end at the first blank line.
        if line.is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("Name:") {
            name.get_or_insert_with(|| value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("Version:") {
            version.get_or_insert_with(|| value.trim().to_string());
        }
        if name.is_some() && version.is_some() {
            break;
        }
    }
    Some(Distribution {
        name: name?,
        version: version?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn install_dist(site: &Path, dir_name: &str, metadata: &str) {
        let dist = site.join(dir_name);
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join("METADATA"), metadata).unwrap();
    }

    fn sample_site() -> TempDir {
        let temp = TempDir::new().unwrap();
        install_dist(
            temp.path(),
            "requests-2.31.0.dist-info",
            "Metadata-Version: 2.1\nName: requests\nVersion: 2.31.0\n\nbody\n",
        );
        install_dist(
            temp.path(),
            "PyYAML-6.0.1.dist-info",
            "Metadata-Version: 2.1\nName: PyYAML\nVersion: 6.0.1\n",
        );
        install_dist(
            temp.path(),
            "typing_extensions-4.9.0.dist-info",
            "Name: typing_extensions\nVersion: 4.9.0\n",
        );
        temp
    }

    #[test]
    fn normalize_name_pep503() {
        assert_eq!(normalize_name("PyYAML"), "pyyaml");
        assert_eq!(normalize_name("typing_extensions"), "typing-extensions");
        assert_eq!(normalize_name("zope.interface"), "zope-interface");
        assert_eq!(normalize_name("a-_.b"), "a-b");
    }

    #[test]
    fn exact_lookup_hits() {
        let site = sample_site();
        let resolver = DistInfoResolver::from_dirs(&[site.path()]);

        let resolution = resolver.resolve("requests");
        assert_eq!(
            resolution,
            Resolution::Found {
                name: "requests".to_string(),
                version: "2.31.0".to_string(),
            }
        );
    }

    #[test]
    fn lookup_is_name_normalization_insensitive() {
        let site = sample_site();
        let resolver = DistInfoResolver::from_dirs(&[site.path()]);

        // Import name `yaml` won't hit, but `pyyaml` under any spelling will.
        assert!(matches!(
            resolver.resolve("PyYAML"),
            Resolution::Found { .. }
        ));
        assert!(matches!(
            resolver.resolve("pyyaml"),
            Resolution::Found { .. }
        ));
        assert!(matches!(
            resolver.resolve("typing.extensions"),
            Resolution::Found { .. }
        ));
    }

    #[test]
    fn fuzzy_search_finds_substring_match() {
        let site = sample_site();
        let resolver = DistInfoResolver::from_dirs(&[site.path()]);

        let resolution = resolver.resolve("yaml");
        assert_eq!(
            resolution,
            Resolution::Fuzzy {
                name: "PyYAML".to_string(),
                version: "6.0.1".to_string(),
            }
        );
    }

    #[test]
    fn fuzzy_search_is_deterministic() {
        let temp = TempDir::new().unwrap();
        install_dist(temp.path(), "bbb-tool-1.0.dist-info", "Name: bbb-tool\nVersion: 1.0\n");
        install_dist(temp.path(), "aaa-tool-2.0.dist-info", "Name: aaa-tool\nVersion: 2.0\n");
        let resolver = DistInfoResolver::from_dirs(&[temp.path()]);

        // Sorted order means aaa-tool always wins the substring race.
        assert_eq!(
            resolver.resolve("tool"),
            Resolution::Fuzzy {
                name: "aaa-tool".to_string(),
                version: "2.0".to_string(),
            }
        );
    }

    #[test]
    fn unknown_module_is_not_found() {
        let site = sample_site();
        let resolver = DistInfoResolver::from_dirs(&[site.path()]);

        assert_eq!(resolver.resolve("zz_absent_dep"), Resolution::NotFound);
    }

    #[test]
    fn missing_directories_are_skipped() {
        let resolver = DistInfoResolver::from_dirs(&[PathBuf::from("/nonexistent/site-packages")]);
        assert_eq!(resolver.resolve("anything"), Resolution::NotFound);
    }

    #[test]
    fn dist_info_without_metadata_is_ignored() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("broken-1.0.dist-info")).unwrap();
        install_dist(temp.path(), "ok-1.0.dist-info", "Name: ok\nVersion: 1.0\n");
        let resolver = DistInfoResolver::from_dirs(&[temp.path()]);

        assert!(matches!(resolver.resolve("ok"), Resolution::Found { .. }));
        assert_eq!(resolver.resolve("broken"), Resolution::NotFound);
    }

    #[test]
    fn parse_metadata_reads_header_block_only() {
        let dist = parse_metadata("Name: demo\nVersion: 0.1\n\nName: not-this\n").unwrap();
        assert_eq!(dist.name, "demo");
        assert_eq!(dist.version, "0.1");
    }

    #[test]
    fn parse_metadata_requires_both_fields() {
        assert!(parse_metadata("Name: demo\n").is_none());
        assert!(parse_metadata("Version: 0.1\n").is_none());
        assert!(parse_metadata("").is_none());
    }
}

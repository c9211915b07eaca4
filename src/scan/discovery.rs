//! Source-file discovery.
//!
//! Walks the project tree once, collecting every `*.py` file plus the set
//! of local module names those files define. The local set is what keeps a
//! project's own modules out of the generated manifest.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// The scanned source tree: files to read and the names they define.
#[derive(Debug, Default)]
pub struct SourceTree {
    /// Python source files, in deterministic walk order.
    pub files: Vec<PathBuf>,
    /// Module names considered local to the project: file stems plus
    /// package directories containing an `__init__.py`.
    pub local_modules: HashSet<String>,
}

/// Recursively collect Python sources under `root`.
///
/// Unreadable entries are skipped with a warning; discovery itself never
/// fails.
pub fn discover(root: &Path) -> SourceTree {
    let mut tree = SourceTree::default();

    let entries = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {err}");
                None
            }
        });

    for entry in entries {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("py") {
            continue;
        }

        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            tree.local_modules.insert(stem.to_string());
        }
        // A package directory is importable under its own name.
        if entry.file_name() == "__init__.py" {
            if let Some(package) = path
                .parent()
                .and_then(Path::file_name)
                .and_then(|name| name.to_str())
            {
                tree.local_modules.insert(package.to_string());
            }
        }

        tree.files.push(path.to_path_buf());
    }

    tracing::debug!(
        "discovered {} Python file(s), {} local module name(s)",
        tree.files.len(),
        tree.local_modules.len()
    );
    tree
}

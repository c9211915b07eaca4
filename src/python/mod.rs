//! Python interpreter discovery and introspection.
//!
//! Everything the scanner knows about the local Python environment comes
//! from here: which interpreter is on PATH, what version it reports, where
//! its site-packages directories live, and where a usable pip executable
//! sits. All lookups are best-effort; a missing interpreter degrades the
//! caller to bundled defaults rather than failing the run.

pub mod stdlib;

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use regex::Regex;

/// Interpreter names probed on PATH, in preference order.
const INTERPRETER_NAMES: &[&str] = &["python3", "python"];

/// Pip executable names probed next to the interpreter and on PATH.
const PIP_NAMES: &[&str] = &["pip3", "pip"];

/// A Python major.minor version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command — `which` behavior varies across systems and
/// is sometimes a shell builtin with inconsistent error handling.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Locate a Python interpreter on PATH, preferring `python3`.
pub fn locate_interpreter() -> Option<PathBuf> {
    let path_entries = parse_system_path();
    INTERPRETER_NAMES
        .iter()
        .find_map(|name| resolve_tool_path(name, &path_entries))
}

/// Ask an interpreter for its major.minor version.
pub fn interpreter_version(python: &Path) -> Option<PythonVersion> {
    let output = Command::new(python).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    // Python 2 and early 3.x printed the banner on stderr.
    let banner = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    parse_version_banner(&banner)
}

/// Extract `major.minor` from a `Python X.Y.Z` banner.
pub(crate) fn parse_version_banner(banner: &str) -> Option<PythonVersion> {
    let re = Regex::new(r"(\d+)\.(\d+)").ok()?;
    let caps = re.captures(banner)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    Some(PythonVersion { major, minor })
}

/// One-liner handed to the interpreter to print its site-packages dirs.
const SITE_SCRIPT: &str =
    "import site; print('\\n'.join(list(site.getsitepackages()) + [site.getusersitepackages()]))";

/// Enumerate the interpreter's site-packages directories.
///
/// Returns only directories that exist on disk. An empty result means the
/// dist-info registry is unavailable and callers should fall back to the
/// pip CLI.
pub fn site_package_dirs(python: &Path) -> Vec<PathBuf> {
    let Ok(output) = Command::new(python).args(["-c", SITE_SCRIPT]).output() else {
        return Vec::new();
    };
    if !output.status.success() {
        return Vec::new();
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .filter(|dir| dir.is_dir())
        .collect()
}

/// Locate a pip executable.
///
/// Looks next to the interpreter first (`pip3` preferred over `pip`), the
/// way an installed environment lays them out, then falls back to PATH.
pub fn locate_pip(python: Option<&Path>) -> Option<PathBuf> {
    if let Some(parent) = python.and_then(|p| p.parent()) {
        for name in PIP_NAMES {
            let candidate = parent.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    let path_entries = parse_system_path();
    PIP_NAMES
        .iter()
        .find_map(|name| resolve_tool_path(name, &path_entries))
}

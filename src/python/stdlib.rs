//! Bundled standard-library reference lists.
//!
//! Top-level module names shipped with CPython, per minor version, used to
//! keep built-in imports out of the generated manifest. The tables cover
//! 3.8 through 3.13; anything else falls back to [`DEFAULT_VERSION`].
//!
//! Only top-level names matter here: candidates are truncated to their
//! first dotted segment before filtering.

use std::collections::HashSet;

use super::PythonVersion;

/// Reference version used when detection fails or is unsupported.
pub const DEFAULT_VERSION: PythonVersion = PythonVersion { major: 3, minor: 9 };

/// Modules present in every supported version (3.8 through 3.13).
const COMMON: &[&str] = &[
    "__future__",
    "_thread",
    "abc",
    "antigravity",
    "argparse",
    "array",
    "ast",
    "asyncio",
    "atexit",
    "base64",
    "bdb",
    "binascii",
    "bisect",
    "builtins",
    "bz2",
    "cProfile",
    "calendar",
    "cmath",
    "cmd",
    "code",
    "codecs",
    "codeop",
    "collections",
    "colorsys",
    "compileall",
    "concurrent",
    "configparser",
    "contextlib",
    "contextvars",
    "copy",
    "copyreg",
    "csv",
    "ctypes",
    "curses",
    "dataclasses",
    "datetime",
    "dbm",
    "decimal",
    "difflib",
    "dis",
    "doctest",
    "email",
    "encodings",
    "ensurepip",
    "enum",
    "errno",
    "faulthandler",
    "fcntl",
    "filecmp",
    "fileinput",
    "fnmatch",
    "fractions",
    "ftplib",
    "functools",
    "gc",
    "getopt",
    "getpass",
    "gettext",
    "glob",
    "grp",
    "gzip",
    "hashlib",
    "heapq",
    "hmac",
    "html",
    "http",
    "idlelib",
    "imaplib",
    "importlib",
    "inspect",
    "io",
    "ipaddress",
    "itertools",
    "json",
    "keyword",
    "linecache",
    "locale",
    "logging",
    "lzma",
    "mailbox",
    "marshal",
    "math",
    "mimetypes",
    "mmap",
    "modulefinder",
    "msvcrt",
    "multiprocessing",
    "netrc",
    "ntpath",
    "numbers",
    "operator",
    "optparse",
    "os",
    "pathlib",
    "pdb",
    "pickle",
    "pickletools",
    "pkgutil",
    "platform",
    "plistlib",
    "poplib",
    "posix",
    "posixpath",
    "pprint",
    "profile",
    "pstats",
    "pty",
    "pwd",
    "py_compile",
    "pyclbr",
    "pydoc",
    "queue",
    "quopri",
    "random",
    "re",
    "readline",
    "reprlib",
    "resource",
    "rlcompleter",
    "runpy",
    "sched",
    "secrets",
    "select",
    "selectors",
    "shelve",
    "shlex",
    "shutil",
    "signal",
    "site",
    "smtplib",
    "socket",
    "socketserver",
    "sqlite3",
    "ssl",
    "stat",
    "statistics",
    "string",
    "stringprep",
    "struct",
    "subprocess",
    "symtable",
    "sys",
    "sysconfig",
    "syslog",
    "tabnanny",
    "tarfile",
    "tempfile",
    "termios",
    "test",
    "textwrap",
    "this",
    "threading",
    "time",
    "timeit",
    "tkinter",
    "token",
    "tokenize",
    "trace",
    "traceback",
    "tracemalloc",
    "tty",
    "turtle",
    "turtledemo",
    "types",
    "typing",
    "unicodedata",
    "unittest",
    "urllib",
    "uuid",
    "venv",
    "warnings",
    "wave",
    "weakref",
    "webbrowser",
    "winreg",
    "winsound",
    "wsgiref",
    "xml",
    "xmlrpc",
    "zipapp",
    "zipfile",
    "zipimport",
    "zlib",
];

/// Present only in 3.8.
const ONLY_3_8: &[&str] = &["dummy_threading"];

/// Added in 3.9.
const ADDED_IN_3_9: &[&str] = &["graphlib", "zoneinfo"];

/// Added in 3.11.
const ADDED_IN_3_11: &[&str] = &["tomllib"];

/// Removed in 3.10 (present through 3.9).
const REMOVED_IN_3_10: &[&str] = &["formatter", "parser", "symbol"];

/// Removed in 3.11 (present through 3.10).
const REMOVED_IN_3_11: &[&str] = &["binhex"];

/// Removed in 3.12 (present through 3.11).
const REMOVED_IN_3_12: &[&str] = &["asynchat", "asyncore", "distutils", "imp", "smtpd"];

/// Dead batteries removed by PEP 594 in 3.13 (present through 3.12).
const REMOVED_IN_3_13: &[&str] = &[
    "aifc",
    "audioop",
    "cgi",
    "cgitb",
    "chunk",
    "crypt",
    "imghdr",
    "lib2to3",
    "mailcap",
    "msilib",
    "nis",
    "nntplib",
    "ossaudiodev",
    "pipes",
    "sndhdr",
    "spwd",
    "sunau",
    "telnetlib",
    "uu",
    "xdrlib",
];

/// Standard-library module set for one Python version.
#[derive(Debug)]
pub struct StdlibIndex {
    version: PythonVersion,
    modules: HashSet<&'static str>,
}

impl StdlibIndex {
    /// Build the module set for a supported version (3.8 through 3.13).
    pub fn for_version(version: PythonVersion) -> Option<Self> {
        if version.major != 3 || !(8..=13).contains(&version.minor) {
            return None;
        }

        let mut modules: HashSet<&'static str> = COMMON.iter().copied().collect();
        if version.minor == 8 {
            modules.extend(ONLY_3_8);
        }
        if version.minor >= 9 {
            modules.extend(ADDED_IN_3_9);
        }
        if version.minor >= 11 {
            modules.extend(ADDED_IN_3_11);
        }
        if version.minor < 10 {
            modules.extend(REMOVED_IN_3_10);
        }
        if version.minor < 11 {
            modules.extend(REMOVED_IN_3_11);
        }
        if version.minor < 12 {
            modules.extend(REMOVED_IN_3_12);
        }
        if version.minor < 13 {
            modules.extend(REMOVED_IN_3_13);
        }

        Some(Self { version, modules })
    }

    /// Build the module set for a detected version, falling back to
    /// [`DEFAULT_VERSION`] when detection failed or the version has no
    /// bundled list.
    pub fn with_fallback(detected: Option<PythonVersion>) -> Self {
        match detected {
            Some(version) => {
                if let Some(index) = Self::for_version(version) {
                    return index;
                }
                tracing::warn!(
                    "no bundled standard-library list for Python {version}, \
                     defaulting to {DEFAULT_VERSION}"
                );
            }
            None => {
                tracing::warn!("could not detect a Python version, defaulting to {DEFAULT_VERSION}");
            }
        }
        Self::for_version(DEFAULT_VERSION).unwrap_or_else(|| Self {
            version: DEFAULT_VERSION,
            modules: COMMON.iter().copied().collect(),
        })
    }

    /// The version this index describes.
    pub fn version(&self) -> PythonVersion {
        self.version
    }

    /// Whether `module` is a standard-library module in this version.
    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains(module)
    }
}

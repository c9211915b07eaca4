//! Import-statement extraction and module-name normalization.
//!
//! Line matching is deliberately naive: any line containing the substring
//! `import` is treated as a potential import statement, so comments and
//! string literals can match too. Normalization compensates by discarding
//! anything that does not reduce to a plausible top-level module name.

/// Lines of `content` that look like import statements.
pub fn import_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| line.contains("import"))
        .map(str::trim_end)
        .collect()
}

/// All candidate module names from one file's contents, in line order.
pub fn candidates_in_source(content: &str) -> Vec<String> {
    import_lines(content)
        .iter()
        .flat_map(|line| candidates_in_line(line))
        .collect()
}

/// Candidate top-level module names mentioned by a single line.
///
/// `from X import Y` yields the token after `from`; any other form yields
/// the names after the last `import` token, one candidate per
/// comma-separated entry.
pub fn candidates_in_line(line: &str) -> Vec<String> {
    let statement = line.trim();

    if let Some(rest) = statement.strip_prefix("from ") {
        let module = rest.split(" import").next().unwrap_or(rest);
        return normalize(module).into_iter().collect();
    }

    let Some(idx) = statement.rfind("import ") else {
        return Vec::new();
    };
    statement[idx + "import ".len()..]
        .split(',')
        .filter_map(normalize)
        .collect()
}

/// Reduce a raw extracted token to a top-level module name.
///
/// Strips inline comments, `as` aliases, relative-import dots, and
/// submodule paths, then rejects anything that is not a bare identifier.
fn normalize(raw: &str) -> Option<String> {
    let mut name = raw.trim();

    if let Some(idx) = name.find('#') {
        name = name[..idx].trim_end();
    }
    if let Some(idx) = name.find(" as ") {
        name = name[..idx].trim_end();
    }

    // `from . import x` and friends refer to the project itself.
    name = name.trim_start_matches('.');

    let first_segment = name.split('.').next().unwrap_or(name).trim();

    if is_identifier(first_segment) {
        Some(first_segment.to_string())
    } else {
        None
    }
}

/// A plausible Python module name: ASCII identifier characters only.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

//! Static fake filesystem.
//!
//! A flat table from absolute directory path to an ordered list of child
//! names. Files and directories are not distinguished: a name is a
//! directory only if its joined path is itself a key of the table.

use std::collections::HashMap;

use crate::config::FILESYSTEM;

/// Root path, always present.
pub const ROOT: &str = "/";

/// Read-only virtual filesystem.
///
/// # Path Convention
///
/// - Root: `"/"`
/// - Nested: `"/home/user"`
/// - No trailing slash, no `.` or `..` segments
#[derive(Clone, Debug)]
pub struct VirtualFs {
    dirs: HashMap<String, Vec<String>>,
}

impl VirtualFs {
    /// Build a filesystem from `(path, children)` pairs.
    ///
    /// The root directory is inserted (empty) when the table omits it.
    pub fn from_table<'a, I, C>(table: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, C)>,
        C: IntoIterator<Item = &'a str>,
    {
        let mut dirs: HashMap<String, Vec<String>> = table
            .into_iter()
            .map(|(path, children)| {
                (
                    path.to_string(),
                    children.into_iter().map(str::to_string).collect(),
                )
            })
            .collect();
        dirs.entry(ROOT.to_string()).or_default();
        Self { dirs }
    }

    /// The filesystem shipped with the terminal.
    pub fn builtin() -> Self {
        Self::from_table(
            FILESYSTEM
                .iter()
                .map(|(path, children)| (*path, children.iter().copied())),
        )
    }

    /// Ordered children of `path`; unknown paths behave as empty.
    pub fn list_children(&self, path: &str) -> &[String] {
        self.dirs.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `path` is a directory of the table.
    pub fn exists(&self, path: &str) -> bool {
        self.dirs.contains_key(path)
    }

    /// Resolve `target` against `current`.
    ///
    /// Absolute targets are taken as-is, relative ones are appended to
    /// `current`. Runs of slashes collapse to one. There is no `..`/`.`
    /// handling; such segments are kept literally and simply fail to exist.
    pub fn resolve(current: &str, target: &str) -> String {
        let joined = if target.starts_with('/') {
            target.to_string()
        } else {
            format!("{}/{}", current, target)
        };
        collapse_slashes(&joined)
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::builtin()
    }
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}

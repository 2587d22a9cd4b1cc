#![deny(missing_docs)]

//! # Code Generation
//!
//! Shared pieces of the emitters: the [`GeneratedUnit`] hand-off type and
//! helpers for writing Python source text.

use std::path::{Path, PathBuf};

/// One emitted source file: a path relative to the project root plus its full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Target path, relative to the project root.
    pub path: PathBuf,
    /// Complete file content.
    pub content: String,
}

impl GeneratedUnit {
    /// Creates a unit for `file_name` inside `dir`.
    pub fn new(dir: &Path, file_name: &str, content: String) -> Self {
        Self {
            path: dir.join(file_name),
            content,
        }
    }

    /// The file name component of the target path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Renders `s` as a double-quoted Python string literal.
pub fn py_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Dotted Python module path for a directory relative to the project root.
///
/// e.g. `src/api/routers` -> `src.api.routers`
pub fn py_module_path(dir: &Path) -> String {
    dir.components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(".")
}

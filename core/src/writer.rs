#![deny(missing_docs)]

//! # Project Writer
//!
//! Filesystem sink for generated units. Paths are relative to the project root.
//!
//! Generated files are always overwritten. Package markers and the application
//! file are only created when absent so user edits to them survive re-runs.
//! Nothing is ever written outside the project root.

use crate::codegen::GeneratedUnit;
use crate::error::{AppError, AppResult};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// The package-initializer marker file.
pub const MARKER_FILE: &str = "__init__.py";

/// What a write did on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and was created.
    Created,
    /// The file existed and was replaced.
    Overwritten,
    /// The file existed and was left untouched.
    Preserved,
}

impl WriteOutcome {
    /// Whether the file content on disk changed hands.
    pub fn wrote(self) -> bool {
        !matches!(self, WriteOutcome::Preserved)
    }
}

/// Writes into a project tree rooted at `root`.
#[derive(Debug, Clone)]
pub struct ProjectWriter {
    root: PathBuf,
}

impl ProjectWriter {
    /// Creates a writer for the project at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute (root-joined) form of a relative path.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Root-joined form of a relative path that must stay inside the project.
    ///
    /// Absolute paths and `..` components are rejected.
    pub fn contained(&self, relative: &Path) -> AppResult<PathBuf> {
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(AppError::General(format!(
                "Refusing to write outside the project root: {}",
                relative.display()
            )));
        }
        Ok(self.resolve(relative))
    }

    /// Creates `dir` and its parents if missing.
    pub fn ensure(&self, dir: &Path) -> AppResult<()> {
        fs::create_dir_all(self.contained(dir)?)?;
        Ok(())
    }

    /// Writes `text` to `path`, replacing any existing content.
    pub fn write(&self, path: &Path, text: &str) -> AppResult<WriteOutcome> {
        let target = self.contained(path)?;
        self.ensure_parent(&target)?;
        let outcome = if target.exists() {
            WriteOutcome::Overwritten
        } else {
            WriteOutcome::Created
        };
        fs::write(&target, text)?;
        Ok(outcome)
    }

    /// Writes `text` to `path` only if nothing exists there yet.
    pub fn write_if_absent(&self, path: &Path, text: &str) -> AppResult<WriteOutcome> {
        let target = self.contained(path)?;
        if target.exists() {
            return Ok(WriteOutcome::Preserved);
        }
        self.ensure_parent(&target)?;
        fs::write(&target, text)?;
        Ok(WriteOutcome::Created)
    }

    /// Creates an empty package marker in `dir` unless one already exists.
    pub fn ensure_marker(&self, dir: &Path) -> AppResult<WriteOutcome> {
        self.ensure(dir)?;
        self.write_if_absent(&dir.join(MARKER_FILE), "")
    }

    /// Writes a generated unit (always overwrites).
    pub fn write_unit(&self, unit: &GeneratedUnit) -> AppResult<WriteOutcome> {
        self.write(&unit.path, &unit.content)
    }

    fn ensure_parent(&self, target: &Path) -> AppResult<()> {
        if let Some(parent) = target.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

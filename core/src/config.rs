#![deny(missing_docs)]

//! # Generator Configuration
//!
//! The answers the scaffolding step collected, as consumed by the pipeline.
//! Can be read from a JSON or YAML answers file; unknown keys are ignored so
//! the complete answers file of a project template can be passed unchanged.

use crate::error::{AppError, AppResult};
use crate::loader::DocumentLoader;
use crate::strategies::Framework;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};

/// Title used for the application when neither config nor document name one.
pub const FALLBACK_TITLE: &str = "API";

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Whether generation runs at all.
    #[serde(deserialize_with = "yes_no")]
    pub generate_from_openapi: bool,
    /// The description document, relative to the project root.
    pub openapi_path: PathBuf,
    /// Directory receiving model modules.
    pub models_package: PathBuf,
    /// Directory receiving router modules.
    pub routers_package: PathBuf,
    /// Target framework identifier.
    pub framework: String,
    /// Application title.
    pub project_name: Option<String>,
    /// The application wiring file.
    pub app_path: PathBuf,
    /// The project root every other path is relative to.
    #[serde(skip)]
    pub project_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_from_openapi: true,
            openapi_path: PathBuf::from("openapi.yaml"),
            models_package: PathBuf::from("src/models"),
            routers_package: PathBuf::from("src/api/routers"),
            framework: "fastapi".to_string(),
            project_name: None,
            app_path: PathBuf::from("src/app.py"),
            project_dir: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    /// Reads an answers file (JSON, or YAML when supported).
    pub fn from_file(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::General(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let text = fs::read_to_string(path)?;
        let tree = DocumentLoader::default()
            .parse_tree(path, &text)
            .map_err(|e| AppError::Parse(format!("Invalid config {}: {}", path.display(), e)))?;
        serde_json::from_value(tree)
            .map_err(|e| AppError::Parse(format!("Invalid config {}: {}", path.display(), e)))
    }

    /// The recognized framework, if any.
    pub fn framework(&self) -> Option<Framework> {
        Framework::parse(&self.framework)
    }

    /// The application title: configured name, else the document title, else [`FALLBACK_TITLE`].
    pub fn app_title<'a>(&'a self, document_title: Option<&'a str>) -> &'a str {
        self.project_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(document_title)
            .unwrap_or(FALLBACK_TITLE)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

/// Accepts booleans and the template-style answers `y`/`n`/`yes`/`no`/`true`/`false`.
fn yes_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Text(s) => parse_flag(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("expected y/n or a boolean, got `{}`", s))
        }),
    }
}

/// Parses a yes/no answer.
pub fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" | "on" => Some(true),
        "n" | "no" | "false" | "0" | "off" => Some(false),
        _ => None,
    }
}

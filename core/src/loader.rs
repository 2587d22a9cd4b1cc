#![deny(missing_docs)]

//! # Document Loader
//!
//! Reads the description document from disk and parses it into a [`Document`].
//!
//! The serialization is chosen by file extension: `.json` is parsed strictly,
//! anything else goes through the full YAML parser. Builds without the `yaml`
//! feature fall back to a strict JSON heuristic, and report
//! [`AppError::UnsupportedFormat`] when that fails too.

use crate::document::Document;
use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::fmt::Display;
use std::fs;
use std::path::Path;

/// The parser used for documents that are not `.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextParser {
    /// Full YAML support.
    #[cfg(feature = "yaml")]
    Yaml,
    /// No structured-text parser: try strict JSON and give up otherwise.
    JsonOnly,
}

impl Default for TextParser {
    fn default() -> Self {
        #[cfg(feature = "yaml")]
        {
            TextParser::Yaml
        }
        #[cfg(not(feature = "yaml"))]
        {
            TextParser::JsonOnly
        }
    }
}

/// Loads description documents. Reads the file and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentLoader {
    text_parser: TextParser,
}

impl DocumentLoader {
    /// Creates a loader using the given parser for non-JSON files.
    pub fn new(text_parser: TextParser) -> Self {
        Self { text_parser }
    }

    /// A loader that behaves as if no structured-text parser were installed.
    pub fn json_only() -> Self {
        Self::new(TextParser::JsonOnly)
    }

    /// The parser used for non-JSON files.
    pub fn text_parser(&self) -> TextParser {
        self.text_parser
    }

    /// Loads and parses the document at `path`.
    ///
    /// # Returns
    ///
    /// * `MissingInput` when the path does not exist.
    /// * `UnsupportedFormat` when the JSON heuristic is all that is available and it fails.
    /// * `Io` / `Parse` for unreadable or unparseable input.
    pub fn load(&self, path: &Path) -> AppResult<Document> {
        if !path.exists() {
            return Err(AppError::MissingInput(path.to_path_buf()));
        }

        let text = fs::read_to_string(path)?;
        let tree = self.parse_tree(path, &text)?;
        Document::from_value(&tree)
    }

    /// Parses `text` into a generic tree, picking the serialization from `path`'s extension.
    pub fn parse_tree(&self, path: &Path, text: &str) -> AppResult<Value> {
        let parse_error = |e: &dyn Display| {
            AppError::Parse(format!("Failed to parse {}: {}", path.display(), e))
        };

        if has_json_extension(path) {
            return serde_json::from_str(text).map_err(|e| parse_error(&e));
        }

        match self.text_parser {
            #[cfg(feature = "yaml")]
            TextParser::Yaml => parse_yaml(text).map_err(|e| parse_error(&e)),
            TextParser::JsonOnly => {
                log::debug!("No YAML support; trying {} as JSON", path.display());
                serde_json::from_str(text)
                    .map_err(|_| AppError::UnsupportedFormat(path.to_path_buf()))
            }
        }
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Parses YAML into a JSON tree.
///
/// OpenAPI documents routinely use non-string mapping keys (`200:` under
/// `responses`), which a JSON object cannot hold, so scalar keys are stringified.
#[cfg(feature = "yaml")]
fn parse_yaml(text: &str) -> Result<Value, serde_yaml::Error> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
    Ok(yaml_to_json(yaml))
}

#[cfg(feature = "yaml")]
fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(map) => Value::Object(
            map.into_iter()
                .filter_map(|(k, v)| yaml_key(k).map(|k| (k, yaml_to_json(v))))
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

#[cfg(feature = "yaml")]
fn yaml_key(key: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Some(s),
        Yaml::Number(n) => Some(n.to_string()),
        Yaml::Bool(b) => Some(b.to_string()),
        Yaml::Null => Some("null".to_string()),
        Yaml::Tagged(tagged) => yaml_key(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => {
            log::warn!("Ignoring non-scalar mapping key in YAML document");
            None
        }
    }
}

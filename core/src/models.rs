#![deny(missing_docs)]

//! # Model Emitter
//!
//! Produces one Pydantic module per named schema in `components.schemas`.
//! File names are the lower-cased schema names, sanitized into Python
//! identifiers so every module stays importable and inside the models directory.

use crate::codegen::GeneratedUnit;
use crate::document::{Document, SchemaNode};
use crate::naming::to_identifier;
use crate::type_mapping::definition_source;
use std::collections::HashSet;
use std::path::Path;

/// Imports shared by every model module.
pub const MODEL_HEADER: &str = "from pydantic import BaseModel, Field\nfrom typing import Any\n\n";

/// Full text of the module for one schema.
pub fn model_source(name: &str, schema: &SchemaNode) -> String {
    format!("{}{}\n", MODEL_HEADER, definition_source(name, schema))
}

/// File name for a schema's module.
pub fn model_file_name(name: &str) -> String {
    format!("{}.py", to_identifier(&name.to_lowercase()))
}

/// Emits a unit per schema, in document order, targeting `models_dir`.
///
/// Schema names that differ only by case map to the same file; the later one wins.
pub fn emit_models(doc: &Document, models_dir: &Path) -> Vec<GeneratedUnit> {
    let mut seen = HashSet::new();
    doc.schemas
        .iter()
        .map(|(name, schema)| {
            let file_name = model_file_name(name);
            if !seen.insert(file_name.clone()) {
                log::warn!(
                    "Schema {} overwrites an earlier model in {}",
                    name,
                    file_name
                );
            }
            GeneratedUnit::new(models_dir, &file_name, model_source(name, schema))
        })
        .collect()
}

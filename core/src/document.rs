#![deny(missing_docs)]

//! # Description Document IR
//!
//! The in-memory representation of the parts of an OpenAPI document the
//! generator consumes: `components.schemas` and the `paths` table.
//!
//! Construction is deliberately tolerant. Anything that does not have the
//! expected shape is downgraded (an untyped schema, a malformed operation)
//! instead of failing the whole document. Document order is preserved for
//! every mapping so emitted code is reproducible.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// The implicit tag given to operations that declare none.
pub const DEFAULT_TAG: &str = "default";

/// HTTP methods recognised as operation keys inside a path item.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Root of a parsed description document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// `info.title`, if declared.
    pub title: Option<String>,
    /// Named schema definitions from `components.schemas`, in document order.
    pub schemas: IndexMap<String, SchemaNode>,
    /// The path table, in document order.
    pub paths: IndexMap<String, PathItem>,
}

/// One data-model definition (or one property of a definition).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    /// Declared `type`, verbatim. `None` when absent or not a string.
    pub kind: Option<String>,
    /// Declared properties, in document order.
    pub properties: IndexMap<String, SchemaNode>,
    /// Names listed in `required`.
    pub required: Vec<String>,
}

/// The operations declared under one path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    /// Operations keyed by lower-cased HTTP method, in document order.
    pub operations: IndexMap<String, OperationEntry>,
}

/// A method entry of a path item.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationEntry {
    /// A well-formed operation object.
    Operation(OperationNode),
    /// The method's value was not an object.
    Malformed,
}

/// One (path, method) operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationNode {
    /// Declared `operationId`.
    pub operation_id: Option<String>,
    /// Declared tags, in order. Empty when none were declared.
    pub tags: Vec<String>,
}

impl Document {
    /// Builds the IR from a parsed JSON/YAML tree.
    ///
    /// Fails only when the root itself is not a mapping.
    pub fn from_value(root: &Value) -> AppResult<Self> {
        let root = root.as_object().ok_or_else(|| {
            AppError::Parse("OpenAPI document root must be a mapping".into())
        })?;

        let title = root
            .get("info")
            .and_then(|info| info.get("title"))
            .and_then(Value::as_str)
            .map(str::to_string);

        let schemas = root
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(Value::as_object)
            .map(|schemas| {
                schemas
                    .iter()
                    .map(|(name, node)| (name.clone(), SchemaNode::from_value(node)))
                    .collect()
            })
            .unwrap_or_default();

        let paths = root
            .get("paths")
            .and_then(Value::as_object)
            .map(|paths| {
                paths
                    .iter()
                    .map(|(path, item)| (path.clone(), PathItem::from_value(item)))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            title,
            schemas,
            paths,
        })
    }

    /// True when there is nothing to generate from.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty() && self.paths.is_empty()
    }
}

impl SchemaNode {
    /// Builds a schema node. Non-object values become untyped nodes.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let kind = obj.get("type").and_then(Value::as_str).map(str::to_string);

        let properties = obj
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(name, prop)| (name.clone(), SchemaNode::from_value(prop)))
                    .collect()
            })
            .unwrap_or_default();

        let required = obj
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            kind,
            properties,
            required,
        }
    }

    /// Whether `field` is listed in `required`.
    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|r| r == field)
    }
}

impl PathItem {
    /// Builds a path item, keeping only HTTP method keys.
    ///
    /// Path-level metadata (`parameters`, `summary`, `servers`, `x-*`, ...) is not an operation.
    pub fn from_value(value: &Value) -> Self {
        let operations = value
            .as_object()
            .map(collect_operations)
            .unwrap_or_default();
        Self { operations }
    }
}

fn collect_operations(item: &Map<String, Value>) -> IndexMap<String, OperationEntry> {
    item.iter()
        .filter_map(|(key, value)| {
            let method = key.to_ascii_lowercase();
            if !HTTP_METHODS.contains(&method.as_str()) {
                return None;
            }
            let entry = match value.as_object() {
                Some(op) => OperationEntry::Operation(OperationNode::from_object(op)),
                None => OperationEntry::Malformed,
            };
            Some((method, entry))
        })
        .collect()
}

impl OperationNode {
    fn from_object(op: &Map<String, Value>) -> Self {
        let operation_id = op
            .get("operationId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        let tags = op
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { operation_id, tags }
    }

    /// The tags this operation is grouped under: its declared tags, or [`DEFAULT_TAG`].
    pub fn tags(&self) -> Vec<&str> {
        if self.tags.is_empty() {
            vec![DEFAULT_TAG]
        } else {
            self.tags.iter().map(String::as_str).collect()
        }
    }
}

#![deny(missing_docs)]

//! # Type Mapping
//!
//! Converts OpenAPI schema primitives into Pydantic field declarations.
//! Handles the four JSON primitives, an open `Any` fallback, and optionality
//! (derived from the schema's `required` list).
//!
//! Names that are not valid Python identifiers are sanitized; a sanitized field
//! keeps its document name as a Pydantic `Field` alias.

use crate::codegen::py_str;
use crate::document::SchemaNode;
use crate::naming::to_identifier;
use std::collections::HashSet;
use std::fmt::Display;

/// The JSON primitives the mapping table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// `string`
    String,
    /// `integer`
    Integer,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
}

impl PrimitiveKind {
    /// Looks up a declared OpenAPI `type`.
    pub fn from_openapi(kind: &str) -> Option<Self> {
        match kind {
            "string" => Some(PrimitiveKind::String),
            "integer" => Some(PrimitiveKind::Integer),
            "number" => Some(PrimitiveKind::Number),
            "boolean" => Some(PrimitiveKind::Boolean),
            _ => None,
        }
    }

    /// The Python annotation for this primitive.
    pub fn annotation(self) -> &'static str {
        match self {
            PrimitiveKind::String => "str",
            PrimitiveKind::Integer => "int",
            PrimitiveKind::Number => "float",
            PrimitiveKind::Boolean => "bool",
        }
    }
}

/// The resolved type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A primitive from the mapping table.
    Known(PrimitiveKind),
    /// Absent, composite (`array`, `object`) or unrecognised kinds. Rendered as `Any`.
    Unknown,
}

impl FieldType {
    /// Resolves a declared `type` (or its absence).
    pub fn from_declared(kind: Option<&str>) -> Self {
        kind.and_then(PrimitiveKind::from_openapi)
            .map_or(FieldType::Unknown, FieldType::Known)
    }

    /// The Python annotation, without nullability.
    pub fn annotation(self) -> &'static str {
        match self {
            FieldType::Known(kind) => kind.annotation(),
            FieldType::Unknown => "Any",
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.annotation())
    }
}

/// Whether a field must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optionality {
    /// Listed in `required`.
    Required,
    /// Not listed in `required`: nullable, defaults to `None`.
    Optional,
}

/// A single model field, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Property name, verbatim.
    pub name: String,
    /// Resolved type.
    pub ty: FieldType,
    /// Required or optional.
    pub optionality: Optionality,
}

impl FieldSpec {
    /// Resolves a property of `parent`.
    pub fn from_property(parent: &SchemaNode, name: &str, prop: &SchemaNode) -> Self {
        let optionality = if parent.is_required(name) {
            Optionality::Required
        } else {
            Optionality::Optional
        };
        Self {
            name: name.to_string(),
            ty: FieldType::from_declared(prop.kind.as_deref()),
            optionality,
        }
    }

    /// The Python attribute name.
    pub fn identifier(&self) -> String {
        to_identifier(&self.name)
    }

    /// The document name, when it differs from [`FieldSpec::identifier`].
    pub fn alias(&self) -> Option<&str> {
        (self.identifier() != self.name).then_some(self.name.as_str())
    }

    /// Renders the indented field line of a Pydantic class body.
    pub fn render(&self) -> String {
        let ident = self.identifier();
        match (self.optionality, self.alias()) {
            (Optionality::Optional, None) => format!("    {}: {} | None = None", ident, self.ty),
            (Optionality::Optional, Some(alias)) => format!(
                "    {}: {} | None = Field(default=None, alias={})",
                ident,
                self.ty,
                py_str(alias)
            ),
            // Required fields get no default, including untyped ones: `Any` already
            // admits None but the field stays mandatory.
            (Optionality::Required, None) => format!("    {}: {}", ident, self.ty),
            (Optionality::Required, Some(alias)) => {
                format!("    {}: {} = Field(alias={})", ident, self.ty, py_str(alias))
            }
        }
    }
}

/// Resolves every property of `schema`, in document order.
pub fn field_specs(schema: &SchemaNode) -> Vec<FieldSpec> {
    schema
        .properties
        .iter()
        .map(|(name, prop)| FieldSpec::from_property(schema, name, prop))
        .collect()
}

/// Generates the Pydantic class definition for one named schema.
///
/// One field line per property; an empty body gets `pass`.
pub fn definition_source(name: &str, schema: &SchemaNode) -> String {
    let class_name = to_identifier(name);
    let mut lines = vec![format!("class {}(BaseModel):", class_name)];
    let fields = field_specs(schema);
    if fields.is_empty() {
        lines.push("    pass".to_string());
    }

    let mut seen = HashSet::new();
    for field in &fields {
        if !seen.insert(field.identifier()) {
            log::warn!(
                "Field {} of {} reuses attribute {}; the last definition wins",
                field.name,
                class_name,
                field.identifier()
            );
        }
        lines.push(field.render());
    }
    lines.join("\n")
}

#![deny(missing_docs)]

//! # Stubgen Core
//!
//! Turns an OpenAPI description into a FastAPI service skeleton: Pydantic
//! models for `components.schemas` and stub routers for `paths`, grouped by tag.
//!
//! The entry point is [`Pipeline`]; the individual stages are usable on their own.

/// Shared error types.
pub mod error;

/// Description document IR.
pub mod document;

/// Reading and parsing the description document.
pub mod loader;

/// Naming convention conversions.
pub mod naming;

/// Type mapping logic (OpenAPI -> Pydantic).
pub mod type_mapping;

/// Code generation utilities.
pub mod codegen;

/// Model module generation.
pub mod models;

/// Operation grouping by tag.
pub mod grouping;

/// Router module generation.
pub mod route_generator;

/// Strategy Pattern Interfaces.
pub mod strategies;

/// Filesystem sink.
pub mod writer;

/// Generator configuration.
pub mod config;

/// Pipeline orchestration.
pub mod pipeline;

/// Log target for success lines (rendered as `[OK]` by the CLI logger).
pub const OK_TARGET: &str = "stubgen::ok";

pub use codegen::GeneratedUnit;
pub use config::GeneratorConfig;
pub use document::{Document, OperationEntry, OperationNode, PathItem, SchemaNode};
pub use error::{AppError, AppResult};
pub use grouping::{group_operations, BucketEntry, Buckets};
pub use loader::{DocumentLoader, TextParser};
pub use models::emit_models;
pub use naming::to_snake_case;
pub use pipeline::{Pipeline, PipelineState, RunSummary};
pub use route_generator::{bucket_source, emit_routers};
pub use strategies::{BackendStrategy, FastApiStrategy, Framework};
pub use type_mapping::{definition_source, FieldType, PrimitiveKind};
pub use writer::{ProjectWriter, WriteOutcome};

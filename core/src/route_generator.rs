#![deny(missing_docs)]

//! # Route Generator
//!
//! Renders one router module per tag bucket: a router declaration, then for
//! every operation a route registration followed by a stub handler, then the
//! module's registration entry point.
//!
//! Handler names come from `operationId` when declared, otherwise from the
//! method and path. Two operations resolving to the same function name inside
//! one module are both emitted; the later definition shadows the earlier one.

use crate::codegen::GeneratedUnit;
use crate::document::Document;
use crate::grouping::{group_operations, BucketEntry};
use crate::naming::{derive_handler_name, function_name, module_name};
use crate::strategies::BackendStrategy;
use std::collections::HashSet;
use std::path::Path;

/// The operation identifier echoed by an entry's stub.
pub fn operation_identifier(entry: &BucketEntry) -> String {
    entry
        .operation
        .operation_id
        .clone()
        .unwrap_or_else(|| derive_handler_name(&entry.method, &entry.path))
}

/// Generates the source of the router module for one bucket.
///
/// # Arguments
///
/// * `tag` - The bucket's tag, used in the router declaration.
/// * `entries` - The bucket's operations, in emission order.
/// * `strategy` - The backend strategy rendering framework-specific text.
pub fn bucket_source(
    tag: &str,
    entries: &[BucketEntry],
    strategy: &impl BackendStrategy,
) -> String {
    let mut code = strategy.router_header(tag);
    let mut seen = HashSet::new();

    for entry in entries {
        let op_id = operation_identifier(entry);
        let func = function_name(&op_id);
        if !seen.insert(func.clone()) {
            log::warn!(
                "Handler {} is defined twice in router {}; the last definition wins",
                func,
                module_name(tag)
            );
        }

        code.push_str(&strategy.route_registration_statement(&entry.path, &entry.method));
        code.push_str(&strategy.handler_stub(&func, &op_id));
    }

    code.push_str(&strategy.router_footer());
    code
}

/// Groups the operations of `doc` and emits one router unit per bucket into `routers_dir`.
pub fn emit_routers(
    doc: &Document,
    routers_dir: &Path,
    strategy: &impl BackendStrategy,
) -> Vec<GeneratedUnit> {
    let mut seen = HashSet::new();
    group_operations(doc)
        .iter()
        .map(|(tag, entries)| {
            let file_name = format!("{}.py", module_name(tag));
            if !seen.insert(file_name.clone()) {
                log::warn!("Tag {} overwrites an earlier router in {}", tag, file_name);
            }
            log::debug!("Router {} ({} operations)", file_name, entries.len());
            GeneratedUnit::new(routers_dir, &file_name, bucket_source(tag, entries, strategy))
        })
        .collect()
}

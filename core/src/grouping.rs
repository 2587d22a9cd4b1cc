#![deny(missing_docs)]

//! # Operation Grouping
//!
//! Partitions the path table into tag buckets. Each bucket becomes one router module.
//!
//! Operations tagged with several tags are copied into every one of those
//! buckets. Untagged operations land in the `default` bucket.

use crate::document::{Document, OperationEntry, OperationNode};
use indexmap::IndexMap;

/// One operation placed in a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketEntry {
    /// URL path, verbatim.
    pub path: String,
    /// Lower-cased HTTP method.
    pub method: String,
    /// The operation itself.
    pub operation: OperationNode,
}

/// Buckets keyed by tag, in order of first appearance.
pub type Buckets = IndexMap<String, Vec<BucketEntry>>;

/// Groups every well-formed operation of `doc` by tag.
///
/// Paths are visited in document order, then methods in document order.
/// Malformed method entries are skipped with a warning.
pub fn group_operations(doc: &Document) -> Buckets {
    let mut buckets = Buckets::new();

    for (path, item) in &doc.paths {
        for (method, entry) in &item.operations {
            let op = match entry {
                OperationEntry::Operation(op) => op,
                OperationEntry::Malformed => {
                    log::warn!(
                        "MalformedOperation: {} {} is not an operation object, skipping",
                        method.to_uppercase(),
                        path
                    );
                    continue;
                }
            };

            for tag in op.tags() {
                buckets.entry(tag.to_string()).or_default().push(BucketEntry {
                    path: path.clone(),
                    method: method.clone(),
                    operation: op.clone(),
                });
            }
        }
    }

    buckets
}

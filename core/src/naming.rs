#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving file, module and function names from schema
//! names, tags, operation ids and URL paths.

use crate::document::DEFAULT_TAG;

/// Python keywords that cannot be used as identifiers.
const PYTHON_KEYWORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Converts a mixed-case string (PascalCase or camelCase) to snake_case.
///
/// Every upper-case character becomes `_` followed by its lower-case form. The
/// separator produced by an upper-case *first* character is dropped. The output
/// contains no convertible upper-case characters, so the function is idempotent.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if is_convertible_upper(c) {
            if i > 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

// Characters flagged upper-case but without a lower-case mapping (e.g. U+03D2)
// are left alone; converting them would never reach a fixed point.
fn is_convertible_upper(c: char) -> bool {
    c.is_uppercase() && c.to_lowercase().any(|lc| lc != c)
}

/// Turns an arbitrary string into a valid Python identifier.
///
/// Characters outside `[A-Za-z0-9_]` become separators, runs of separators
/// collapse into a single `_`, and edges are trimmed. Leading digits get a `_`
/// prefix and keywords a `_` suffix.
pub fn to_identifier(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let mut ident = cleaned
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if ident.is_empty() {
        return "_".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if PYTHON_KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// Derives a handler name from the HTTP Method and URL path when `operationId` is missing.
///
/// e.g. `GET /users/{id}` -> `get_users_id`
pub fn derive_handler_name(method: &str, path: &str) -> String {
    let method = method.to_lowercase();
    let clean_path = path
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if clean_path.is_empty() {
        method
    } else {
        format!("{}_{}", method, clean_path)
    }
}

/// Module (file stem) name for an operation tag.
///
/// The implicit `default` tag is used verbatim.
pub fn module_name(tag: &str) -> String {
    if tag == DEFAULT_TAG {
        return DEFAULT_TAG.to_string();
    }
    to_identifier(&to_snake_case(tag))
}

/// Python function name for an operation identifier.
pub fn function_name(operation_id: &str) -> String {
    to_identifier(&to_snake_case(operation_id))
}

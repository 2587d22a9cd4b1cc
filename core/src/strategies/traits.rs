#![deny(missing_docs)]

//! # Backend Strategy Trait
//!
//! Defines the interface required to generate router code for a specific web
//! framework. The router emitter owns naming and ordering; strategies only
//! render text.

use std::path::Path;

/// A strategy trait for decoupling framework-specific code generation.
pub trait BackendStrategy {
    /// Imports and the router object declaration for a module serving `tag`.
    fn router_header(&self, tag: &str) -> String;

    /// The statement binding the next handler to `method` on `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - URL path, verbatim from the document.
    /// * `method` - Lower-cased HTTP method.
    fn route_registration_statement(&self, path: &str, method: &str) -> String;

    /// A stub handler that acknowledges the call with `operation_id`.
    ///
    /// # Arguments
    ///
    /// * `func_name` - A valid identifier for the handler function.
    /// * `operation_id` - The operation identifier echoed by the stub.
    fn handler_stub(&self, func_name: &str, operation_id: &str) -> String;

    /// Trailing code of a router module: the explicit registration entry point.
    fn router_footer(&self) -> String;

    /// Source of the application file that registers every generated router.
    ///
    /// # Arguments
    ///
    /// * `title` - Application title.
    /// * `routers_dir` - Routers directory, relative to the project root.
    /// * `app_path` - Path of the application file itself, relative to the project root.
    fn app_wiring(&self, title: &str, routers_dir: &Path, app_path: &Path) -> String;
}

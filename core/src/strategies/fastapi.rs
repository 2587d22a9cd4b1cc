#![deny(missing_docs)]

//! # FastAPI Strategy
//!
//! Implementation of `BackendStrategy` for FastAPI.
//!
//! Every router module exposes an explicit `register(app)` function. The
//! application file lists the routers directory and calls it for each module;
//! nothing is discovered by probing module attributes.

use crate::codegen::{py_module_path, py_str};
use crate::strategies::BackendStrategy;
use std::path::{Component, Path};

/// Strategy for generating FastAPI compatible code.
pub struct FastApiStrategy;

impl BackendStrategy for FastApiStrategy {
    fn router_header(&self, tag: &str) -> String {
        format!(
            "from fastapi import APIRouter\n\nrouter = APIRouter(prefix=\"\", tags=[{}])\n\n\n",
            py_str(tag)
        )
    }

    fn route_registration_statement(&self, path: &str, method: &str) -> String {
        format!("@router.{}({})\n", method, py_str(path))
    }

    fn handler_stub(&self, func_name: &str, operation_id: &str) -> String {
        format!(
            "async def {}():\n    return {{\"ok\": True, \"op\": {}}}\n\n\n",
            func_name,
            py_str(operation_id)
        )
    }

    fn router_footer(&self) -> String {
        "def register(app):\n    app.include_router(router)\n".to_string()
    }

    fn app_wiring(&self, title: &str, routers_dir: &Path, app_path: &Path) -> String {
        // parents[N] of the app file is the project root.
        let depth = app_path
            .parent()
            .map(|p| {
                p.components()
                    .filter(|c| matches!(c, Component::Normal(_)))
                    .count()
            })
            .unwrap_or(0);

        let mut routers_expr = format!("Path(__file__).resolve().parents[{}]", depth);
        for component in routers_dir.components() {
            if let Component::Normal(part) = component {
                routers_expr.push_str(" / ");
                routers_expr.push_str(&py_str(&part.to_string_lossy()));
            }
        }

        let mut code = String::new();
        code.push_str("from importlib import import_module\n");
        code.push_str("from pathlib import Path\n\n");
        code.push_str("from fastapi import FastAPI\n\n");
        code.push_str(&format!("app = FastAPI(title={})\n\n", py_str(title)));
        code.push_str(&format!("ROUTERS_DIR = {}\n", routers_expr));
        code.push_str(&format!(
            "ROUTERS_PACKAGE = {}\n\n",
            py_str(&py_module_path(routers_dir))
        ));
        code.push_str("for module_file in sorted(ROUTERS_DIR.glob(\"*.py\")):\n");
        code.push_str("    if module_file.stem == \"__init__\":\n");
        code.push_str("        continue\n");
        code.push_str("    module = import_module(ROUTERS_PACKAGE + \".\" + module_file.stem)\n");
        code.push_str("    module.register(app)\n");
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_registration_and_stub() {
        let strategy = FastApiStrategy;
        assert_eq!(
            strategy.route_registration_statement("/items", "get"),
            "@router.get(\"/items\")\n"
        );
        assert_eq!(
            strategy.handler_stub("list_items", "listItems"),
            "async def list_items():\n    return {\"ok\": True, \"op\": \"listItems\"}\n\n\n"
        );
    }

    #[test]
    fn test_header_escapes_tag() {
        let header = FastApiStrategy.router_header("say \"hi\"");
        assert!(header.contains(r#"tags=["say \"hi\""]"#));
        assert!(header.starts_with("from fastapi import APIRouter\n"));
    }

    #[test]
    fn test_app_wiring_uses_explicit_registration() {
        let code = FastApiStrategy.app_wiring(
            "Shop",
            Path::new("src/api/routers"),
            Path::new("src/app.py"),
        );
        assert!(code.contains("app = FastAPI(title=\"Shop\")"));
        assert!(code.contains(
            "ROUTERS_DIR = Path(__file__).resolve().parents[1] / \"src\" / \"api\" / \"routers\""
        ));
        assert!(code.contains("ROUTERS_PACKAGE = \"src.api.routers\""));
        assert!(code.contains("module.register(app)"));
        assert!(!code.contains("hasattr"));
    }

    #[test]
    fn test_app_wiring_at_project_root() {
        let code = FastApiStrategy.app_wiring("API", Path::new("routers"), Path::new("main.py"));
        assert!(code.contains("ROUTERS_DIR = Path(__file__).resolve().parents[0] / \"routers\""));
    }
}

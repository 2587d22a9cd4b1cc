use log::{LevelFilter, Log, Metadata, Record};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use stubgen_core::{DocumentLoader, GeneratorConfig, Pipeline, PipelineState};
use tempfile::tempdir;

/// Records every log line so tests can assert on what a run reported.
struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(format!("[{}] {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

/// Installs the capture logger (once per test binary) and returns the lines
/// logged so far that mention `needle`. Tests run in parallel, so filter on
/// something unique to the test such as its temp dir.
fn logged_lines(needle: &str) -> Vec<String> {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Info);
    LOGGER
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.contains(needle))
        .cloned()
        .collect()
}

fn config(project: &Path, openapi: &str) -> GeneratorConfig {
    GeneratorConfig {
        project_dir: project.to_path_buf(),
        openapi_path: PathBuf::from(openapi),
        ..GeneratorConfig::default()
    }
}

fn read(project: &Path, rel: &str) -> String {
    fs::read_to_string(project.join(rel)).unwrap()
}

fn files_under(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                out.extend(files_under(&path));
            } else {
                out.push(path);
            }
        }
    }
    out
}

#[cfg(feature = "yaml")]
#[test]
fn user_schema_emits_required_and_nullable_fields() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("openapi.yaml"),
        r#"
openapi: 3.0.0
info: {title: Users, version: 1.0.0}
components:
  schemas:
    User:
      type: object
      properties:
        id: {type: integer}
        name: {type: string}
      required: [id]
"#,
    )
    .unwrap();

    Pipeline::new(config(dir.path(), "openapi.yaml")).run().unwrap();

    let model = read(dir.path(), "src/models/user.py");
    assert_eq!(
        model,
        "from pydantic import BaseModel, Field\n\
         from typing import Any\n\n\
         class User(BaseModel):\n    id: int\n    name: str | None = None\n"
    );
    assert_eq!(read(dir.path(), "src/models/__init__.py"), "");
}

#[cfg(feature = "yaml")]
#[test]
fn tagged_operation_emits_router_module() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("openapi.yaml"),
        r#"
paths:
  /items:
    get:
      operationId: listItems
      tags: [items]
      responses:
        200: {description: OK}
"#,
    )
    .unwrap();

    Pipeline::new(config(dir.path(), "openapi.yaml")).run().unwrap();

    let router = read(dir.path(), "src/api/routers/items.py");
    assert!(router.contains("router = APIRouter(prefix=\"\", tags=[\"items\"])"));
    assert!(router.contains("@router.get(\"/items\")\nasync def list_items():"));
    assert!(router.contains("    return {\"ok\": True, \"op\": \"listItems\"}"));
    assert!(router.contains("def register(app):\n    app.include_router(router)"));
}

#[test]
fn untagged_operation_lands_in_default_module() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("openapi.json"),
        r#"{"paths": {"/health": {"get": {}}}}"#,
    )
    .unwrap();

    Pipeline::new(config(dir.path(), "openapi.json")).run().unwrap();

    let routers = dir.path().join("src/api/routers");
    let mut names: Vec<String> = files_under(&routers)
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["__init__.py", "default.py"]);

    let router = read(dir.path(), "src/api/routers/default.py");
    assert!(router.contains("tags=[\"default\"]"));
    assert!(router.contains("async def get_health():"));
    assert!(router.contains("\"op\": \"get_health\""));
}

#[test]
fn missing_input_produces_no_files() {
    let dir = tempdir().unwrap();
    logged_lines("");
    let summary = Pipeline::new(config(dir.path(), "openapi.yaml")).run().unwrap();

    assert_eq!(summary.state, PipelineState::Done);
    assert!(summary.written.is_empty());
    assert!(files_under(dir.path()).is_empty());

    let expected = dir.path().join("openapi.yaml");
    let lines = logged_lines(&expected.display().to_string());
    assert_eq!(
        lines,
        vec![format!(
            "[WARN] MissingInput: OpenAPI document not found: {}",
            expected.display()
        )]
    );
}

#[test]
fn schema_names_are_sanitized_and_contained() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("project");
    fs::create_dir(&project).unwrap();
    fs::write(
        project.join("openapi.json"),
        r#"{"components": {"schemas": {"../../escaped": {"properties": {
            "from": {"type": "string"},
            "user-id": {"type": "integer"}
        }, "required": ["user-id"]}}}}"#,
    )
    .unwrap();

    let summary = Pipeline::new(config(&project, "openapi.json")).run().unwrap();

    assert!(summary.written.contains(&PathBuf::from("src/models/escaped.py")));
    assert!(!dir.path().join("escaped.py").exists());
    assert!(!project.join("escaped.py").exists());
    assert_eq!(
        read(&project, "src/models/escaped.py"),
        "from pydantic import BaseModel, Field\n\
         from typing import Any\n\n\
         class escaped(BaseModel):\n    \
         from_: str | None = Field(default=None, alias=\"from\")\n    \
         user_id: int = Field(alias=\"user-id\")\n"
    );
}

#[test]
fn json_content_with_yaml_extension_uses_heuristic() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("openapi.yaml"),
        r#"{
  "components": {"schemas": {"Item": {"properties": {"sku": {"type": "string"}}, "required": ["sku"]}}},
  "paths": {"/items": {"post": {"operationId": "createItem", "tags": ["items"]}}}
}"#,
    )
    .unwrap();

    let summary = Pipeline::with_loader(
        config(dir.path(), "openapi.yaml"),
        DocumentLoader::json_only(),
    )
    .run()
    .unwrap();

    assert_eq!(summary.history.last(), Some(&PipelineState::Done));
    assert!(summary.history.contains(&PipelineState::Wired));
    assert!(read(dir.path(), "src/models/item.py").contains("    sku: str\n"));
    assert!(read(dir.path(), "src/api/routers/items.py").contains("async def create_item():"));
}

#[test]
fn yaml_without_yaml_support_is_skipped_not_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("openapi.yaml"), "paths:\n  /a:\n    get: {}\n").unwrap();

    let summary = Pipeline::with_loader(
        config(dir.path(), "openapi.yaml"),
        DocumentLoader::json_only(),
    )
    .run()
    .unwrap();

    assert_eq!(
        summary.history,
        vec![PipelineState::Disabled, PipelineState::Done]
    );
    assert_eq!(files_under(dir.path()).len(), 1);
}

#[test]
fn fan_out_writes_operation_into_each_tag_module() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("openapi.json"),
        r#"{"paths": {"/orders/{id}": {"get": {"operationId": "getOrder", "tags": ["Orders", "AdminTools"]}}}}"#,
    )
    .unwrap();

    Pipeline::new(config(dir.path(), "openapi.json")).run().unwrap();

    for module in ["orders", "admin_tools"] {
        let router = read(dir.path(), &format!("src/api/routers/{}.py", module));
        assert!(router.contains("@router.get(\"/orders/{id}\")\nasync def get_order():"));
        assert!(router.contains("\"op\": \"getOrder\""));
    }
}

#[test]
fn rerun_overwrites_generated_files_but_keeps_markers_and_app() {
    let dir = tempdir().unwrap();
    let document = dir.path().join("openapi.json");
    fs::write(
        &document,
        r#"{"components": {"schemas": {"Pet": {"properties": {"name": {"type": "string"}}}}},
            "paths": {"/pets": {"get": {"operationId": "listPets", "tags": ["pets"]}}}}"#,
    )
    .unwrap();
    Pipeline::new(config(dir.path(), "openapi.json")).run().unwrap();

    fs::write(dir.path().join("src/models/__init__.py"), "from .pet import Pet\n").unwrap();
    fs::write(dir.path().join("src/app.py"), "# customised\n").unwrap();
    fs::write(dir.path().join("src/models/pet.py"), "# stale\n").unwrap();

    fs::write(
        &document,
        r#"{"components": {"schemas": {"Pet": {"properties": {"age": {"type": "integer"}}}}},
            "paths": {"/pets": {"get": {"operationId": "listPets", "tags": ["pets"]}}}}"#,
    )
    .unwrap();
    let summary = Pipeline::new(config(dir.path(), "openapi.json")).run().unwrap();

    assert!(read(dir.path(), "src/models/pet.py").contains("    age: int | None = None"));
    assert_eq!(read(dir.path(), "src/models/__init__.py"), "from .pet import Pet\n");
    assert_eq!(read(dir.path(), "src/app.py"), "# customised\n");
    assert!(!summary.written.contains(&PathBuf::from("src/app.py")));
}

#[test]
fn app_wiring_registers_routers_explicitly() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("openapi.json"),
        r#"{"info": {"title": "Pet Shop"}, "paths": {"/pets": {"get": {}}}}"#,
    )
    .unwrap();

    Pipeline::new(config(dir.path(), "openapi.json")).run().unwrap();

    let app = read(dir.path(), "src/app.py");
    assert!(app.contains("app = FastAPI(title=\"Pet Shop\")"));
    assert!(app.contains("ROUTERS_PACKAGE = \"src.api.routers\""));
    assert!(app.contains("    module.register(app)\n"));
}

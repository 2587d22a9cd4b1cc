#![deny(missing_docs)]

//! # Generate Command
//!
//! Generates Pydantic models and FastAPI routers from an OpenAPI document
//! into an existing project tree.
//!
//! Settings are layered: built-in defaults, then an optional answers file
//! (`--config`), then individual flags or their `STUBGEN_*` environment variables.

use std::path::PathBuf;
use stubgen_core::config::parse_flag;
use stubgen_core::{AppResult, GeneratorConfig, Pipeline, RunSummary};

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Project root. Every other path is relative to it.
    #[clap(long, env = "STUBGEN_PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// JSON or YAML answers file providing the generator settings.
    #[clap(long, env = "STUBGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the OpenAPI document.
    #[clap(long, env = "STUBGEN_OPENAPI_PATH")]
    pub openapi_path: Option<PathBuf>,

    /// Output directory for model modules.
    #[clap(long, env = "STUBGEN_MODELS_DIR")]
    pub models_dir: Option<PathBuf>,

    /// Output directory for router modules.
    #[clap(long, env = "STUBGEN_ROUTERS_DIR")]
    pub routers_dir: Option<PathBuf>,

    /// Target framework (routers and wiring are only generated for `fastapi`).
    #[clap(long, env = "STUBGEN_FRAMEWORK")]
    pub framework: Option<String>,

    /// Application title.
    #[clap(long, env = "STUBGEN_PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Application wiring file.
    #[clap(long, env = "STUBGEN_APP_PATH")]
    pub app_path: Option<PathBuf>,

    /// Enable or disable generation (`y`/`n`, `true`/`false`).
    #[clap(long, env = "STUBGEN_GENERATE", value_parser = parse_enabled)]
    pub generate: Option<bool>,
}

fn parse_enabled(s: &str) -> Result<bool, String> {
    parse_flag(s).ok_or_else(|| format!("expected y/n or true/false, got `{}`", s))
}

impl GenerateArgs {
    /// Builds the effective configuration.
    pub fn resolve_config(&self) -> AppResult<GeneratorConfig> {
        // 1. Defaults or answers file
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };

        // 2. Explicit overrides
        config.project_dir = self.project_dir.clone();
        if let Some(path) = &self.openapi_path {
            config.openapi_path = path.clone();
        }
        if let Some(dir) = &self.models_dir {
            config.models_package = dir.clone();
        }
        if let Some(dir) = &self.routers_dir {
            config.routers_package = dir.clone();
        }
        if let Some(framework) = &self.framework {
            config.framework = framework.clone();
        }
        if let Some(name) = &self.project_name {
            config.project_name = Some(name.clone());
        }
        if let Some(path) = &self.app_path {
            config.app_path = path.clone();
        }
        if let Some(enabled) = self.generate {
            config.generate_from_openapi = enabled;
        }

        Ok(config)
    }
}

/// Executes the generation pipeline.
pub fn execute(args: &GenerateArgs) -> AppResult<RunSummary> {
    let config = args.resolve_config()?;
    log::debug!("Effective configuration: {:?}", config);
    Pipeline::new(config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stubgen_core::PipelineState;
    use tempfile::tempdir;

    fn args(project_dir: PathBuf) -> GenerateArgs {
        GenerateArgs {
            project_dir,
            config: None,
            openapi_path: None,
            models_dir: None,
            routers_dir: None,
            framework: None,
            project_name: None,
            app_path: None,
            generate: None,
        }
    }

    #[test]
    fn test_flags_override_answers_file() {
        let dir = tempdir().unwrap();
        let answers = dir.path().join("answers.json");
        fs::write(
            &answers,
            r#"{"generate_from_openapi": "y", "framework": "flask", "models_package": "app/models"}"#,
        )
        .unwrap();

        let mut a = args(dir.path().to_path_buf());
        a.config = Some(answers);
        a.framework = Some("fastapi".into());
        let config = a.resolve_config().unwrap();

        assert_eq!(config.framework, "fastapi");
        assert_eq!(config.models_package, PathBuf::from("app/models"));
        assert_eq!(config.project_dir, dir.path());
    }

    #[test]
    fn test_scaffold_project() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("openapi.json"),
            r#"{
  "info": {"title": "Test", "version": "1"},
  "components": {"schemas": {"User": {"type": "object", "properties": {"id": {"type": "integer"}}, "required": ["id"]}}},
  "paths": {
    "/users/{id}": {"get": {"tags": ["Users"], "operationId": "getUser"}},
    "/posts": {"post": {"tags": ["Posts"], "operationId": "createPost"}}
  }
}"#,
        )
        .unwrap();

        let mut a = args(dir.path().to_path_buf());
        a.openapi_path = Some(PathBuf::from("openapi.json"));
        let summary = execute(&a).unwrap();
        assert_eq!(summary.state, PipelineState::Done);

        let users = fs::read_to_string(dir.path().join("src/api/routers/users.py")).unwrap();
        assert!(users.contains("async def get_user():"));
        let posts = fs::read_to_string(dir.path().join("src/api/routers/posts.py")).unwrap();
        assert!(posts.contains("async def create_post():"));
        assert!(dir.path().join("src/models/user.py").exists());
        assert!(dir.path().join("src/app.py").exists());
    }

    #[test]
    fn test_disabled_by_flag() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("openapi.json"), r#"{"paths": {"/a": {"get": {}}}}"#).unwrap();

        let mut a = args(dir.path().to_path_buf());
        a.openapi_path = Some(PathBuf::from("openapi.json"));
        a.generate = Some(false);
        let summary = execute(&a).unwrap();

        assert!(summary.written.is_empty());
        assert!(!dir.path().join("src").exists());
    }
}

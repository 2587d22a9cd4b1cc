#![deny(missing_docs)]

//! # Generation Pipeline
//!
//! Orchestrates a single generation run:
//!
//! ```text
//! Disabled -> Loaded -> ModelsEmitted -> RoutersEmitted -> Wired -> Done
//!     \_________\____________\_______________\_____________\-> Aborted
//! ```
//!
//! Document-shape anomalies (missing input, undecodable input, empty tables,
//! unknown framework) are logged and skip the dependent stages. Only errors
//! that [`AppError::is_fatal`] considers fatal abort the run.

use crate::codegen::GeneratedUnit;
use crate::config::GeneratorConfig;
use crate::document::Document;
use crate::error::{AppError, AppResult};
use crate::loader::DocumentLoader;
use crate::models::emit_models;
use crate::route_generator::emit_routers;
use crate::strategies::{BackendStrategy, FastApiStrategy, Framework};
use crate::writer::{ProjectWriter, WriteOutcome, MARKER_FILE};
use crate::OK_TARGET;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// States of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Initial state; nothing has been read yet.
    Disabled,
    /// The document was parsed.
    Loaded,
    /// Model modules were written (or there were none to write).
    ModelsEmitted,
    /// Router modules were written (or there were none to write).
    RoutersEmitted,
    /// The application wiring file was created or found.
    Wired,
    /// The run finished.
    Done,
    /// The run failed.
    Aborted,
}

impl Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PipelineState::Disabled => "Disabled",
            PipelineState::Loaded => "Loaded",
            PipelineState::ModelsEmitted => "ModelsEmitted",
            PipelineState::RoutersEmitted => "RoutersEmitted",
            PipelineState::Wired => "Wired",
            PipelineState::Done => "Done",
            PipelineState::Aborted => "Aborted",
        };
        f.write_str(name)
    }
}

/// Result of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Final state (always `Done` for a successful run).
    pub state: PipelineState,
    /// Every state visited, in order.
    pub history: Vec<PipelineState>,
    /// Files written during the run, relative to the project root.
    pub written: Vec<PathBuf>,
}

/// One generation run over one project.
#[derive(Debug)]
pub struct Pipeline {
    config: GeneratorConfig,
    loader: DocumentLoader,
    writer: ProjectWriter,
    state: PipelineState,
    history: Vec<PipelineState>,
    written: Vec<PathBuf>,
}

impl Pipeline {
    /// Creates a pipeline with the default document loader.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_loader(config, DocumentLoader::default())
    }

    /// Creates a pipeline with a specific document loader.
    pub fn with_loader(config: GeneratorConfig, loader: DocumentLoader) -> Self {
        let writer = ProjectWriter::new(config.project_dir.clone());
        Self {
            config,
            loader,
            writer,
            state: PipelineState::Disabled,
            history: vec![PipelineState::Disabled],
            written: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Runs the pipeline to completion.
    ///
    /// # Returns
    ///
    /// * `Ok(RunSummary)` when the run reached `Done`, including runs that skipped stages.
    /// * `Err` for fatal conditions; the pipeline is left in `Aborted`.
    pub fn run(&mut self) -> AppResult<RunSummary> {
        match self.execute() {
            Ok(()) => {
                self.transition(PipelineState::Done);
                Ok(RunSummary {
                    state: self.state,
                    history: self.history.clone(),
                    written: self.written.clone(),
                })
            }
            Err(e) => {
                self.transition(PipelineState::Aborted);
                Err(e)
            }
        }
    }

    fn execute(&mut self) -> AppResult<()> {
        // 1. Configuration gate
        if !self.config.generate_from_openapi {
            log::info!("Generation from OpenAPI is disabled.");
            return Ok(());
        }

        // 2. Load
        let Some(doc) = self.load()? else {
            return Ok(());
        };
        self.transition(PipelineState::Loaded);

        if doc.is_empty() {
            log::info!("OpenAPI document declares no schemas and no paths; nothing to generate.");
            return Ok(());
        }

        // 3. Models
        self.generate_models(&doc)?;
        self.transition(PipelineState::ModelsEmitted);

        // 4. Routers + wiring
        match self.config.framework() {
            Some(Framework::FastApi) => {
                let strategy = FastApiStrategy;
                self.generate_routers(&doc, &strategy)?;
                self.transition(PipelineState::RoutersEmitted);
                self.wire_app(&doc, &strategy)?;
                self.transition(PipelineState::Wired);
            }
            None => {
                log::info!(
                    "UnsupportedFramework: router generation is only available for fastapi (got `{}`).",
                    self.config.framework
                );
            }
        }

        Ok(())
    }

    fn load(&self) -> AppResult<Option<Document>> {
        let path = self.writer.resolve(&self.config.openapi_path);
        match self.loader.load(&path) {
            Ok(doc) => Ok(Some(doc)),
            Err(e) if !e.is_fatal() => {
                log::warn!("{}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn generate_models(&mut self, doc: &Document) -> AppResult<()> {
        let dir = self.config.models_package.clone();
        self.writer.ensure(&dir)?;
        self.ensure_marker(&dir)?;

        if doc.schemas.is_empty() {
            log::info!("No components.schemas to generate models from.");
            return Ok(());
        }

        for unit in emit_models(doc, &dir) {
            self.write_unit(&unit, "Model")?;
        }
        Ok(())
    }

    fn generate_routers(
        &mut self,
        doc: &Document,
        strategy: &impl BackendStrategy,
    ) -> AppResult<()> {
        let dir = self.config.routers_package.clone();
        self.writer.ensure(&dir)?;
        self.ensure_marker(&dir)?;

        if doc.paths.is_empty() {
            log::info!("No paths in the OpenAPI document.");
            return Ok(());
        }

        for unit in emit_routers(doc, &dir, strategy) {
            self.write_unit(&unit, "Router")?;
        }
        Ok(())
    }

    fn wire_app(&mut self, doc: &Document, strategy: &impl BackendStrategy) -> AppResult<()> {
        let app_path = self.config.app_path.clone();
        let title = self.config.app_title(doc.title.as_deref());
        let code = strategy.app_wiring(title, &self.config.routers_package, &app_path);

        match self.writer.write_if_absent(&app_path, &code)? {
            WriteOutcome::Preserved => {
                log::info!(
                    "Application file {} already exists; leaving it untouched.",
                    app_path.display()
                );
            }
            _ => {
                log::info!(target: OK_TARGET, "Application wired: {}", app_path.display());
                self.written.push(app_path);
            }
        }
        Ok(())
    }

    fn ensure_marker(&mut self, dir: &Path) -> AppResult<()> {
        if self.writer.ensure_marker(dir)?.wrote() {
            self.written.push(dir.join(MARKER_FILE));
        }
        Ok(())
    }

    fn write_unit(&mut self, unit: &GeneratedUnit, kind: &str) -> AppResult<()> {
        self.writer.write_unit(unit).map_err(|e| match e {
            AppError::Io(io) => AppError::General(format!(
                "Failed to write {}: {}",
                unit.path.display(),
                io
            )),
            other => other,
        })?;
        log::info!(target: OK_TARGET, "{} generated: {}", kind, unit.file_name());
        self.written.push(unit.path.clone());
        Ok(())
    }

    fn transition(&mut self, next: PipelineState) {
        log::debug!("pipeline: {} -> {}", self.state, next);
        self.state = next;
        self.history.push(next);
    }
}

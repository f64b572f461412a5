//! Per-directory processing pipeline.
//!
//! For every discovered model file:
//!
//! 1. Parse the XML into an [`Element`](crate::model::Element) tree
//! 2. Extract the [`Connectome`]
//! 3. Write the DOT file next to the model
//! 4. Render the image next to the model
//!
//! Files are handled one after another. Output names are shared by every
//! model in a directory, so later files overwrite earlier ones.

use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::discover::find_model_files;
use crate::dot::{write_graph_file, GraphStyle};
use crate::error::{NmlGraphError, Result};
use crate::graph::Connectome;
use crate::model;
use crate::render::{RenderOutcome, Renderer};

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to scan for model files
    pub directory: PathBuf,
    /// File name of the DOT output, placed next to each model
    pub graph_filename: String,
    /// File name of the image output, placed next to each model
    pub figure_filename: String,
    /// Descend into subdirectories
    pub recursive: bool,
    /// DOT graph attributes
    pub style: GraphStyle,
    /// Renderer settings, `None` to only write DOT files
    pub renderer: Option<Renderer>,
    /// Record per-file failures and continue instead of aborting
    pub keep_going: bool,
}

impl Config {
    /// Create a configuration with default style and renderer.
    pub fn new(
        directory: impl Into<PathBuf>,
        graph_filename: impl Into<String>,
        figure_filename: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            graph_filename: graph_filename.into(),
            figure_filename: figure_filename.into(),
            recursive: false,
            style: GraphStyle::default(),
            renderer: Some(Renderer::default()),
            keep_going: false,
        }
    }
}

/// Outputs produced for one model file.
#[derive(Debug, Clone)]
pub struct ProcessedFile {
    /// Model file that was read
    pub source: PathBuf,
    /// DOT file that was written
    pub graph_path: PathBuf,
    /// Image file, if rendering was enabled
    pub image_path: Option<PathBuf>,
    /// Render result, if rendering was enabled
    pub render: Option<RenderOutcome>,
    /// Number of nodes written
    pub nodes: usize,
    /// Number of edges written
    pub edges: usize,
}

/// A model file that could not be processed.
#[derive(Debug)]
pub struct FileFailure {
    /// Model file
    pub source: PathBuf,
    /// What went wrong
    pub error: NmlGraphError,
}

/// Summary of a run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Files processed successfully, in processing order
    pub processed: Vec<ProcessedFile>,
    /// Files that failed; only filled when `keep_going` is set
    pub failures: Vec<FileFailure>,
}

impl RunReport {
    /// Check whether every file was processed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives discovery, extraction, writing and rendering.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a pipeline for `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Process every model file under the configured directory.
    pub fn run(&self) -> Result<RunReport> {
        let files = find_model_files(&self.config.directory, self.config.recursive)?;
        info!("found {} model file(s): {:?}", files.len(), files);

        let mut report = RunReport::default();
        for file in files {
            match self.process_file(&file) {
                Ok(processed) => report.processed.push(processed),
                Err(e) if self.config.keep_going => {
                    error!("skipping {}: {}", file.display(), e);
                    report.failures.push(FileFailure {
                        source: file,
                        error: e,
                    });
                }
                Err(e) => return Err(e),
            }
        }
        Ok(report)
    }

    /// Process a single model file.
    pub fn process_file(&self, source: &Path) -> Result<ProcessedFile> {
        let dir = source.parent().unwrap_or_else(|| Path::new(""));
        let graph_path = dir.join(&self.config.graph_filename);

        let root = model::parse_file(source)?;
        let graph = Connectome::from_model(&root).map_err(|e| e.in_file(source))?;
        if graph.is_empty() {
            warn!("{}: no populations or projections found", source.display());
        }
        write_graph_file(&graph_path, &graph, &self.config.style)?;
        info!(
            "{}: wrote {} ({} nodes, {} edges)",
            source.display(),
            graph_path.display(),
            graph.nodes.len(),
            graph.electrical.len() + graph.chemical.len()
        );

        let (image_path, render) = match &self.config.renderer {
            Some(renderer) => {
                let image_path = dir.join(&self.config.figure_filename);
                let outcome = renderer.render(&graph_path, &image_path)?;
                (Some(image_path), Some(outcome))
            }
            None => (None, None),
        };

        Ok(ProcessedFile {
            source: source.to_path_buf(),
            graph_path,
            image_path,
            render,
            nodes: graph.nodes.len(),
            edges: graph.electrical.len() + graph.chemical.len(),
        })
    }
}

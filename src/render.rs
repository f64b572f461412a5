//! Image rendering through an external Graphviz layout program.
//!
//! The renderer is run as `<program> -T<format> <graph-file>` with its
//! standard output redirected into the image file. By default failures are
//! logged and otherwise ignored; [`RenderPolicy::Strict`] turns them into
//! errors.

use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, warn};
use which::which;

use crate::error::{NmlGraphError, Result};

/// Spring-model layout engine used when none is configured.
pub const DEFAULT_RENDERER: &str = "neato";

/// Output format used when none is configured.
pub const DEFAULT_FORMAT: &str = "png";

/// What to do when the renderer is missing or fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPolicy {
    /// Log a warning and carry on
    #[default]
    BestEffort,
    /// Report a [`NmlGraphError::RendererError`]
    Strict,
}

/// Result of a render attempt that did not raise an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The renderer ran and exited successfully
    Rendered,
    /// The renderer was missing or failed; the image may be empty
    Failed(String),
}

/// External renderer invocation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    /// Program name or path
    pub program: String,
    /// Graphviz output format passed as `-T<format>`
    pub format: String,
    /// Failure handling
    pub policy: RenderPolicy,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            program: DEFAULT_RENDERER.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            policy: RenderPolicy::BestEffort,
        }
    }
}

impl Renderer {
    /// Render `graph_path` into `image_path`.
    ///
    /// The image file is created (or truncated) before the renderer runs and
    /// is closed before this returns, whatever the outcome.
    pub fn render(&self, graph_path: &Path, image_path: &Path) -> Result<RenderOutcome> {
        let image = File::create(image_path).map_err(|e| NmlGraphError::file_write(image_path, e))?;

        match self.invoke(graph_path, image) {
            Ok(()) => {
                debug!("rendered {} -> {}", graph_path.display(), image_path.display());
                Ok(RenderOutcome::Rendered)
            }
            Err(message) => match self.policy {
                RenderPolicy::BestEffort => {
                    warn!("renderer '{}' failed on {}: {}", self.program, graph_path.display(), message);
                    Ok(RenderOutcome::Failed(message))
                }
                RenderPolicy::Strict => Err(NmlGraphError::renderer(&self.program, message)),
            },
        }
    }

    fn invoke(&self, graph_path: &Path, image: File) -> std::result::Result<(), String> {
        let program = which(&self.program).map_err(|e| format!("not found on PATH ({})", e))?;

        let status = Command::new(program)
            .arg(format!("-T{}", self.format))
            .arg(graph_path)
            .stdin(Stdio::null())
            .stdout(Stdio::from(image))
            .status()
            .map_err(|e| e.to_string())?;

        if status.success() {
            Ok(())
        } else {
            Err(format!("exited with {}", status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(program: &str, policy: RenderPolicy) -> Renderer {
        Renderer {
            program: program.to_string(),
            policy,
            ..Renderer::default()
        }
    }

    #[test]
    fn test_missing_program_best_effort() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("graph.png");
        let outcome = renderer("nmlgraph-no-such-renderer", RenderPolicy::BestEffort)
            .render(&dir.path().join("graph.gv"), &image)
            .unwrap();
        assert!(matches!(outcome, RenderOutcome::Failed(_)));
        // Image file is still created, empty
        assert_eq!(std::fs::metadata(&image).unwrap().len(), 0);
    }

    #[test]
    fn test_missing_program_strict() {
        let dir = tempfile::tempdir().unwrap();
        let err = renderer("nmlgraph-no-such-renderer", RenderPolicy::Strict)
            .render(&dir.path().join("graph.gv"), &dir.path().join("graph.png"))
            .unwrap_err();
        assert!(matches!(err, NmlGraphError::RendererError { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_stdout_redirected_to_image() {
        let dir = tempfile::tempdir().unwrap();
        let graph = dir.path().join("graph.gv");
        let image = dir.path().join("graph.png");
        let outcome = renderer("echo", RenderPolicy::Strict)
            .render(&graph, &image)
            .unwrap();
        assert_eq!(outcome, RenderOutcome::Rendered);
        let written = std::fs::read_to_string(&image).unwrap();
        assert_eq!(written, format!("-Tpng {}\n", graph.display()));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let graph = dir.path().join("graph.gv");
        let image = dir.path().join("graph.png");

        let outcome = renderer("false", RenderPolicy::BestEffort)
            .render(&graph, &image)
            .unwrap();
        assert!(matches!(outcome, RenderOutcome::Failed(_)));

        let err = renderer("false", RenderPolicy::Strict)
            .render(&graph, &image)
            .unwrap_err();
        assert!(matches!(err, NmlGraphError::RendererError { .. }));
    }

    #[test]
    fn test_unwritable_image_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("missing").join("graph.png");
        let err = Renderer::default()
            .render(&dir.path().join("graph.gv"), &image)
            .unwrap_err();
        assert!(matches!(err, NmlGraphError::FileWriteError { .. }));
    }
}

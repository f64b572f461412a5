//! nmlgraph - NeuroML connectome diagrams
//!
//! Writes a Graphviz file and an image next to every model file found.
//!
//! # Usage
//!
//! ```bash
//! nmlgraph <DIRECTORY> <GRAPH_FILENAME> <FIGURE_FILENAME> [RECURSIVE]
//! ```

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use log::warn;
use nmlgraph::{
    error::{NmlGraphError, Result},
    render::{RenderPolicy, Renderer, DEFAULT_FORMAT, DEFAULT_RENDERER},
    Config, Pipeline, USAGE_EXIT_CODE,
};

/// NeuroML connectome diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing model files (.nml)
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Name of the Graphviz file written next to each model
    #[arg(value_name = "GRAPH_FILENAME")]
    graph_filename: String,

    /// Name of the image written next to each model
    #[arg(value_name = "FIGURE_FILENAME")]
    figure_filename: String,

    /// Any value, including one starting with '-', enables recursive discovery
    #[arg(value_name = "RECURSIVE", allow_hyphen_values = true)]
    recursive: Option<String>,

    /// Graphviz layout program
    #[arg(long, default_value = DEFAULT_RENDERER)]
    renderer: String,

    /// Image format passed to the layout program
    #[arg(long, default_value = DEFAULT_FORMAT)]
    format: String,

    /// Treat renderer failures as fatal
    #[arg(long)]
    strict_render: bool,

    /// Only write Graphviz files
    #[arg(long, conflicts_with = "strict_render")]
    no_render: bool,

    /// Continue with the next file after a failure
    #[arg(long)]
    keep_going: bool,
}

/// Help and version requests are not usage errors.
fn is_usage_error(err: &clap::Error) -> bool {
    !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

fn config_from_args(args: Args) -> Config {
    let renderer = (!args.no_render).then(|| Renderer {
        program: args.renderer,
        format: args.format,
        policy: if args.strict_render {
            RenderPolicy::Strict
        } else {
            RenderPolicy::BestEffort
        },
    });

    let mut config = Config::new(args.directory, args.graph_filename, args.figure_filename);
    config.recursive = args.recursive.is_some();
    config.renderer = renderer;
    config.keep_going = args.keep_going;
    config
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !is_usage_error(&e) => e.exit(),
        Err(e) => {
            let usage = NmlGraphError::UsageError {
                message: e.render().to_string(),
            };
            eprintln!("{}", usage);
            std::process::exit(USAGE_EXIT_CODE);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run the pipeline
    let report = Pipeline::new(config_from_args(args)).run()?;

    if !report.is_success() {
        for failure in &report.failures {
            warn!("failed: {}: {}", failure.source.display(), failure.error);
        }
        std::process::exit(1);
    }

    Ok(())
}

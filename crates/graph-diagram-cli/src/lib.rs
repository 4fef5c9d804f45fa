//! CLI logic for the graph diagram renderer.
//!
//! This module contains the core CLI logic: it reads a markup file, renders
//! it and writes the SVG. The binary adds logging setup and error reporting.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use graph_diagram::{DiagramBuilder, GraphDiagramError};

/// Run the graph diagram CLI application
///
/// This function reads the markup file, renders the diagram it declares
/// and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `GraphDiagramError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Markup errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), GraphDiagramError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let model = builder.parse(&source)?;
    let svg = builder.render_svg(&model)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

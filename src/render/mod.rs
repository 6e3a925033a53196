//! # Rendering
//!
//! Consumes the graph's public sequences to produce the output artifacts:
//! one SVG diagram per interned formation, one Graphviz DOT description of
//! the whole graph, and (via the external layout tool) a rendered image.

pub mod svg;
pub mod dot;
pub mod layout;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::graph::Graph;
use crate::Result;

/// File name of the emitted DOT description.
pub const DOT_FILE: &str = "graph.dot";

/// Write every per-formation SVG plus the DOT file into `dir`, creating
/// the directory if absent.
pub fn write_artifacts(graph: &Graph, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    for (id, formation) in graph.entries() {
        let file = dir.join(format!("{}.svg", id.dot_id()));
        fs::write(&file, svg::formation_svg(formation))?;
    }
    let mut out = Vec::new();
    dot::write_dot(graph, &mut out)?;
    fs::write(dir.join(DOT_FILE), out)?;
    info!(
        dir = %dir.display(),
        formations = graph.formations().len(),
        "artifacts written"
    );
    Ok(())
}

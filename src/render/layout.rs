//! External layout tool invocation.
//!
//! Runs Graphviz `dot` over the emitted DOT file to produce the rendered
//! graph image. The subprocess runs to completion synchronously; a
//! non-zero exit is fatal to the run.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::info;

use crate::{Error, Result};

use super::DOT_FILE;

/// Name of the rendered whole-graph image.
pub const GRAPH_SVG: &str = "graph.svg";

/// Invoke `dot -Tsvg` in `dir`, rendering [`DOT_FILE`] to [`GRAPH_SVG`].
pub fn render_graph(dir: &Path) -> Result<()> {
    let status = Command::new("dot")
        .arg(format!("-o{GRAPH_SVG}"))
        .arg("-Tsvg")
        .arg(DOT_FILE)
        .current_dir(dir)
        .stdin(Stdio::null())
        .status()?;
    if !status.success() {
        return Err(Error::Layout { status });
    }
    info!(dir = %dir.display(), "graph rendered");
    Ok(())
}

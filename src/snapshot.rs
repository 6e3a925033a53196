//! Graph snapshot persistence.
//!
//! The whole graph is deserialized once at start and serialized once at
//! the end of a successful run. The save is atomic — serialize to a
//! sibling temp file, then rename over the target — so a crash mid-run
//! loses the run's updates but never corrupts the previous snapshot.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::graph::Graph;
use crate::{Error, Result};

/// Snapshot file name inside the output directory.
pub const SNAPSHOT_FILE: &str = "graph.json";

/// Load the graph from a snapshot file. A missing file is not an error:
/// it yields an empty graph. Any other read or decode failure is fatal.
pub fn load(path: &Path) -> Result<Graph> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no snapshot, starting empty");
            return Ok(Graph::new());
        }
        Err(e) => return Err(e.into()),
    };
    let graph: Graph = serde_json::from_slice(&bytes).map_err(|source| Error::Snapshot {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        formations = graph.formations().len(),
        calls = graph.calls().len(),
        "snapshot loaded"
    );
    Ok(graph)
}

/// Serialize the graph over the snapshot file, atomically.
pub fn save(path: &Path, graph: &Graph) -> Result<()> {
    let json = serde_json::to_vec_pretty(graph).map_err(|source| Error::Snapshot {
        path: path.to_path_buf(),
        source,
    })?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), "snapshot saved");
    Ok(())
}

//! Call — a labeled directed transition between two formations.

use serde::{Deserialize, Serialize};

use super::FormationId;

/// One square-dance call executing between two interned formations.
///
/// Endpoints are held by identity, not by reference — the graph owns the
/// formations. Because formations are deduplicated before identities are
/// handed out, identity equality coincides with formation equality, which
/// is exactly what call equality needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    /// The call's text, verbatim from the transcript.
    pub label: String,
    pub from: FormationId,
    pub to: FormationId,
}

impl Call {
    pub fn new(label: impl Into<String>, from: FormationId, to: FormationId) -> Self {
        Self {
            label: label.into(),
            from,
            to,
        }
    }
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} -> {}", self.from, self.label, self.to)
    }
}

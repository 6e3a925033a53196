//! Line-driven transcript parser.
//!
//! A single forward scan over the text. Dancer-bearing lines accumulate
//! into a pending formation; any other line flushes the pending formation
//! into the graph and is recorded in the session. When a formation is
//! flushed, the nearest prior plain-text entry (skipping sd's warning
//! lines) is promoted in place to a [`Call`] edge from the previous
//! formation to the new one.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::graph::Graph;
use crate::model::{Call, Dancer, Formation, FormationId};
use crate::Result;

use super::token;

/// Lines starting with this marker are sd diagnostics: preserved in the
/// session verbatim, never eligible as call labels.
pub const WARNING_MARKER: &str = "Warning:";

/// One parsed transcript entry: a verbatim text line, or a text line that
/// was identified as a call and promoted to a structured edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEntry {
    Text(String),
    Call(Call),
}

impl std::fmt::Display for SessionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEntry::Text(line) => write!(f, "{line}"),
            SessionEntry::Call(call) => write!(f, "{call}"),
        }
    }
}

/// The ordered list of entries produced by one parse.
pub type Session = Vec<SessionEntry>;

/// Parse a sequence file, interning its formations and calls into `graph`.
pub fn parse_file(graph: &mut Graph, path: &Path) -> Result<Session> {
    let text = fs::read_to_string(path)?;
    Ok(parse_text(graph, &text))
}

/// Parse transcript text, interning its formations and calls into `graph`.
///
/// The canonical squared set is interned first and seeds the "previous
/// formation" for the first transition.
pub fn parse_text(graph: &mut Graph, text: &str) -> Session {
    let mut parser = Parser::new(graph);
    for (line_number, line) in text.lines().enumerate() {
        parser.line(line, line_number);
    }
    parser.finish()
}

/// Parser state — pending dancers plus the session built so far.
struct Parser<'g> {
    graph: &'g mut Graph,
    session: Session,
    pending: Vec<Dancer>,
    previous: FormationId,
}

impl<'g> Parser<'g> {
    fn new(graph: &'g mut Graph) -> Self {
        let previous = graph.intern_formation(Formation::squared_set());
        Self {
            graph,
            session: Session::new(),
            pending: Vec::new(),
            previous,
        }
    }

    fn line(&mut self, line: &str, line_number: usize) {
        let dancers = token::scan_dancers(line, line_number);
        if dancers.is_empty() {
            if !self.pending.is_empty() {
                self.finish_formation();
            }
            self.session.push(SessionEntry::Text(line.to_string()));
        } else {
            self.pending.extend(dancers);
        }
    }

    fn finish(mut self) -> Session {
        if !self.pending.is_empty() {
            self.finish_formation();
        }
        debug!(
            entries = self.session.len(),
            formations = self.graph.formations().len(),
            calls = self.graph.calls().len(),
            "parse complete"
        );
        self.session
    }

    /// Index of the call-label candidate: the nearest prior plain-text
    /// entry that is not a warning line. Hitting an already-promoted call
    /// means this transition's label was consumed — no candidate.
    fn label_candidate(&self) -> Option<usize> {
        for (i, entry) in self.session.iter().enumerate().rev() {
            match entry {
                SessionEntry::Call(_) => return None,
                SessionEntry::Text(text) if text.starts_with(WARNING_MARKER) => continue,
                SessionEntry::Text(_) => return Some(i),
            }
        }
        None
    }

    /// Intern the pending dancers as a formation and, if a label
    /// candidate exists, promote it in place to a call edge. With or
    /// without an edge, the new formation becomes "previous".
    fn finish_formation(&mut self) {
        let formation = Formation::new(std::mem::take(&mut self.pending));
        let id = self.graph.intern_formation(formation);
        if matches!(self.session.last(), Some(SessionEntry::Text(_))) {
            if let Some(index) = self.label_candidate() {
                if let SessionEntry::Text(label) = &self.session[index] {
                    let call = self
                        .graph
                        .intern_call(Call::new(label.clone(), self.previous, id));
                    self.session[index] = SessionEntry::Call(call);
                }
            }
        }
        self.previous = id;
    }
}

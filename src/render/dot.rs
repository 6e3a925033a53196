//! Graphviz DOT emission — serialize the graph as a DOT digraph.
//!
//! Produces a `strict digraph` with one image node per formation and one
//! labeled edge per call, ready for the external layout tool.

use std::io::Write;

use crate::graph::Graph;
use crate::Result;

/// Write the graph as DOT text.
///
/// Each formation node references its SVG diagram by file name; edge
/// labels carry the call text verbatim (escaped for DOT's quoted strings).
pub fn write_dot<W: Write>(graph: &Graph, writer: &mut W) -> Result<()> {
    writeln!(writer, "strict digraph {{")?;
    for (id, _formation) in graph.entries() {
        writeln!(
            writer,
            "{} [image=\"{}.svg\", shape=none];",
            id.dot_id(),
            id.dot_id(),
        )?;
    }
    for call in graph.calls() {
        writeln!(
            writer,
            "{} -> {} [label=\"{}\"];",
            call.from.dot_id(),
            call.to.dot_id(),
            escape_label(&call.label),
        )?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// Escape a call label for a DOT double-quoted string.
fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Call, Dancer, Facing, Formation, Role};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_dot() {
        let mut graph = Graph::new();
        let a = graph.intern_formation(Formation::squared_set());
        let b = graph.intern_formation(Formation::new([Dancer::new(
            0,
            0,
            1,
            Role::Leader,
            Facing::Up,
        )]));
        graph.intern_call(Call::new("circle left", a, b));

        let mut out = Vec::new();
        write_dot(&graph, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "strict digraph {\n\
             f1 [image=\"f1.svg\", shape=none];\n\
             f2 [image=\"f2.svg\", shape=none];\n\
             f1 -> f2 [label=\"circle left\"];\n\
             }\n"
        );
    }

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label(r#"say "hi" \ bye"#), r#"say \"hi\" \\ bye"#);
    }
}

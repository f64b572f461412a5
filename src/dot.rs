//! Graphviz DOT output.
//!
//! The layout of the written file is fixed; only the values in [`GraphStyle`]
//! vary. With the default style a two-node graph looks like:
//!
//! ```text
//! digraph exp {
//! node [fontsize=11]; AVAL; AVAR;
//! AVAL -> AVAR [minlen=2 arrowhead="tee"];
//! splines=true;sep="+25,25";overlap=false
//! fontsize=12;
//! }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{NmlGraphError, Result};
use crate::graph::Connectome;

/// Graph-level attributes of the written DOT file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStyle {
    /// Name of the digraph
    pub name: String,
    /// Font size applied to every node
    pub node_font_size: u32,
    /// Graph font size
    pub font_size: u32,
    /// Node separation passed to the layout engine
    pub separation: String,
    /// Draw edges as splines
    pub splines: bool,
    /// Allow node overlap
    pub overlap: bool,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            name: "exp".to_string(),
            node_font_size: 11,
            font_size: 12,
            separation: "+25,25".to_string(),
            splines: true,
            overlap: false,
        }
    }
}

/// Write a connectome as DOT to any writer.
pub fn write_graph<W: Write>(out: &mut W, graph: &Connectome, style: &GraphStyle) -> std::io::Result<()> {
    writeln!(out, "digraph {} {{", style.name)?;

    write!(out, "node [fontsize={}]; ", style.node_font_size)?;
    for node in &graph.nodes {
        write!(out, "{}; ", node)?;
    }
    writeln!(out)?;

    for edge in &graph.electrical {
        writeln!(out, "{};", edge)?;
    }
    for edge in &graph.chemical {
        writeln!(out, "{};", edge)?;
    }

    write!(out, "splines={};", style.splines)?;
    write!(out, "sep=\"{}\";", style.separation)?;
    writeln!(out, "overlap={}", style.overlap)?;
    writeln!(out, "fontsize={};", style.font_size)?;
    write!(out, "}}")
}

/// Write a connectome as DOT to `path`, replacing any existing file.
pub fn write_graph_file(path: &Path, graph: &Connectome, style: &GraphStyle) -> Result<()> {
    let file = File::create(path).map_err(|e| NmlGraphError::file_write(path, e))?;
    let mut out = BufWriter::new(file);
    write_graph(&mut out, graph, style)
        .and_then(|_| out.flush())
        .map_err(|e| NmlGraphError::file_write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeKind, GraphEdge};

    fn to_dot(graph: &Connectome, style: &GraphStyle) -> String {
        let mut buf = Vec::new();
        write_graph(&mut buf, graph, style).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> Connectome {
        Connectome {
            nodes: vec!["AVAL".to_string(), "AVAR".to_string()],
            electrical: vec![GraphEdge::new("AVAL", "AVAR", EdgeKind::Electrical)],
            chemical: vec![
                GraphEdge::new("AVAL", "AVBL", EdgeKind::Chemical { inhibitory: true }),
                GraphEdge::new("AVAL", "AVBL", EdgeKind::Chemical { inhibitory: false }),
            ],
        }
    }

    #[test]
    fn test_default_layout() {
        let dot = to_dot(&sample(), &GraphStyle::default());
        let expected = "digraph exp {\n\
node [fontsize=11]; AVAL; AVAR; \n\
AVAL -> AVAR [minlen=2 arrowhead=\"tee\"];\n\
AVAL -> AVBL [minlen=2 color=red];\n\
AVAL -> AVBL [minlen=2];\n\
splines=true;sep=\"+25,25\";overlap=false\n\
fontsize=12;\n\
}";
        assert_eq!(dot, expected);
    }

    #[test]
    fn test_empty_graph() {
        let dot = to_dot(&Connectome::default(), &GraphStyle::default());
        assert!(dot.starts_with("digraph exp {\nnode [fontsize=11]; \nsplines=true;"));
        assert!(dot.ends_with("fontsize=12;\n}"));
    }

    #[test]
    fn test_custom_style() {
        let style = GraphStyle {
            name: "worm".to_string(),
            node_font_size: 9,
            overlap: true,
            ..GraphStyle::default()
        };
        let dot = to_dot(&sample(), &style);
        assert!(dot.starts_with("digraph worm {\nnode [fontsize=9]; "));
        assert!(dot.contains("overlap=true\n"));
    }

    #[test]
    fn test_write_graph_file_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.gv");
        let graph = sample();

        write_graph_file(&path, &graph, &GraphStyle::default()).unwrap();
        let first = std::fs::read(&path).unwrap();
        write_graph_file(&path, &graph, &GraphStyle::default()).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_graph_file_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("graph.gv");
        let err = write_graph_file(&path, &sample(), &GraphStyle::default()).unwrap_err();
        assert!(matches!(err, NmlGraphError::FileWriteError { .. }));
    }
}

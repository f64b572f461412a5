//! Core types for connectome graph representation.

use std::fmt;

/// Minimum rank separation requested for every edge.
pub const MIN_EDGE_LENGTH: u32 = 2;

/// Id prefixes reserved for body-wall muscle populations.
pub const MUSCLE_PREFIXES: [&str; 2] = ["MV", "MD"];

/// Marker inside a synapse component name that denotes inhibition.
pub const INHIBITORY_MARKER: &str = "inh";

/// Check if a population id names a muscle.
pub fn is_muscle(id: &str) -> bool {
    MUSCLE_PREFIXES.iter().any(|prefix| id.starts_with(prefix))
}

/// A named group of cells, drawn as one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    /// Population id, unique within a file by convention only
    pub id: String,
}

impl Population {
    /// Check if this population is a muscle.
    pub fn is_muscle(&self) -> bool {
        is_muscle(&self.id)
    }
}

/// Gap-junction projection between two populations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectricalConnection {
    /// Presynaptic population id
    pub presynaptic: String,
    /// Postsynaptic population id
    pub postsynaptic: String,
}

impl ElectricalConnection {
    /// Check if either endpoint is a muscle.
    pub fn involves_muscle(&self) -> bool {
        is_muscle(&self.presynaptic) || is_muscle(&self.postsynaptic)
    }

    /// The single edge drawn for this connection.
    pub fn edge(&self) -> GraphEdge {
        GraphEdge::new(&self.presynaptic, &self.postsynaptic, EdgeKind::Electrical)
    }
}

/// One synapse instance inside a chemical projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synapse {
    /// Name of the postsynaptic component
    pub post_component: String,
}

impl Synapse {
    /// Check if the synapse component is inhibitory.
    pub fn is_inhibitory(&self) -> bool {
        self.post_component.contains(INHIBITORY_MARKER)
    }
}

/// Synaptic projection between two populations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChemicalConnection {
    /// Presynaptic population id
    pub presynaptic: String,
    /// Postsynaptic population id
    pub postsynaptic: String,
    /// Synapse instances, in document order
    pub synapses: Vec<Synapse>,
}

impl ChemicalConnection {
    /// Check if either endpoint is a muscle.
    pub fn involves_muscle(&self) -> bool {
        is_muscle(&self.presynaptic) || is_muscle(&self.postsynaptic)
    }

    /// One edge per synapse, colored by inhibition.
    pub fn edges(&self) -> impl Iterator<Item = GraphEdge> + '_ {
        self.synapses.iter().map(move |synapse| {
            GraphEdge::new(
                &self.presynaptic,
                &self.postsynaptic,
                EdgeKind::Chemical {
                    inhibitory: synapse.is_inhibitory(),
                },
            )
        })
    }
}

/// Rendering class of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Electrical coupling, drawn with a tee arrowhead
    Electrical,
    /// Chemical synapse, red when inhibitory
    Chemical { inhibitory: bool },
}

/// A directed edge of the output graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    /// Source node id
    pub from: String,
    /// Target node id
    pub to: String,
    /// Edge style
    pub kind: EdgeKind,
}

impl GraphEdge {
    /// Create a new edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
        }
    }
}

impl fmt::Display for GraphEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} [minlen={}", self.from, self.to, MIN_EDGE_LENGTH)?;
        match self.kind {
            EdgeKind::Electrical => write!(f, " arrowhead=\"tee\"")?,
            EdgeKind::Chemical { inhibitory: true } => write!(f, " color=red")?,
            EdgeKind::Chemical { inhibitory: false } => {}
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_muscle() {
        assert!(is_muscle("MVULVA"));
        assert!(is_muscle("MDL01"));
        assert!(!is_muscle("AVAL"));
        assert!(!is_muscle("mvulva"));
        assert!(!is_muscle("DM"));
    }

    #[test]
    fn test_edge_display() {
        let elec = GraphEdge::new("AVAL", "AVAR", EdgeKind::Electrical);
        assert_eq!(elec.to_string(), "AVAL -> AVAR [minlen=2 arrowhead=\"tee\"]");

        let inh = GraphEdge::new("AVAL", "AVBL", EdgeKind::Chemical { inhibitory: true });
        assert_eq!(inh.to_string(), "AVAL -> AVBL [minlen=2 color=red]");

        let exc = GraphEdge::new("AVAL", "AVBL", EdgeKind::Chemical { inhibitory: false });
        assert_eq!(exc.to_string(), "AVAL -> AVBL [minlen=2]");
    }

    #[test]
    fn test_chemical_edges_per_synapse() {
        let conn = ChemicalConnection {
            presynaptic: "AVAL".to_string(),
            postsynaptic: "AVBL".to_string(),
            synapses: vec![
                Synapse {
                    post_component: "AVBL_inh_syn".to_string(),
                },
                Synapse {
                    post_component: "AVBL_exc_syn".to_string(),
                },
                Synapse {
                    post_component: "neuron_to_neuron_inh_syn".to_string(),
                },
            ],
        };
        let kinds: Vec<_> = conn.edges().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EdgeKind::Chemical { inhibitory: true },
                EdgeKind::Chemical { inhibitory: false },
                EdgeKind::Chemical { inhibitory: true },
            ]
        );
    }
}

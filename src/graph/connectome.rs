//! Connectome graph structure.

use log::debug;

use super::extract::{extract_chemical, extract_electrical, extract_populations};
use super::types::GraphEdge;
use crate::error::Result;
use crate::model::Element;

/// The drawable graph of one model file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connectome {
    /// Node ids, in document order, duplicates preserved
    pub nodes: Vec<String>,
    /// Electrical edges, in document order
    pub electrical: Vec<GraphEdge>,
    /// Chemical edges, one per synapse, in document order
    pub chemical: Vec<GraphEdge>,
}

impl Connectome {
    /// Build the graph from a parsed model.
    ///
    /// Runs the population, electrical and chemical passes in turn. The first
    /// missing attribute aborts extraction.
    pub fn from_model(root: &Element) -> Result<Self> {
        let nodes: Vec<String> = extract_populations(root)?
            .into_iter()
            .map(|population| population.id)
            .collect();

        let electrical: Vec<GraphEdge> = extract_electrical(root)?
            .iter()
            .map(|connection| connection.edge())
            .collect();

        let chemical: Vec<GraphEdge> = extract_chemical(root)?
            .iter()
            .flat_map(|connection| connection.edges())
            .collect();

        debug!(
            "extracted {} populations, {} electrical edges, {} chemical edges",
            nodes.len(),
            electrical.len(),
            chemical.len()
        );

        Ok(Connectome {
            nodes,
            electrical,
            chemical,
        })
    }

    /// Check whether the graph has no nodes and no edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.electrical.is_empty() && self.chemical.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::is_muscle;
    use crate::model::parse;

    #[test]
    fn test_from_model() {
        let input = r#"<neuroml>
  <population id="AVAL"/>
  <population id="AVAR"/>
  <population id="MVULVA"/>
  <electricalProjection presynapticPopulation="AVAL" postsynapticPopulation="AVAR"/>
  <continuousProjection presynapticPopulation="AVAL" postsynapticPopulation="AVBL">
    <continuousConnectionInstance postComponent="AVBL_inh_syn"/>
    <continuousConnectionInstance postComponent="AVBL_exc_syn"/>
  </continuousProjection>
  <continuousProjection presynapticPopulation="AVAR" postsynapticPopulation="MVULVA">
    <continuousConnectionInstance postComponent="MVULVA_exc_syn"/>
  </continuousProjection>
</neuroml>"#;
        let graph = Connectome::from_model(&parse(input).unwrap()).unwrap();
        assert_eq!(graph.nodes, vec!["AVAL", "AVAR"]);
        assert_eq!(graph.electrical.len(), 1);
        assert_eq!(graph.chemical.len(), 2);
        assert!(graph
            .electrical
            .iter()
            .chain(&graph.chemical)
            .all(|edge| !is_muscle(&edge.from) && !is_muscle(&edge.to)));
    }

    #[test]
    fn test_empty_model() {
        let graph = Connectome::from_model(&parse("<neuroml/>").unwrap()).unwrap();
        assert!(graph.is_empty());
    }
}

//! Graph element extraction.
//!
//! Each extractor is a [`Visitor`] that walks the whole model tree once and
//! collects the elements whose tag contains its marker. Muscle populations
//! and every connection touching one are dropped.

use log::trace;

use super::types::{ChemicalConnection, ElectricalConnection, Population, Synapse};
use crate::error::Result;
use crate::model::{Element, Visitor};

/// Tag marker for population elements.
pub const POPULATION_TAG: &str = "population";

/// Tag marker for electrical projections.
pub const ELECTRICAL_PROJECTION_TAG: &str = "electricalProjection";

/// Tag marker for chemical (continuous) projections.
pub const CHEMICAL_PROJECTION_TAG: &str = "continuousProjection";

const ID_ATTR: &str = "id";
const PRE_ATTR: &str = "presynapticPopulation";
const POST_ATTR: &str = "postsynapticPopulation";
const POST_COMPONENT_ATTR: &str = "postComponent";

#[derive(Default)]
struct PopulationCollector {
    populations: Vec<Population>,
}

impl Visitor for PopulationCollector {
    fn visit(&mut self, element: &Element) -> Result<()> {
        if !element.tag_contains(POPULATION_TAG) {
            return Ok(());
        }
        let population = Population {
            id: element.required_attribute(ID_ATTR)?.to_string(),
        };
        if population.is_muscle() {
            trace!("skipping muscle population {}", population.id);
            return Ok(());
        }
        self.populations.push(population);
        Ok(())
    }
}

#[derive(Default)]
struct ElectricalCollector {
    connections: Vec<ElectricalConnection>,
}

impl Visitor for ElectricalCollector {
    fn visit(&mut self, element: &Element) -> Result<()> {
        if !element.tag_contains(ELECTRICAL_PROJECTION_TAG) {
            return Ok(());
        }
        let connection = ElectricalConnection {
            presynaptic: element.required_attribute(PRE_ATTR)?.to_string(),
            postsynaptic: element.required_attribute(POST_ATTR)?.to_string(),
        };
        if !connection.involves_muscle() {
            self.connections.push(connection);
        }
        Ok(())
    }
}

#[derive(Default)]
struct ChemicalCollector {
    connections: Vec<ChemicalConnection>,
}

impl Visitor for ChemicalCollector {
    fn visit(&mut self, element: &Element) -> Result<()> {
        if !element.tag_contains(CHEMICAL_PROJECTION_TAG) {
            return Ok(());
        }
        let presynaptic = element.required_attribute(PRE_ATTR)?.to_string();
        let postsynaptic = element.required_attribute(POST_ATTR)?.to_string();

        let mut connection = ChemicalConnection {
            presynaptic,
            postsynaptic,
            synapses: Vec::new(),
        };
        if connection.involves_muscle() {
            return Ok(());
        }

        // Synapse attributes are only read once the pair is known to be kept
        for child in element.children() {
            connection.synapses.push(Synapse {
                post_component: child.required_attribute(POST_COMPONENT_ATTR)?.to_string(),
            });
        }
        self.connections.push(connection);
        Ok(())
    }
}

/// Collect non-muscle populations in document order.
pub fn extract_populations(root: &Element) -> Result<Vec<Population>> {
    let mut collector = PopulationCollector::default();
    root.accept(&mut collector)?;
    Ok(collector.populations)
}

/// Collect electrical projections between non-muscle populations.
pub fn extract_electrical(root: &Element) -> Result<Vec<ElectricalConnection>> {
    let mut collector = ElectricalCollector::default();
    root.accept(&mut collector)?;
    Ok(collector.connections)
}

/// Collect chemical projections between non-muscle populations.
pub fn extract_chemical(root: &Element) -> Result<Vec<ChemicalConnection>> {
    let mut collector = ChemicalCollector::default();
    root.accept(&mut collector)?;
    Ok(collector.connections)
}

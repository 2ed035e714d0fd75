//! The dependency graph of a belief base --- atoms, beliefs, and which beliefs mention which atoms.
//!
//! The graph is bipartite and directed: one node per distinct atom symbol, one node per belief (labelled "Belief i" by 1-based position), and an edge from an atom to every belief whose rendering mentions it.
//!
//! Construction is a deliberately naive lexical scan of each belief's rendering --- every alphabetic character is taken as an atom symbol, with no attention to formula structure.
//! This is acceptable because the graph exists for human-facing visualization, not inference, and the scan is isolated here so a structural walk could replace it without touching the belief base.
//!
//! The graph is a pure derivation of the base: it is rebuilt in full on every request and holds no state of its own.
//! Node creation order follows belief order, then first-occurrence atom order, which matters only for layout.

use std::collections::HashMap;

use petgraph::{
    dot::{Config, Dot},
    graph::{DiGraph, NodeIndex},
};

use crate::{
    base::BeliefBase,
    misc::log::targets,
    structures::atom::{self, Atom},
};

/// A node of the dependency graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DependencyNode {
    /// An atom symbol occurring in some belief.
    Atom(Atom),

    /// A belief, noted by 1-based position and canonical rendering.
    Belief {
        position: usize,
        rendering: String,
    },
}

impl DependencyNode {
    /// The label under which the node is displayed.
    pub fn label(&self) -> String {
        match self {
            Self::Atom(atom) => atom.to_string(),
            Self::Belief { position, .. } => format!("Belief {position}"),
        }
    }
}

impl std::fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An edge of the dependency graph: the source atom is mentioned by the target belief.
///
/// The edge carries no information beyond direction; the empty [Display](std::fmt::Display) rendering exists for [DOT output](as_dot).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mention;

impl std::fmt::Display for Mention {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

/// The dependency graph of a belief base.
pub type DependencyGraph = DiGraph<DependencyNode, Mention>;

/// Builds the dependency graph of `base`.
///
/// Edges are deduplicated: repeated occurrences of an atom within one belief yield a single edge.
pub fn dependency_graph(base: &BeliefBase) -> DependencyGraph {
    let mut graph = DiGraph::new();
    let mut atom_indices: HashMap<Atom, NodeIndex> = HashMap::new();

    for (position, belief) in base.beliefs().iter().enumerate() {
        let rendering = belief.to_string();

        let belief_index = graph.add_node(DependencyNode::Belief {
            position: position + 1,
            rendering: rendering.clone(),
        });

        for character in rendering.chars() {
            if !atom::is_atom_symbol(character) {
                continue;
            }

            let atom_index = *atom_indices
                .entry(character)
                .or_insert_with(|| graph.add_node(DependencyNode::Atom(character)));

            if graph.find_edge(atom_index, belief_index).is_none() {
                graph.add_edge(atom_index, belief_index, Mention);
            }
        }
    }

    log::debug!(
        target: targets::GRAPH,
        "built: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    graph
}

/// The graph in DOT form, for rendering by an external drawing tool.
///
/// Only labels and edge direction are promised --- visual attributes are a rendering concern.
pub fn as_dot(graph: &DependencyGraph) -> String {
    Dot::with_config(graph, &[Config::EdgeNoLabel]).to_string()
}

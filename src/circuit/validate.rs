//! Circuit validation.

use std::collections::HashSet;

use crate::error::{Result, SimError};
use crate::gates::GateKind;

use super::graph::Node;
use super::types::NodeId;

/// Validate the raw parts of a circuit graph before construction.
///
/// Checks, in order:
/// - every gate input reference resolves within the node set
/// - every gate is wired with exactly its kind's arity
/// - nested subcircuits are combinational and single-output
/// - external input names are unique, external output names are unique
///   (the two namespaces are independent)
/// - every output binding and feedback declaration resolves
/// - feedback is only declared on gate nodes
pub(crate) fn validate_graph(
    nodes: &[Node],
    outputs: &[(String, NodeId)],
    feedback: &[NodeId],
) -> Result<()> {
    for (i, node) in nodes.iter().enumerate() {
        let Node::Gate { kind, inputs } = node else {
            continue;
        };

        for &src in inputs {
            if src.0 >= nodes.len() {
                return Err(SimError::dangling(format!("inputs of node n{i}"), src));
            }
        }

        if inputs.len() != kind.arity() {
            return Err(SimError::arity(
                kind.name(),
                NodeId(i),
                kind.arity(),
                inputs.len(),
            ));
        }

        if let GateKind::Subcircuit(sub) = kind {
            if sub.outputs().len() != 1 {
                return Err(SimError::topology(format!(
                    "subcircuit '{}' at n{i} must have exactly one output, has {}",
                    sub.name(),
                    sub.outputs().len()
                )));
            }
            if sub.is_sequential() {
                return Err(SimError::topology(format!(
                    "subcircuit '{}' at n{i} carries feedback; sequential graphs \
                     cannot be nested as gates",
                    sub.name()
                )));
            }
        }
    }

    let mut input_names = HashSet::new();
    for node in nodes {
        if let Node::Input { name } = node {
            if !input_names.insert(name.as_str()) {
                return Err(SimError::duplicate("input", name));
            }
        }
    }

    let mut output_names = HashSet::new();
    for (name, target) in outputs {
        if !output_names.insert(name.as_str()) {
            return Err(SimError::duplicate("output", name));
        }
        if target.0 >= nodes.len() {
            return Err(SimError::dangling(format!("output binding '{name}'"), *target));
        }
    }

    for &node in feedback {
        match nodes.get(node.0) {
            None => return Err(SimError::dangling("feedback declaration", node)),
            Some(Node::Input { name }) => {
                return Err(SimError::topology(format!(
                    "feedback declared on external input '{name}'; \
                     only gate nodes carry state"
                )));
            }
            Some(Node::Gate { .. }) => {}
        }
    }

    Ok(())
}

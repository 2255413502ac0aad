//! Dependency ordering of circuit nodes.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::circuit::{CircuitGraph, NodeId};
use crate::error::{Result, SimError};

/// Compute a topological evaluation order over `graph` with the
/// out-edges of declared feedback nodes cut (consumers of a feedback
/// node read prior state, so those edges impose no ordering).
///
/// Kahn's algorithm, with the ready set drained in ascending [`NodeId`]
/// order so that the order is deterministic for a given graph: nodes
/// with no dependency relationship always evaluate in the same
/// sequence, call after call.
///
/// Fails with [`SimError::CyclicGraph`] if a cycle remains, i.e. a
/// sequential loop that was not declared as feedback.
pub fn topo_order(graph: &CircuitGraph) -> Result<Vec<NodeId>> {
    let n = graph.nodes().len();
    let mut indegree = vec![0usize; n];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];

    for (i, node) in graph.nodes().iter().enumerate() {
        for &src in node.input_refs() {
            if graph.is_feedback(src) {
                continue;
            }
            dependents[src.0].push(i);
            indegree[i] += 1;
        }
    }

    let mut ready: BinaryHeap<Reverse<usize>> = indegree
        .iter()
        .enumerate()
        .filter(|(_, &deg)| deg == 0)
        .map(|(i, _)| Reverse(i))
        .collect();

    let mut order = Vec::with_capacity(n);
    while let Some(Reverse(i)) = ready.pop() {
        order.push(NodeId(i));
        for &dep in &dependents[i] {
            indegree[dep] -= 1;
            if indegree[dep] == 0 {
                ready.push(Reverse(dep));
            }
        }
    }

    if order.len() < n {
        let stuck: Vec<NodeId> = indegree
            .iter()
            .enumerate()
            .filter(|(_, &deg)| deg > 0)
            .map(|(i, _)| NodeId(i))
            .collect();
        return Err(SimError::cyclic(&stuck));
    }

    Ok(order)
}

//! Reduction of arbitrary graphs to pure NAND.
//!
//! Every composite gate kind is semantically a fixed wiring of NAND
//! instances; [`to_nand`] makes that reduction executable by rewriting
//! a graph into an equivalent one whose gates are all
//! [`GateKind::Nand`]. Nested subcircuits are inlined, library kinds
//! are replaced by their documented minimal wirings, and input/output
//! names and feedback declarations carry over, so the rewritten graph
//! is a drop-in replacement under evaluation.

use std::collections::HashMap;

use crate::error::Result;
use crate::gates::GateKind;
use crate::sim::topo_order;

use super::graph::{CircuitGraph, Node};
use super::types::NodeId;

/// Node ids at or above this base are placeholders for feedback
/// terminals that do not exist yet during emission; they are patched to
/// real ids before the rewritten graph is built.
const MARKER_BASE: usize = usize::MAX / 2;

#[derive(Default)]
struct NandArena {
    nodes: Vec<Node>,
}

impl NandArena {
    fn input(&mut self, name: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::Input { name });
        id
    }

    fn nand(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::Gate {
            kind: GateKind::Nand,
            inputs: vec![a, b],
        });
        id
    }

    /// Emit the NAND wiring of one gate over already-mapped inputs and
    /// return its terminal node.
    fn emit_kind(&mut self, kind: &GateKind, ins: &[NodeId]) -> Result<NodeId> {
        Ok(match kind {
            GateKind::Nand => self.nand(ins[0], ins[1]),
            GateKind::Not => self.nand(ins[0], ins[0]),
            GateKind::And => {
                let n = self.nand(ins[0], ins[1]);
                self.nand(n, n)
            }
            GateKind::Or => {
                let na = self.nand(ins[0], ins[0]);
                let nb = self.nand(ins[1], ins[1]);
                self.nand(na, nb)
            }
            GateKind::Nor => {
                let o = self.emit_kind(&GateKind::Or, ins)?;
                self.nand(o, o)
            }
            GateKind::Xor => {
                let n = self.nand(ins[0], ins[1]);
                let x = self.nand(ins[0], n);
                let y = self.nand(ins[1], n);
                self.nand(x, y)
            }
            GateKind::Xnor => {
                let x = self.emit_kind(&GateKind::Xor, ins)?;
                self.nand(x, x)
            }
            GateKind::Subcircuit(sub) => self.inline(sub, ins)?,
        })
    }

    /// Inline a combinational single-output subcircuit, mapping its
    /// declared inputs positionally onto `ins`.
    fn inline(&mut self, sub: &CircuitGraph, ins: &[NodeId]) -> Result<NodeId> {
        let order = topo_order(sub)?;
        let mut map: HashMap<NodeId, NodeId> = HashMap::new();
        for (slot, &input_id) in sub.inputs().iter().enumerate() {
            map.insert(input_id, ins[slot]);
        }
        for &id in &order {
            if let Node::Gate { kind, inputs } = &sub.nodes()[id.0] {
                let mapped: Vec<NodeId> = inputs.iter().map(|src| map[src]).collect();
                let term = self.emit_kind(kind, &mapped)?;
                map.insert(id, term);
            }
        }
        let (_, out_id) = &sub.outputs()[0];
        Ok(map[out_id])
    }
}

/// Rewrite `graph` into an equivalent graph built solely from NAND
/// gates.
///
/// External input and output names are preserved, as are feedback
/// declarations (remapped onto the expanded terminals), so the result
/// evaluates and ticks exactly like the original. The result's
/// [`CircuitGraph::nand_count`] equals the original's: expansion
/// changes representation, not cost.
pub fn to_nand(graph: &CircuitGraph) -> Result<CircuitGraph> {
    let order = topo_order(graph)?;
    let mut arena = NandArena::default();
    let mut map: HashMap<NodeId, NodeId> = HashMap::new();

    // Feedback terminals are consumed before they are emitted; route
    // those references through markers and patch them afterwards.
    let marker_of: HashMap<NodeId, NodeId> = graph
        .feedback()
        .iter()
        .enumerate()
        .map(|(k, &f)| (f, NodeId(MARKER_BASE + k)))
        .collect();

    for &id in &order {
        match &graph.nodes()[id.0] {
            Node::Input { name } => {
                let term = arena.input(name.clone());
                map.insert(id, term);
            }
            Node::Gate { kind, inputs } => {
                let mapped: Vec<NodeId> = inputs
                    .iter()
                    .map(|src| marker_of.get(src).copied().unwrap_or_else(|| map[src]))
                    .collect();
                let term = arena.emit_kind(kind, &mapped)?;
                map.insert(id, term);
            }
        }
    }

    let terminals: Vec<NodeId> = graph.feedback().iter().map(|f| map[f]).collect();
    for node in &mut arena.nodes {
        if let Node::Gate { inputs, .. } = node {
            for src in inputs {
                if src.0 >= MARKER_BASE {
                    *src = terminals[src.0 - MARKER_BASE];
                }
            }
        }
    }

    let outputs = graph
        .outputs()
        .iter()
        .map(|(name, id)| (name.clone(), map[id]))
        .collect();

    CircuitGraph::from_parts(
        format!("{}_nand", graph.name()),
        arena.nodes,
        outputs,
        terminals,
    )
}

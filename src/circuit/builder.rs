//! Bottom-up circuit construction.
//!
//! [`CircuitBuilder`] appends nodes to an arena and hands back
//! [`NodeId`]s, so circuits are wired leaves-first: external inputs,
//! then gates referencing earlier nodes. Feedback loops need a forward
//! reference, which is what [`CircuitBuilder::deferred`] and
//! [`CircuitBuilder::wire`] provide.
//!
//! All validation happens in [`CircuitBuilder::build`]; the other
//! methods never fail.

use std::sync::Arc;

use crate::error::Result;
use crate::gates::GateKind;

use super::graph::{CircuitGraph, Node};
use super::types::NodeId;

/// Builder for a [`CircuitGraph`].
///
/// ```
/// use gatesim_core::{CircuitBuilder, Evaluator};
/// use std::collections::HashMap;
///
/// let mut b = CircuitBuilder::new("and_from_nand");
/// let a = b.input("a");
/// let c = b.input("b");
/// let n = b.nand(a, c);
/// let out = b.nand(n, n);
/// b.output("out", out);
/// let graph = b.build().unwrap();
///
/// let eval = Evaluator::new(graph).unwrap();
/// let inputs = HashMap::from([("a".to_string(), true), ("b".to_string(), true)]);
/// assert_eq!(eval.evaluate(&inputs).unwrap()["out"], true);
/// ```
#[derive(Debug)]
pub struct CircuitBuilder {
    name: String,
    nodes: Vec<Node>,
    outputs: Vec<(String, NodeId)>,
    feedback: Vec<NodeId>,
    /// Deferred wirings, applied at build time so that invalid targets
    /// surface as validation errors rather than panics.
    wires: Vec<(NodeId, Vec<NodeId>)>,
}

impl CircuitBuilder {
    /// Start a new circuit with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            outputs: Vec::new(),
            feedback: Vec::new(),
            wires: Vec::new(),
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Declare a named external input.
    pub fn input(&mut self, name: impl Into<String>) -> NodeId {
        self.push(Node::Input { name: name.into() })
    }

    /// Add a gate of the given kind wired to `inputs`.
    pub fn gate(&mut self, kind: GateKind, inputs: &[NodeId]) -> NodeId {
        self.push(Node::Gate {
            kind,
            inputs: inputs.to_vec(),
        })
    }

    /// Add a gate whose inputs are wired later via [`Self::wire`].
    ///
    /// This is how feedback loops are closed: allocate the downstream
    /// gate first, reference its id from the upstream gate, then wire
    /// the downstream gate's inputs. A deferred gate left unwired fails
    /// `build` with an arity mismatch.
    pub fn deferred(&mut self, kind: GateKind) -> NodeId {
        self.push(Node::Gate {
            kind,
            inputs: Vec::new(),
        })
    }

    /// Wire the inputs of a gate created with [`Self::deferred`].
    ///
    /// The wiring is applied (and checked) at build time; wiring a
    /// non-gate or out-of-range node fails `build` with a dangling
    /// reference.
    pub fn wire(&mut self, gate: NodeId, inputs: &[NodeId]) {
        self.wires.push((gate, inputs.to_vec()));
    }

    /// Declare `node` as a feedback node: every consumer reads the
    /// node's prior state, and its freshly computed value becomes the
    /// next state (committed at the tick boundary).
    pub fn feedback(&mut self, node: NodeId) {
        self.feedback.push(node);
    }

    /// Bind an external output name to a node.
    pub fn output(&mut self, name: impl Into<String>, node: NodeId) {
        self.outputs.push((name.into(), node));
    }

    // Convenience constructors for the fixed gate library.

    /// Add a NAND gate.
    pub fn nand(&mut self, a: NodeId, b: NodeId) -> NodeId {
        self.gate(GateKind::Nand, &[a, b])
    }

    /// Add a NOT gate.
    pub fn not(&mut self, a: NodeId) -> NodeId {
        self.gate(GateKind::Not, &[a])
    }

    /// Add an AND gate.
    pub fn and(&mut self, a: NodeId, b: NodeId) -> NodeId {
        self.gate(GateKind::And, &[a, b])
    }

    /// Add an OR gate.
    pub fn or(&mut self, a: NodeId, b: NodeId) -> NodeId {
        self.gate(GateKind::Or, &[a, b])
    }

    /// Add a NOR gate.
    pub fn nor(&mut self, a: NodeId, b: NodeId) -> NodeId {
        self.gate(GateKind::Nor, &[a, b])
    }

    /// Add an XOR gate.
    pub fn xor(&mut self, a: NodeId, b: NodeId) -> NodeId {
        self.gate(GateKind::Xor, &[a, b])
    }

    /// Add an XNOR gate.
    pub fn xnor(&mut self, a: NodeId, b: NodeId) -> NodeId {
        self.gate(GateKind::Xnor, &[a, b])
    }

    /// Nest a combinational single-output graph as a gate, wired to
    /// `inputs` positionally against the subcircuit's declared inputs.
    pub fn subcircuit(&mut self, graph: Arc<CircuitGraph>, inputs: &[NodeId]) -> NodeId {
        self.gate(GateKind::Subcircuit(graph), inputs)
    }

    /// Finish construction, applying deferred wirings and validating
    /// the whole graph.
    pub fn build(mut self) -> Result<CircuitGraph> {
        for (target, inputs) in std::mem::take(&mut self.wires) {
            match self.nodes.get_mut(target.0) {
                Some(Node::Gate {
                    inputs: slots, ..
                }) => *slots = inputs,
                _ => {
                    return Err(crate::error::SimError::dangling(
                        "deferred wiring",
                        target,
                    ))
                }
            }
        }
        CircuitGraph::from_parts(self.name, self.nodes, self.outputs, self.feedback)
    }
}

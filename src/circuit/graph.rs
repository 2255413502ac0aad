//! Circuit graph structure.

use crate::error::Result;
use crate::gates::GateKind;

use super::types::NodeId;
use super::validate::validate_graph;

/// A point in a circuit graph: a named external input or a gate
/// instance.
///
/// Gate nodes own the references to the nodes supplying each of their
/// inputs (directed edges, input → gate). External outputs are not
/// nodes; they are name → node bindings declared on the graph.
#[derive(Debug, Clone)]
pub enum Node {
    /// A named external input.
    Input { name: String },
    /// A gate instance of a fixed kind, wired to its input nodes.
    Gate { kind: GateKind, inputs: Vec<NodeId> },
}

impl Node {
    /// Whether this node is an external input.
    pub fn is_input(&self) -> bool {
        matches!(self, Node::Input { .. })
    }

    /// The nodes supplying this node's inputs (empty for input nodes).
    pub fn input_refs(&self) -> &[NodeId] {
        match self {
            Node::Input { .. } => &[],
            Node::Gate { inputs, .. } => inputs,
        }
    }
}

/// A complete circuit: a node arena plus declared external inputs,
/// external outputs, and feedback nodes.
///
/// Structurally immutable after construction: only signal values and
/// sequential state change across evaluations, so a graph may be shared
/// read-only between any number of evaluators.
///
/// A graph with an empty feedback set is combinational and must be
/// acyclic; a graph with feedback nodes is a sequential element and is
/// evaluated through the prior/next state protocol (see
/// [`crate::sim::Evaluator`]).
#[derive(Debug, Clone)]
pub struct CircuitGraph {
    name: String,
    nodes: Vec<Node>,
    /// Input nodes in declaration order.
    inputs: Vec<NodeId>,
    /// Output bindings in declaration order; each name is bound to
    /// exactly one node.
    outputs: Vec<(String, NodeId)>,
    /// Sorted, deduplicated feedback node set. Consumers of these nodes
    /// read prior state; the nodes' fresh values become next state.
    feedback: Vec<NodeId>,
}

impl CircuitGraph {
    /// Build a circuit graph from its raw parts, validating the result.
    ///
    /// Fails with [`crate::SimError::DanglingReference`] if any gate
    /// input, output binding, or feedback declaration does not resolve
    /// within the node set, with [`crate::SimError::DuplicateName`] if
    /// external input or output names collide within their namespace,
    /// and with [`crate::SimError::ArityMismatch`] if a gate's wiring
    /// does not match its kind's arity.
    pub fn from_parts(
        name: impl Into<String>,
        nodes: Vec<Node>,
        outputs: Vec<(String, NodeId)>,
        mut feedback: Vec<NodeId>,
    ) -> Result<Self> {
        feedback.sort_unstable();
        feedback.dedup();

        validate_graph(&nodes, &outputs, &feedback)?;

        let inputs = nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_input())
            .map(|(i, _)| NodeId(i))
            .collect();

        Ok(Self {
            name: name.into(),
            nodes,
            inputs,
            outputs,
            feedback,
        })
    }

    /// The graph's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All nodes, indexed by [`NodeId`].
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// External input nodes in declaration order.
    pub fn inputs(&self) -> &[NodeId] {
        &self.inputs
    }

    /// External input names in declaration order.
    pub fn input_names(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(|id| match &self.nodes[id.0] {
            Node::Input { name } => name.as_str(),
            // `inputs` only ever holds Input nodes
            Node::Gate { .. } => unreachable!(),
        })
    }

    /// External output bindings in declaration order.
    pub fn outputs(&self) -> &[(String, NodeId)] {
        &self.outputs
    }

    /// Declared feedback nodes, sorted.
    pub fn feedback(&self) -> &[NodeId] {
        &self.feedback
    }

    /// Whether `id` is a declared feedback node.
    pub fn is_feedback(&self, id: NodeId) -> bool {
        self.feedback.binary_search(&id).is_ok()
    }

    /// Whether this graph carries feedback (i.e. is a sequential
    /// element rather than pure combinational logic).
    pub fn is_sequential(&self) -> bool {
        !self.feedback.is_empty()
    }

    /// Number of gate nodes (external inputs excluded).
    pub fn gate_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.is_input()).count()
    }

    /// Total number of NAND primitives this graph reduces to.
    pub fn nand_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Input { .. } => 0,
                Node::Gate { kind, .. } => kind.nand_count(),
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::CircuitBuilder;
    use crate::error::SimError;

    #[test]
    fn test_from_parts_rejects_dangling_gate_input() {
        let nodes = vec![
            Node::Input { name: "a".into() },
            Node::Gate {
                kind: GateKind::Not,
                inputs: vec![NodeId(7)],
            },
        ];
        let err = CircuitGraph::from_parts("bad", nodes, vec![], vec![]).unwrap_err();
        assert!(matches!(err, SimError::DanglingReference { .. }));
    }

    #[test]
    fn test_from_parts_rejects_duplicate_output_name() {
        let nodes = vec![Node::Input { name: "a".into() }];
        let outputs = vec![("q".into(), NodeId(0)), ("q".into(), NodeId(0))];
        let err = CircuitGraph::from_parts("bad", nodes, outputs, vec![]).unwrap_err();
        assert_eq!(
            err,
            SimError::DuplicateName {
                namespace: "output",
                name: "q".into()
            }
        );
    }

    #[test]
    fn test_nand_count_sums_gate_kinds() {
        let mut b = CircuitBuilder::new("counts");
        let a = b.input("a");
        let c = b.input("b");
        let x = b.xor(a, c);
        let y = b.and(a, c);
        b.output("sum", x);
        b.output("carry", y);
        let graph = b.build().unwrap();
        assert_eq!(graph.gate_count(), 2);
        assert_eq!(graph.nand_count(), 4 + 2);
    }
}

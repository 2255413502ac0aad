//! Signal evaluation over circuit graphs.

use std::collections::HashMap;
use std::sync::Arc;

use crate::circuit::{CircuitGraph, Node, NodeId, Signal};
use crate::error::{Result, SimError};

use super::topo::topo_order;

/// Stored signal values of a graph's feedback nodes, keyed by node id.
pub type State = HashMap<NodeId, Signal>;

/// Walks a circuit graph in dependency order and computes stable output
/// values.
///
/// The evaluation order is fixed at construction time (see
/// [`topo_order`]); evaluation itself is a pure function of the input
/// map (and, for feedback-bearing graphs, the prior state), so repeated
/// calls with identical arguments yield identical results.
///
/// Nested subcircuit gates get their own evaluator, built once here and
/// reused across calls.
#[derive(Debug)]
pub struct Evaluator {
    graph: Arc<CircuitGraph>,
    order: Vec<NodeId>,
    subs: HashMap<NodeId, Evaluator>,
}

impl Evaluator {
    /// Create an evaluator for the given graph.
    ///
    /// Fails with [`SimError::CyclicGraph`] if the graph contains a
    /// cycle that was not declared as feedback, the correctness guard
    /// against a sequential loop being misused as combinational logic.
    pub fn new(graph: impl Into<Arc<CircuitGraph>>) -> Result<Self> {
        let graph = graph.into();
        let order = topo_order(&graph)?;

        let mut subs = HashMap::new();
        for (i, node) in graph.nodes().iter().enumerate() {
            if let Node::Gate {
                kind: crate::gates::GateKind::Subcircuit(sub),
                ..
            } = node
            {
                subs.insert(NodeId(i), Evaluator::new(Arc::clone(sub))?);
            }
        }

        Ok(Self { graph, order, subs })
    }

    /// The graph being evaluated.
    pub fn graph(&self) -> &CircuitGraph {
        &self.graph
    }

    /// Evaluate a combinational (zero-feedback) graph.
    ///
    /// Each gate node is evaluated exactly once in dependency order.
    /// Every declared input must be present in `inputs`
    /// ([`SimError::MissingInput`] otherwise; values are never
    /// defaulted). Surplus keys are ignored.
    ///
    /// Fails with [`SimError::MissingState`] if the graph carries
    /// feedback: sequential graphs go through [`Self::evaluate_seq`] or
    /// [`crate::sim::SequentialElement`].
    pub fn evaluate(&self, inputs: &HashMap<String, Signal>) -> Result<HashMap<String, Signal>> {
        if let Some(&node) = self.graph.feedback().first() {
            return Err(SimError::missing_state(node));
        }
        let (outputs, _) = self.run(inputs, &State::new())?;
        Ok(outputs)
    }

    /// Evaluate a feedback-bearing graph against `prior` state.
    ///
    /// Consumers of a feedback node read `prior[node]` rather than the
    /// live, not-yet-committed value; the values computed at the
    /// feedback nodes during this pass are returned as the next state.
    /// Nothing is committed here; that is the caller's tick boundary
    /// (see [`crate::sim::SequentialElement`]), which is what keeps
    /// state changes invisible mid-evaluation.
    ///
    /// `prior` must hold a value for every declared feedback node
    /// ([`SimError::MissingState`] otherwise). External outputs bound
    /// to a feedback node observe the value computed this pass.
    pub fn evaluate_seq(
        &self,
        inputs: &HashMap<String, Signal>,
        prior: &State,
    ) -> Result<(HashMap<String, Signal>, State)> {
        self.run(inputs, prior)
    }

    /// Enumerate the full truth table of a combinational graph.
    ///
    /// Rows are ordered by input counter with the first declared input
    /// as the least significant bit; each row pairs the input
    /// combination (in declaration order) with the output map. Cost is
    /// 2^n evaluations for n inputs.
    pub fn truth_table(&self) -> Result<Vec<(Vec<Signal>, HashMap<String, Signal>)>> {
        let names: Vec<String> = self.graph.input_names().map(str::to_owned).collect();
        let mut rows = Vec::with_capacity(1 << names.len());
        for bits in 0..(1u64 << names.len()) {
            let combo: Vec<Signal> = (0..names.len()).map(|i| bits >> i & 1 == 1).collect();
            let inputs: HashMap<String, Signal> = names
                .iter()
                .cloned()
                .zip(combo.iter().copied())
                .collect();
            rows.push((combo, self.evaluate(&inputs)?));
        }
        Ok(rows)
    }

    fn run(
        &self,
        inputs: &HashMap<String, Signal>,
        prior: &State,
    ) -> Result<(HashMap<String, Signal>, State)> {
        let nodes = self.graph.nodes();
        let mut values = vec![false; nodes.len()];

        for &id in &self.order {
            let value = match &nodes[id.0] {
                Node::Input { name } => *inputs
                    .get(name)
                    .ok_or_else(|| SimError::missing_input(name))?,
                Node::Gate { kind, inputs: srcs } => {
                    let mut vals = Vec::with_capacity(srcs.len());
                    for &src in srcs {
                        let v = if self.graph.is_feedback(src) {
                            *prior.get(&src).ok_or_else(|| SimError::missing_state(src))?
                        } else {
                            values[src.0]
                        };
                        vals.push(v);
                    }
                    match kind.eval(&vals) {
                        Some(v) => v,
                        None => self.eval_subcircuit(id, &vals)?,
                    }
                }
            };
            values[id.0] = value;
        }

        let next: State = self
            .graph
            .feedback()
            .iter()
            .map(|&id| (id, values[id.0]))
            .collect();

        let outputs = self
            .graph
            .outputs()
            .iter()
            .map(|(name, id)| (name.clone(), values[id.0]))
            .collect();

        Ok((outputs, next))
    }

    fn eval_subcircuit(&self, id: NodeId, vals: &[Signal]) -> Result<Signal> {
        // `subs` is populated for every subcircuit node in `new`.
        let sub = &self.subs[&id];
        let sub_inputs: HashMap<String, Signal> = sub
            .graph()
            .input_names()
            .map(str::to_owned)
            .zip(vals.iter().copied())
            .collect();
        let outs = sub.evaluate(&sub_inputs)?;
        // Validation guarantees exactly one output on nested graphs.
        let (name, _) = &sub.graph().outputs()[0];
        Ok(outs[name.as_str()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::CircuitBuilder;
    use crate::gates::GateKind;

    fn inputs(pairs: &[(&str, bool)]) -> HashMap<String, Signal> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    /// AND built the long way: NAND, then NAND-as-NOT.
    fn and_graph() -> CircuitGraph {
        let mut b = CircuitBuilder::new("and");
        let a = b.input("a");
        let c = b.input("b");
        let n = b.nand(a, c);
        let out = b.nand(n, n);
        b.output("out", out);
        b.build().unwrap()
    }

    /// SR latch: active-high set/reset in front of a cross-coupled NAND
    /// pair, feedback declared on q.
    fn sr_latch_graph() -> CircuitGraph {
        let mut b = CircuitBuilder::new("sr_latch");
        let set = b.input("set");
        let reset = b.input("reset");
        let s_n = b.not(set);
        let r_n = b.not(reset);
        let q = b.deferred(GateKind::Nand);
        let qn = b.nand(r_n, q);
        b.wire(q, &[s_n, qn]);
        b.feedback(q);
        b.output("q", q);
        b.build().unwrap()
    }

    #[test]
    fn test_and_from_nand_end_to_end() {
        let eval = Evaluator::new(and_graph()).unwrap();
        let out = eval.evaluate(&inputs(&[("a", true), ("b", true)])).unwrap();
        assert_eq!(out["out"], true);
        let out = eval.evaluate(&inputs(&[("a", true), ("b", false)])).unwrap();
        assert_eq!(out["out"], false);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let eval = Evaluator::new(and_graph()).unwrap();
        let args = inputs(&[("a", true), ("b", false)]);
        let first = eval.evaluate(&args).unwrap();
        let second = eval.evaluate(&args).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let eval = Evaluator::new(and_graph()).unwrap();
        let err = eval.evaluate(&inputs(&[("a", true)])).unwrap_err();
        assert_eq!(err, SimError::missing_input("b"));
    }

    #[test]
    fn test_surplus_inputs_are_ignored() {
        let eval = Evaluator::new(and_graph()).unwrap();
        let out = eval
            .evaluate(&inputs(&[("a", true), ("b", true), ("unused", false)]))
            .unwrap();
        assert_eq!(out["out"], true);
    }

    #[test]
    fn test_unbound_gates_are_still_evaluated() {
        // A gate with no dependents bound to an output must be computed.
        let mut b = CircuitBuilder::new("dangling_output");
        let a = b.input("a");
        let used = b.not(a);
        let unused = b.not(used);
        b.output("probe", unused);
        let eval = Evaluator::new(b.build().unwrap()).unwrap();
        let out = eval.evaluate(&inputs(&[("a", true)])).unwrap();
        assert_eq!(out["probe"], true);
    }

    #[test]
    fn test_evaluate_rejects_feedback_graph() {
        let eval = Evaluator::new(sr_latch_graph()).unwrap();
        let err = eval
            .evaluate(&inputs(&[("set", true), ("reset", false)]))
            .unwrap_err();
        assert!(matches!(err, SimError::MissingState { .. }));
    }

    #[test]
    fn test_evaluate_seq_requires_complete_state() {
        let eval = Evaluator::new(sr_latch_graph()).unwrap();
        let err = eval
            .evaluate_seq(&inputs(&[("set", true), ("reset", false)]), &State::new())
            .unwrap_err();
        assert!(matches!(err, SimError::MissingState { .. }));
    }

    #[test]
    fn test_evaluate_seq_reads_prior_and_produces_next() {
        let eval = Evaluator::new(sr_latch_graph()).unwrap();
        let q = eval.graph().feedback()[0];

        // Idle inputs: the latch holds whatever the prior state says.
        let idle = inputs(&[("set", false), ("reset", false)]);
        let (out, next) = eval
            .evaluate_seq(&idle, &State::from([(q, true)]))
            .unwrap();
        assert_eq!(out["q"], true);
        assert_eq!(next[&q], true);

        let (out, next) = eval
            .evaluate_seq(&idle, &State::from([(q, false)]))
            .unwrap();
        assert_eq!(out["q"], false);
        assert_eq!(next[&q], false);

        // Set wins regardless of prior state, and the output shows the
        // freshly computed value in the same pass.
        let (out, next) = eval
            .evaluate_seq(
                &inputs(&[("set", true), ("reset", false)]),
                &State::from([(q, false)]),
            )
            .unwrap();
        assert_eq!(out["q"], true);
        assert_eq!(next[&q], true);
    }

    #[test]
    fn test_evaluate_seq_does_not_mutate_prior() {
        let eval = Evaluator::new(sr_latch_graph()).unwrap();
        let q = eval.graph().feedback()[0];
        let prior = State::from([(q, false)]);
        let _ = eval
            .evaluate_seq(&inputs(&[("set", true), ("reset", false)]), &prior)
            .unwrap();
        assert_eq!(prior[&q], false);
    }

    #[test]
    fn test_nested_subcircuit_evaluates() {
        let and = Arc::new(and_graph());
        let mut b = CircuitBuilder::new("and3");
        let x = b.input("x");
        let y = b.input("y");
        let z = b.input("z");
        let xy = b.subcircuit(Arc::clone(&and), &[x, y]);
        let xyz = b.subcircuit(and, &[xy, z]);
        b.output("out", xyz);
        let eval = Evaluator::new(b.build().unwrap()).unwrap();

        for x_v in [false, true] {
            for y_v in [false, true] {
                for z_v in [false, true] {
                    let out = eval
                        .evaluate(&inputs(&[("x", x_v), ("y", y_v), ("z", z_v)]))
                        .unwrap();
                    assert_eq!(out["out"], x_v && y_v && z_v);
                }
            }
        }
    }

    #[test]
    fn test_truth_table_enumerates_all_rows() {
        let eval = Evaluator::new(and_graph()).unwrap();
        let table = eval.truth_table().unwrap();
        assert_eq!(table.len(), 4);
        for (combo, out) in table {
            assert_eq!(out["out"], combo[0] && combo[1]);
        }
    }
}

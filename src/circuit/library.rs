//! Prebuilt circuit components.
//!
//! Worked compositions over the public construction API: adders for the
//! combinational side, latches for the sequential side. These double as
//! reference material for wiring circuits by hand: every one of them
//! goes through [`CircuitBuilder`] like any external caller would.

use std::sync::Arc;

use crate::error::Result;
use crate::gates::GateKind;

use super::builder::CircuitBuilder;
use super::graph::CircuitGraph;

/// Three-input majority vote.
///
/// Inputs `a`, `b`, `c`; output `out` is true when at least two inputs
/// are true. Single-output and combinational, so it nests as a gate;
/// [`full_adder`] uses it for the carry.
pub fn majority() -> Result<CircuitGraph> {
    let mut b = CircuitBuilder::new("majority");
    let a = b.input("a");
    let x = b.input("b");
    let c = b.input("c");
    let ab = b.and(a, x);
    let ac = b.and(a, c);
    let bc = b.and(x, c);
    let any_two = b.or(ac, bc);
    let out = b.or(ab, any_two);
    b.output("out", out);
    b.build()
}

/// Half adder.
///
/// Inputs `a`, `b`; outputs `sum` (XOR) and `carry` (AND).
pub fn half_adder() -> Result<CircuitGraph> {
    let mut b = CircuitBuilder::new("half_adder");
    let a = b.input("a");
    let x = b.input("b");
    let sum = b.xor(a, x);
    let carry = b.and(a, x);
    b.output("sum", sum);
    b.output("carry", carry);
    b.build()
}

/// Full adder.
///
/// Inputs `a`, `b`, `cin`; outputs `sum` and `cout`. The carry is a
/// nested [`majority`] subcircuit, shared structurally rather than
/// inlined.
pub fn full_adder() -> Result<CircuitGraph> {
    let maj = Arc::new(majority()?);

    let mut b = CircuitBuilder::new("full_adder");
    let a = b.input("a");
    let x = b.input("b");
    let cin = b.input("cin");
    let ab = b.xor(a, x);
    let sum = b.xor(ab, cin);
    let cout = b.subcircuit(maj, &[a, x, cin]);
    b.output("sum", sum);
    b.output("cout", cout);
    b.build()
}

/// SR latch from a cross-coupled NAND pair.
///
/// Inputs `set`, `reset` (active high); outputs `q` and `qn`. Feedback
/// is declared on the `q` node: `qn` reads q's prior state, `q` is
/// computed live, so both set and reset take effect within their own
/// tick. `qn` settles one tick after a set (the tick that raises `q`
/// still shows qn computed from the stale q). Driving `set` and
/// `reset` high together forces both outputs high, as in the physical
/// circuit; avoid it.
///
/// Initial state is all-false (latch cleared); wrap with
/// [`crate::sim::SequentialElement::with_initial_state`] for a
/// set-at-power-on bias.
pub fn sr_latch() -> Result<CircuitGraph> {
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
    b.output("qn", qn);
    b.build()
}

/// Gated D latch.
///
/// Inputs `d`, `en`; outputs `q` and `qn`. While `en` is high the
/// latch is transparent (`q` follows `d` within the tick); while `en`
/// is low it holds. Feedback on `q`, initial state all-false.
pub fn d_latch() -> Result<CircuitGraph> {
    let mut b = CircuitBuilder::new("d_latch");
    let d = b.input("d");
    let en = b.input("en");
    let d_n = b.not(d);
    let s = b.nand(d, en);
    let r = b.nand(d_n, en);
    let q = b.deferred(GateKind::Nand);
    let qn = b.nand(r, q);
    b.wire(q, &[s, qn]);
    b.feedback(q);
    b.output("q", q);
    b.output("qn", qn);
    b.build()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::circuit::Signal;
    use crate::sim::{Evaluator, SequentialElement};

    fn inputs(pairs: &[(&str, bool)]) -> HashMap<String, Signal> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_majority_truth_table() {
        let eval = Evaluator::new(majority().unwrap()).unwrap();
        for (combo, out) in eval.truth_table().unwrap() {
            let ones = combo.iter().filter(|&&v| v).count();
            assert_eq!(out["out"], ones >= 2, "majority{combo:?}");
        }
    }

    #[test]
    fn test_half_adder_truth_table() {
        let eval = Evaluator::new(half_adder().unwrap()).unwrap();
        for (combo, out) in eval.truth_table().unwrap() {
            let (a, b) = (combo[0], combo[1]);
            assert_eq!(out["sum"], a != b);
            assert_eq!(out["carry"], a && b);
        }
    }

    #[test]
    fn test_full_adder_truth_table() {
        let eval = Evaluator::new(full_adder().unwrap()).unwrap();
        for (combo, out) in eval.truth_table().unwrap() {
            let total =
                combo.iter().filter(|&&v| v).count();
            assert_eq!(out["sum"], total % 2 == 1, "sum of {combo:?}");
            assert_eq!(out["cout"], total >= 2, "cout of {combo:?}");
        }
    }

    #[test]
    fn test_sr_latch_set_hold_reset() {
        let mut latch = SequentialElement::new(sr_latch().unwrap()).unwrap();

        let out = latch
            .tick(&inputs(&[("set", true), ("reset", false)]))
            .unwrap();
        assert_eq!(out["q"], true);

        let out = latch
            .tick(&inputs(&[("set", false), ("reset", false)]))
            .unwrap();
        assert_eq!(out["q"], true);
        assert_eq!(out["qn"], false, "qn settled after the set tick");

        let out = latch
            .tick(&inputs(&[("set", false), ("reset", true)]))
            .unwrap();
        assert_eq!(out["q"], false);
        assert_eq!(out["qn"], true);
    }

    #[test]
    fn test_d_latch_transparent_then_opaque() {
        let mut latch = SequentialElement::new(d_latch().unwrap()).unwrap();

        // Transparent: q follows d while en is high.
        let out = latch.tick(&inputs(&[("d", true), ("en", true)])).unwrap();
        assert_eq!(out["q"], true);
        let out = latch.tick(&inputs(&[("d", false), ("en", true)])).unwrap();
        assert_eq!(out["q"], false);
        let out = latch.tick(&inputs(&[("d", true), ("en", true)])).unwrap();
        assert_eq!(out["q"], true);

        // Opaque: d changes are ignored while en is low.
        let out = latch.tick(&inputs(&[("d", false), ("en", false)])).unwrap();
        assert_eq!(out["q"], true);
        let out = latch.tick(&inputs(&[("d", false), ("en", false)])).unwrap();
        assert_eq!(out["q"], true);

        latch.reset();
        let out = latch.tick(&inputs(&[("d", false), ("en", false)])).unwrap();
        assert_eq!(out["q"], false, "cleared after reset");
    }
}

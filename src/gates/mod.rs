//! Gate primitives and the composite gate library.
//!
//! This module provides:
//! - The NAND primitive ([`nand`]), the engine's only irreducible gate
//! - The standard composites ([`not`], [`and`], [`or`], [`nor`], [`xor`],
//!   [`xnor`]), each a fixed NAND wiring with a documented minimal count
//! - [`GateKind`], which registers each gate as a reusable kind that
//!   circuit graphs reference without re-expanding the NAND wiring at
//!   every use site

mod composite;
mod primitive;

pub use composite::{and, nor, not, or, xnor, xor};
pub use primitive::nand;

use std::sync::Arc;

use crate::circuit::{CircuitGraph, Signal};

/// The kind of a gate node in a circuit graph.
///
/// Fixed kinds carry a pure evaluation rule (a NAND composition from
/// this module). `Subcircuit` nests a whole [`CircuitGraph`] as a
/// reusable gate; the graph is shared structurally via [`Arc`] rather
/// than inlined at each use site, and must be combinational with exactly
/// one declared output.
#[derive(Debug, Clone)]
pub enum GateKind {
    Nand,
    Not,
    And,
    Or,
    Nor,
    Xor,
    Xnor,
    Subcircuit(Arc<CircuitGraph>),
}

impl GateKind {
    /// Human-readable kind name, used in error messages.
    pub fn name(&self) -> &str {
        match self {
            GateKind::Nand => "NAND",
            GateKind::Not => "NOT",
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Nor => "NOR",
            GateKind::Xor => "XOR",
            GateKind::Xnor => "XNOR",
            GateKind::Subcircuit(graph) => graph.name(),
        }
    }

    /// Fixed input arity of this kind.
    pub fn arity(&self) -> usize {
        match self {
            GateKind::Not => 1,
            GateKind::Nand
            | GateKind::And
            | GateKind::Or
            | GateKind::Nor
            | GateKind::Xor
            | GateKind::Xnor => 2,
            GateKind::Subcircuit(graph) => graph.inputs().len(),
        }
    }

    /// Number of NAND primitives this kind reduces to.
    pub fn nand_count(&self) -> usize {
        match self {
            GateKind::Nand | GateKind::Not => 1,
            GateKind::And => 2,
            GateKind::Or => 3,
            GateKind::Nor | GateKind::Xor => 4,
            GateKind::Xnor => 5,
            GateKind::Subcircuit(graph) => graph.nand_count(),
        }
    }

    /// Evaluate a fixed kind over its inputs.
    ///
    /// Returns `None` for [`GateKind::Subcircuit`], whose evaluation
    /// requires walking the nested graph (see
    /// [`crate::sim::Evaluator`]).
    ///
    /// Callers must supply exactly [`Self::arity`] inputs; circuit
    /// validation enforces this for graph nodes.
    pub fn eval(&self, inputs: &[Signal]) -> Option<Signal> {
        debug_assert_eq!(inputs.len(), self.arity());
        match self {
            GateKind::Nand => Some(nand(inputs[0], inputs[1])),
            GateKind::Not => Some(not(inputs[0])),
            GateKind::And => Some(and(inputs[0], inputs[1])),
            GateKind::Or => Some(or(inputs[0], inputs[1])),
            GateKind::Nor => Some(nor(inputs[0], inputs[1])),
            GateKind::Xor => Some(xor(inputs[0], inputs[1])),
            GateKind::Xnor => Some(xnor(inputs[0], inputs[1])),
            GateKind::Subcircuit(_) => None,
        }
    }

    /// The fixed library kinds, in a stable order.
    pub fn library() -> [GateKind; 7] {
        [
            GateKind::Nand,
            GateKind::Not,
            GateKind::And,
            GateKind::Or,
            GateKind::Nor,
            GateKind::Xor,
            GateKind::Xnor,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_eval_matches_functions() {
        for a in [false, true] {
            for b in [false, true] {
                assert_eq!(GateKind::Nand.eval(&[a, b]), Some(nand(a, b)));
                assert_eq!(GateKind::And.eval(&[a, b]), Some(and(a, b)));
                assert_eq!(GateKind::Or.eval(&[a, b]), Some(or(a, b)));
                assert_eq!(GateKind::Nor.eval(&[a, b]), Some(nor(a, b)));
                assert_eq!(GateKind::Xor.eval(&[a, b]), Some(xor(a, b)));
                assert_eq!(GateKind::Xnor.eval(&[a, b]), Some(xnor(a, b)));
            }
            assert_eq!(GateKind::Not.eval(&[a]), Some(not(a)));
        }
    }

    #[test]
    fn test_kind_arity_and_nand_count() {
        assert_eq!(GateKind::Not.arity(), 1);
        assert_eq!(GateKind::Nand.arity(), 2);
        assert_eq!(GateKind::Nand.nand_count(), 1);
        assert_eq!(GateKind::And.nand_count(), 2);
        assert_eq!(GateKind::Or.nand_count(), 3);
        assert_eq!(GateKind::Nor.nand_count(), 4);
        assert_eq!(GateKind::Xor.nand_count(), 4);
        assert_eq!(GateKind::Xnor.nand_count(), 5);
    }
}

//! # Gatesim Core
//!
//! A gate-level digital circuit simulator built on a single primitive:
//! the two-input NAND gate.
//!
//! This library provides:
//! - The NAND primitive and the standard composite gates (NOT, AND, OR,
//!   NOR, XOR, XNOR), each expressed strictly as a NAND wiring
//! - A circuit graph of named inputs/outputs and gate nodes, wired
//!   bottom-up and validated at construction
//! - A deterministic evaluator for combinational graphs, with Kahn
//!   ordering and undeclared-cycle detection
//! - Sequential elements: feedback-bearing graphs advanced by explicit
//!   clock ticks through a prior/next state protocol
//! - Reduction of any graph to an equivalent pure-NAND graph
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`gates`] - The NAND primitive, composite gate functions, and
//!   [`gates::GateKind`]
//! - [`circuit`] - Circuit graph representation, builder, validation,
//!   NAND expansion, and prebuilt components
//! - [`sim`] - Topological ordering, the evaluator, and sequential
//!   elements
//!
//! ## Usage
//!
//! ```
//! use gatesim_core::{CircuitBuilder, Evaluator};
//! use std::collections::HashMap;
//!
//! // AND out of two NANDs, the textbook universality exercise.
//! let mut b = CircuitBuilder::new("and");
//! let a = b.input("a");
//! let x = b.input("b");
//! let n = b.nand(a, x);
//! let out = b.nand(n, n);
//! b.output("out", out);
//!
//! let eval = Evaluator::new(b.build().unwrap()).unwrap();
//! let inputs = HashMap::from([("a".to_string(), true), ("b".to_string(), true)]);
//! assert_eq!(eval.evaluate(&inputs).unwrap()["out"], true);
//! ```
//!
//! ## Evaluation Model
//!
//! Evaluation is single-threaded, blocking, and finite. A combinational
//! graph is evaluated in one pass over a topological order computed
//! once per [`Evaluator`]. A sequential graph declares its feedback
//! nodes; consumers of those nodes read the prior state, and the values
//! computed at them become the next state, committed only at a
//! [`SequentialElement::tick`] boundary. Graphs are immutable after
//! construction and may be shared read-only across evaluators; a
//! sequential element's state belongs to exactly one caller.

pub mod circuit;
pub mod error;
pub mod gates;
pub mod sim;

// Re-export main types for convenience
pub use circuit::{CircuitBuilder, CircuitGraph, Node, NodeId, Signal};
pub use error::{Result, SimError};
pub use gates::GateKind;
pub use sim::{Evaluator, SequentialElement, State};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmLatch;

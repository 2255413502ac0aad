//! Graph evaluation engine.
//!
//! This module turns an immutable [`crate::circuit::CircuitGraph`] into
//! signal values:
//!
//! - [`topo_order`] computes the deterministic dependency order, with
//!   declared feedback edges cut
//! - [`Evaluator`] runs one pass over that order: plain evaluation for
//!   combinational graphs, the prior/next state protocol for sequential
//!   ones
//! - [`SequentialElement`] owns the state across passes and advances it
//!   at explicit clock ticks
//!
//! Evaluation is single-threaded, blocking, and always finite: graphs
//! are validated acyclic apart from declared feedback, so a pass visits
//! every node exactly once.

mod evaluator;
mod sequential;
mod topo;

pub use evaluator::{Evaluator, State};
pub use sequential::SequentialElement;
pub use topo::topo_order;

//! Circuit graph representation, construction, and validation.
//!
//! This module provides the structural side of the engine: the
//! [`CircuitGraph`] arena of nodes with named external inputs/outputs
//! and declared feedback, the [`CircuitBuilder`] used to wire graphs
//! bottom-up, validation of the result, reduction to pure NAND
//! ([`to_nand`]), and a small library of prebuilt components.
//!
//! Graphs are immutable once built; evaluation lives in [`crate::sim`].

mod builder;
mod expand;
mod graph;
pub mod library;
mod types;
mod validate;

pub use builder::CircuitBuilder;
pub use expand::to_nand;
pub use graph::{CircuitGraph, Node};
pub use types::{NodeId, Signal};

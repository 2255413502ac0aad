//! Error types for the gatesim circuit simulator.
//!
//! This module provides a unified error type [`SimError`] that covers
//! all error conditions that can occur during circuit construction and
//! evaluation. Every variant is a contract violation by the caller (a
//! malformed circuit description or an incomplete input/state map) and
//! is surfaced synchronously; nothing is retried or silently defaulted.
//!
//! The primitive gate functions in [`crate::gates`] are total and never
//! fail.

use thiserror::Error;

use crate::circuit::NodeId;

/// Result type alias using [`SimError`].
pub type Result<T> = std::result::Result<T, SimError>;

/// Unified error type for all gatesim operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    // ============ Construction Errors ============
    /// A gate input, output binding, feedback declaration, or state key
    /// references a node that does not exist in the graph.
    #[error("dangling reference in {context}: node {target} does not exist")]
    DanglingReference { context: String, target: String },

    /// An external input or output name collides with another of the
    /// same namespace.
    #[error("duplicate {namespace} name '{name}'")]
    DuplicateName { namespace: &'static str, name: String },

    /// A gate node was wired with the wrong number of inputs for its kind.
    #[error("gate '{kind}' at {node} expects {expected} inputs, got {found}")]
    ArityMismatch {
        kind: String,
        node: String,
        expected: usize,
        found: usize,
    },

    /// Invalid circuit topology.
    #[error("invalid circuit topology: {message}")]
    InvalidTopology { message: String },

    // ============ Evaluation Errors ============
    /// The dependency graph contains a cycle that was not declared as
    /// feedback. Combinational evaluation would never stabilize.
    #[error("undeclared cycle through nodes [{nodes}]")]
    CyclicGraph { nodes: String },

    /// A declared external input was not supplied a value.
    #[error("no value supplied for external input '{name}'")]
    MissingInput { name: String },

    /// A feedback node has no prior state to read from.
    #[error("no prior state supplied for feedback node {node}")]
    MissingState { node: String },
}

impl SimError {
    /// Create a dangling reference error.
    pub fn dangling(context: impl Into<String>, target: NodeId) -> Self {
        Self::DanglingReference {
            context: context.into(),
            target: target.to_string(),
        }
    }

    /// Create a duplicate name error.
    pub fn duplicate(namespace: &'static str, name: impl Into<String>) -> Self {
        Self::DuplicateName {
            namespace,
            name: name.into(),
        }
    }

    /// Create an arity mismatch error.
    pub fn arity(kind: impl Into<String>, node: NodeId, expected: usize, found: usize) -> Self {
        Self::ArityMismatch {
            kind: kind.into(),
            node: node.to_string(),
            expected,
            found,
        }
    }

    /// Create an invalid topology error.
    pub fn topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Create a cyclic graph error from the nodes left unresolved by the
    /// topological sort.
    pub fn cyclic(nodes: &[NodeId]) -> Self {
        let nodes = nodes
            .iter()
            .map(NodeId::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Self::CyclicGraph { nodes }
    }

    /// Create a missing input error.
    pub fn missing_input(name: impl Into<String>) -> Self {
        Self::MissingInput { name: name.into() }
    }

    /// Create a missing state error.
    pub fn missing_state(node: NodeId) -> Self {
        Self::MissingState {
            node: node.to_string(),
        }
    }
}

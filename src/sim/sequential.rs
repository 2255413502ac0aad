//! Clocked state handling for feedback-bearing graphs.

use std::collections::HashMap;
use std::sync::Arc;

use crate::circuit::{CircuitGraph, Signal};
use crate::error::{Result, SimError};

use super::evaluator::{Evaluator, State};

/// A circuit graph with owned sequential state.
///
/// Wraps an [`Evaluator`] together with the prior-state mapping for the
/// graph's feedback nodes. [`Self::tick`] is the clock: it evaluates
/// the graph against the owned prior state and then commits the next
/// state, so state changes become visible only at tick boundaries,
/// never mid-evaluation.
///
/// The state is exclusively owned by one logical caller; the element
/// provides no internal locking. Share the underlying graph instead and
/// give each thread its own element.
#[derive(Debug)]
pub struct SequentialElement {
    evaluator: Evaluator,
    initial: State,
    state: State,
    ticks: u64,
}

impl SequentialElement {
    /// Create an element whose feedback nodes all start at `false`.
    pub fn new(graph: impl Into<Arc<CircuitGraph>>) -> Result<Self> {
        let evaluator = Evaluator::new(graph)?;
        let initial: State = evaluator
            .graph()
            .feedback()
            .iter()
            .map(|&id| (id, false))
            .collect();
        let state = initial.clone();
        Ok(Self {
            evaluator,
            initial,
            state,
            ticks: 0,
        })
    }

    /// Create an element with an explicit initial state, for latches
    /// with an asymmetric bias.
    ///
    /// `initial` must name every feedback node of the graph exactly:
    /// a missing node fails with [`SimError::MissingState`], an unknown
    /// one with [`SimError::DanglingReference`].
    pub fn with_initial_state(
        graph: impl Into<Arc<CircuitGraph>>,
        initial: State,
    ) -> Result<Self> {
        let evaluator = Evaluator::new(graph)?;

        for &id in evaluator.graph().feedback() {
            if !initial.contains_key(&id) {
                return Err(SimError::missing_state(id));
            }
        }
        for &id in initial.keys() {
            if !evaluator.graph().is_feedback(id) {
                return Err(SimError::dangling("initial state", id));
            }
        }

        let state = initial.clone();
        Ok(Self {
            evaluator,
            initial,
            state,
            ticks: 0,
        })
    }

    /// The graph this element advances.
    pub fn graph(&self) -> &CircuitGraph {
        self.evaluator.graph()
    }

    /// The current committed state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Number of ticks since construction or the last [`Self::reset`].
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance the element by one clock tick.
    ///
    /// Evaluates the graph against the owned prior state, commits the
    /// resulting next state, and returns the output values observed
    /// during the pass.
    pub fn tick(&mut self, inputs: &HashMap<String, Signal>) -> Result<HashMap<String, Signal>> {
        let (outputs, next) = self.evaluator.evaluate_seq(inputs, &self.state)?;
        self.state = next;
        self.ticks += 1;
        Ok(outputs)
    }

    /// Restore the initial state (all-false unless the element was
    /// built with [`Self::with_initial_state`]) and zero the tick
    /// counter.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.ticks = 0;
    }
}

//! The definition record exchanged with persistence collaborators.
//!
//! [`AutomatonDefinition`] is the flat, serializable shape of the
//! five-tuple. It carries no invariants of its own; turning a record into
//! a live [`Automaton`] goes through validation, so an inconsistent
//! record is rejected with the full report rather than half-loaded.

use crate::core::{Automaton, Transition, ValidationReport};
use serde::{Deserialize, Serialize};

/// One transition row of a definition record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: String,
    pub symbol: String,
    pub to: String,
}

impl TransitionRecord {
    pub fn new(
        from: impl Into<String>,
        symbol: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            symbol: symbol.into(),
            to: to.into(),
        }
    }
}

/// The serializable five-tuple record.
///
/// # Example
///
/// ```rust
/// use dfakit::definition::{AutomatonDefinition, TransitionRecord};
/// use dfakit::core::Automaton;
///
/// let definition = AutomatonDefinition {
///     states: vec!["q0".into(), "q1".into()],
///     alphabet: vec!["a".into()],
///     start: "q0".into(),
///     accepting: vec!["q1".into()],
///     transitions: vec![TransitionRecord::new("q0", "a", "q1")],
/// };
///
/// let automaton = Automaton::from_definition(&definition).unwrap();
/// assert_eq!(automaton.states().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDefinition {
    pub states: Vec<String>,
    pub alphabet: Vec<String>,
    pub start: String,
    pub accepting: Vec<String>,
    pub transitions: Vec<TransitionRecord>,
}

impl Automaton {
    /// Build an automaton from a definition record.
    ///
    /// Duplicate states, symbols, accepting marks, and identical
    /// transition rows collapse silently (they carry no information); any
    /// invariant violation rejects the whole record with the validation
    /// report.
    pub fn from_definition(definition: &AutomatonDefinition) -> Result<Self, ValidationReport> {
        let mut automaton = Automaton::new();
        for state in &definition.states {
            automaton.add_state(state.as_str());
        }
        for symbol in &definition.alphabet {
            automaton.add_symbol(symbol.as_str());
        }
        automaton.set_start(definition.start.as_str());
        for state in &definition.accepting {
            automaton.add_accepting(state.as_str());
        }
        for row in &definition.transitions {
            automaton.add_transition(Transition::new(
                row.from.as_str(),
                row.symbol.as_str(),
                row.to.as_str(),
            ));
        }

        let report = automaton.validate();
        if report.is_valid() {
            Ok(automaton)
        } else {
            Err(report)
        }
    }

    /// Export the current five-tuple as a definition record, or `None`
    /// while no start state is set.
    pub fn to_definition(&self) -> Option<AutomatonDefinition> {
        let start = self.start()?;
        Some(AutomatonDefinition {
            states: self.states().iter().map(|s| s.as_str().to_owned()).collect(),
            alphabet: self
                .alphabet()
                .iter()
                .map(|s| s.as_str().to_owned())
                .collect(),
            start: start.as_str().to_owned(),
            accepting: self
                .accepting()
                .iter()
                .map(|s| s.as_str().to_owned())
                .collect(),
            transitions: self
                .transitions()
                .iter()
                .map(|t| TransitionRecord::new(t.from.as_str(), t.symbol.as_str(), t.to.as_str()))
                .collect(),
        })
    }
}

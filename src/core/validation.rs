//! Definition validation.
//!
//! Validation accumulates every issue instead of stopping at the first,
//! so a caller editing a definition gets the complete picture in one
//! pass. The report order is deterministic: structural checks, then
//! accepting states in stored order, then transitions in insertion order.

use super::automaton::{Automaton, StateId, Symbol, Transition};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// One structural issue in a five-tuple definition.
///
/// Every variant names the offending entity, so a caller can point at the
/// exact state, symbol, or transition to fix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("no states are defined")]
    NoStates,

    #[error("the alphabet is empty")]
    EmptyAlphabet,

    #[error("no start state is set")]
    NoStartState,

    #[error("start state '{0}' is not in the state set")]
    UnknownStartState(StateId),

    #[error("accepting state '{0}' is not in the state set")]
    UnknownAcceptingState(StateId),

    #[error("transition {0} starts in an undefined state")]
    UndefinedSourceState(Transition),

    #[error("transition {0} reads a symbol that is not in the alphabet")]
    UndefinedSymbol(Transition),

    #[error("transition {0} ends in an undefined state")]
    UndefinedTargetState(Transition),

    #[error("state '{from}' maps symbol '{symbol}' to both '{first}' and '{second}'")]
    ConflictingTransitions {
        from: StateId,
        symbol: Symbol,
        first: StateId,
        second: StateId,
    },
}

/// The ordered outcome of validating an automaton.
///
/// An empty report means the definition satisfies every invariant and the
/// automaton is ready for evaluation and generation. Re-validating an
/// unchanged automaton yields the same report.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ValidationReport {
    errors: Vec<DefinitionError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Every issue found, in reporting order.
    pub fn errors(&self) -> &[DefinitionError] {
        &self.errors
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("definition is valid");
        }
        write!(f, "invalid definition: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

impl Automaton {
    /// Check every invariant of the five-tuple and report all violations.
    ///
    /// Validation never mutates the automaton and is idempotent. The
    /// checks: non-empty state set and alphabet, start state set and
    /// defined, accepting states defined, transition endpoints and symbols
    /// defined, and no `(state, symbol)` pair mapped to two destinations.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfakit::core::{Automaton, DefinitionError};
    ///
    /// let mut automaton = Automaton::new();
    /// automaton.add_state("q0");
    /// automaton.add_symbol("a");
    /// automaton.set_start("q1");
    ///
    /// let report = automaton.validate();
    /// assert!(!report.is_valid());
    /// assert_eq!(
    ///     report.errors()[0],
    ///     DefinitionError::UnknownStartState("q1".into()),
    /// );
    /// ```
    pub fn validate(&self) -> ValidationReport {
        let mut errors = Vec::new();

        if self.states().is_empty() {
            errors.push(DefinitionError::NoStates);
        }
        if self.alphabet().is_empty() {
            errors.push(DefinitionError::EmptyAlphabet);
        }

        match self.start() {
            None => errors.push(DefinitionError::NoStartState),
            Some(start) if !self.has_state(start) => {
                errors.push(DefinitionError::UnknownStartState(start.clone()));
            }
            Some(_) => {}
        }

        for state in self.accepting() {
            if !self.has_state(state) {
                errors.push(DefinitionError::UnknownAcceptingState(state.clone()));
            }
        }

        for transition in self.transitions() {
            if !self.has_state(&transition.from) {
                errors.push(DefinitionError::UndefinedSourceState(transition.clone()));
            }
            if !self.has_symbol(&transition.symbol) {
                errors.push(DefinitionError::UndefinedSymbol(transition.clone()));
            }
            if !self.has_state(&transition.to) {
                errors.push(DefinitionError::UndefinedTargetState(transition.clone()));
            }
        }

        // Determinism check: the first mapping of a pair wins, every later
        // conflicting mapping is reported against it.
        let mut seen: HashMap<(&StateId, &Symbol), &StateId> = HashMap::new();
        for transition in self.transitions() {
            match seen.get(&(&transition.from, &transition.symbol)) {
                Some(first) if **first != transition.to => {
                    errors.push(DefinitionError::ConflictingTransitions {
                        from: transition.from.clone(),
                        symbol: transition.symbol.clone(),
                        first: (*first).clone(),
                        second: transition.to.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    seen.insert((&transition.from, &transition.symbol), &transition.to);
                }
            }
        }

        ValidationReport { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_state_automaton() -> Automaton {
        let mut automaton = Automaton::new();
        automaton.add_state("q0");
        automaton.add_state("q1");
        automaton.add_symbol("a");
        automaton.add_symbol("b");
        automaton.set_start("q0");
        automaton.add_accepting("q1");
        automaton.add_transition(Transition::new("q0", "a", "q1"));
        automaton.add_transition(Transition::new("q1", "a", "q1"));
        automaton.add_transition(Transition::new("q1", "b", "q0"));
        automaton.add_transition(Transition::new("q0", "b", "q0"));
        automaton
    }

    #[test]
    fn complete_definition_is_valid() {
        let report = two_state_automaton().validate();
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
        assert_eq!(report.to_string(), "definition is valid");
    }

    #[test]
    fn empty_automaton_reports_structural_issues() {
        let report = Automaton::new().validate();

        assert_eq!(
            report.errors(),
            &[
                DefinitionError::NoStates,
                DefinitionError::EmptyAlphabet,
                DefinitionError::NoStartState,
            ]
        );
    }

    #[test]
    fn unknown_start_state_is_reported() {
        let mut automaton = two_state_automaton();
        automaton.set_start("q9");

        let report = automaton.validate();
        assert_eq!(
            report.errors(),
            &[DefinitionError::UnknownStartState("q9".into())]
        );
    }

    #[test]
    fn unknown_accepting_state_is_reported() {
        let mut automaton = two_state_automaton();
        automaton.add_accepting("q9");

        let report = automaton.validate();
        assert_eq!(
            report.errors(),
            &[DefinitionError::UnknownAcceptingState("q9".into())]
        );
    }

    #[test]
    fn dangling_transition_reports_each_reference() {
        let mut automaton = two_state_automaton();
        automaton.add_transition(Transition::new("q9", "z", "q8"));

        let bad = Transition::new("q9", "z", "q8");
        let report = automaton.validate();
        assert_eq!(
            report.errors(),
            &[
                DefinitionError::UndefinedSourceState(bad.clone()),
                DefinitionError::UndefinedSymbol(bad.clone()),
                DefinitionError::UndefinedTargetState(bad),
            ]
        );
    }

    #[test]
    fn conflicting_destinations_are_reported() {
        let mut automaton = two_state_automaton();
        automaton.add_transition(Transition::new("q0", "a", "q0"));

        let report = automaton.validate();
        assert_eq!(
            report.errors(),
            &[DefinitionError::ConflictingTransitions {
                from: "q0".into(),
                symbol: "a".into(),
                first: "q1".into(),
                second: "q0".into(),
            }]
        );
    }

    #[test]
    fn repeating_an_existing_mapping_is_not_a_conflict() {
        let mut automaton = two_state_automaton();
        assert!(!automaton.add_transition(Transition::new("q0", "a", "q1")));

        assert!(automaton.validate().is_valid());
    }

    #[test]
    fn validate_does_not_mutate() {
        let automaton = two_state_automaton();
        let before = automaton.clone();

        let _ = automaton.validate();

        assert_eq!(automaton, before);
    }

    #[test]
    fn validate_is_idempotent() {
        let mut automaton = two_state_automaton();
        automaton.set_start("q9");
        automaton.add_transition(Transition::new("q0", "a", "q0"));

        let first = automaton.validate();
        let second = automaton.validate();

        assert_eq!(first, second);
    }

    #[test]
    fn report_display_joins_errors() {
        let mut automaton = Automaton::new();
        automaton.add_state("q0");
        automaton.add_symbol("a");

        let report = automaton.validate();
        assert_eq!(
            report.to_string(),
            "invalid definition: no start state is set"
        );
    }
}

//! Step-by-step string evaluation.
//!
//! Evaluation walks the transition function one input symbol at a time
//! and records every step, so a presentation layer can replay the run.
//! The trace is complete even for rejected runs, up to the point the run
//! halted.

use super::automaton::{Automaton, StateId, Symbol};
use super::validation::ValidationReport;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One step of a run: reading `symbol` moved the automaton from `from`
/// to `to`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub from: StateId,
    pub symbol: Symbol,
    pub to: StateId,
}

/// Why a run rejected its input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionReason {
    /// The whole input was consumed but the run ended outside the
    /// accepting set.
    NonAcceptingEnd(StateId),

    /// The transition function has no mapping for `(state, symbol)`; the
    /// input symbol at `position` was never consumed.
    NoTransition {
        state: StateId,
        symbol: Symbol,
        position: usize,
    },
}

/// Final verdict of a run. Rejection is a normal outcome and always
/// carries its reason.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accepted,
    Rejected(RejectionReason),
}

/// The full record of one evaluation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationTrace {
    steps: Vec<TraceStep>,
    verdict: Verdict,
}

impl EvaluationTrace {
    /// The steps taken, in order. One entry per consumed input symbol.
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self.verdict, Verdict::Accepted)
    }
}

/// Errors that stop a run before it takes a single step.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The automaton currently fails validation; nothing may run against
    /// it until the definition is repaired.
    #[error("cannot evaluate against an invalid definition: {0}")]
    Invalid(#[from] ValidationReport),

    /// The input contains a symbol outside the alphabet.
    #[error("symbol '{symbol}' at position {position} is not in the alphabet")]
    UnknownSymbol { symbol: Symbol, position: usize },
}

impl Automaton {
    /// Run the automaton over `input` and return the full trace.
    ///
    /// The whole input is screened against the alphabet before the run
    /// starts; an unknown symbol is an error, not a rejection. A missing
    /// transition mid-run halts with [`RejectionReason::NoTransition`],
    /// which is an ordinary rejected verdict. The empty input is accepted
    /// exactly when the start state is accepting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfakit::core::{Automaton, Symbol, Transition, Verdict};
    ///
    /// let mut automaton = Automaton::new();
    /// automaton.add_state("even");
    /// automaton.add_state("odd");
    /// automaton.add_symbol("a");
    /// automaton.set_start("even");
    /// automaton.add_accepting("odd");
    /// automaton.add_transition(Transition::new("even", "a", "odd"));
    /// automaton.add_transition(Transition::new("odd", "a", "even"));
    ///
    /// let input = vec![Symbol::from("a")];
    /// let trace = automaton.evaluate(&input).unwrap();
    /// assert_eq!(trace.verdict(), &Verdict::Accepted);
    /// assert_eq!(trace.steps().len(), 1);
    /// ```
    pub fn evaluate(&self, input: &[Symbol]) -> Result<EvaluationTrace, EvaluationError> {
        let report = self.validate();
        if !report.is_valid() {
            return Err(EvaluationError::Invalid(report));
        }

        for (position, symbol) in input.iter().enumerate() {
            if !self.has_symbol(symbol) {
                return Err(EvaluationError::UnknownSymbol {
                    symbol: symbol.clone(),
                    position,
                });
            }
        }

        // A valid automaton always has a start state.
        let Some(mut current) = self.start().cloned() else {
            return Err(EvaluationError::Invalid(report));
        };

        let mut steps = Vec::with_capacity(input.len());
        for (position, symbol) in input.iter().enumerate() {
            match self.transition_for(&current, symbol) {
                Some(next) => {
                    steps.push(TraceStep {
                        from: current.clone(),
                        symbol: symbol.clone(),
                        to: next.clone(),
                    });
                    current = next.clone();
                }
                None => {
                    return Ok(EvaluationTrace {
                        steps,
                        verdict: Verdict::Rejected(RejectionReason::NoTransition {
                            state: current,
                            symbol: symbol.clone(),
                            position,
                        }),
                    });
                }
            }
        }

        let verdict = if self.is_accepting(&current) {
            Verdict::Accepted
        } else {
            Verdict::Rejected(RejectionReason::NonAcceptingEnd(current))
        };

        Ok(EvaluationTrace { steps, verdict })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::automaton::Transition;

    fn symbols(input: &str) -> Vec<Symbol> {
        input.chars().map(|c| Symbol::new(c.to_string())).collect()
    }

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
    fn accepted_run_records_every_step() {
        let automaton = two_state_automaton();

        let trace = automaton.evaluate(&symbols("aba")).unwrap();

        assert!(trace.is_accepted());
        assert_eq!(
            trace.steps(),
            &[
                TraceStep {
                    from: "q0".into(),
                    symbol: "a".into(),
                    to: "q1".into(),
                },
                TraceStep {
                    from: "q1".into(),
                    symbol: "b".into(),
                    to: "q0".into(),
                },
                TraceStep {
                    from: "q0".into(),
                    symbol: "a".into(),
                    to: "q1".into(),
                },
            ]
        );
    }

    #[test]
    fn run_ending_outside_accepting_set_is_rejected() {
        let automaton = two_state_automaton();

        let trace = automaton.evaluate(&symbols("b")).unwrap();

        assert_eq!(trace.steps().len(), 1);
        assert_eq!(
            trace.verdict(),
            &Verdict::Rejected(RejectionReason::NonAcceptingEnd("q0".into()))
        );
    }

    #[test]
    fn missing_transition_halts_the_run() {
        let mut automaton = two_state_automaton();
        automaton.remove_transition(&"q1".into(), &"b".into());

        let trace = automaton.evaluate(&symbols("ab")).unwrap();

        assert_eq!(trace.steps().len(), 1);
        assert_eq!(
            trace.verdict(),
            &Verdict::Rejected(RejectionReason::NoTransition {
                state: "q1".into(),
                symbol: "b".into(),
                position: 1,
            })
        );
    }

    #[test]
    fn empty_input_accepted_iff_start_is_accepting() {
        let mut automaton = two_state_automaton();

        let trace = automaton.evaluate(&[]).unwrap();
        assert!(!trace.is_accepted());
        assert!(trace.steps().is_empty());

        automaton.add_accepting("q0");
        let trace = automaton.evaluate(&[]).unwrap();
        assert!(trace.is_accepted());
        assert!(trace.steps().is_empty());
    }

    #[test]
    fn unknown_symbol_stops_the_run_before_it_starts() {
        let automaton = two_state_automaton();

        let error = automaton.evaluate(&symbols("axb")).unwrap_err();

        assert_eq!(
            error,
            EvaluationError::UnknownSymbol {
                symbol: "x".into(),
                position: 1,
            }
        );
    }

    #[test]
    fn invalid_definition_blocks_evaluation() {
        let mut automaton = two_state_automaton();
        automaton.clear_start();

        let error = automaton.evaluate(&symbols("a")).unwrap_err();

        assert!(matches!(error, EvaluationError::Invalid(_)));
    }

    #[test]
    fn trace_serializes_for_presentation() {
        let automaton = two_state_automaton();
        let trace = automaton.evaluate(&symbols("ab")).unwrap();

        let json = serde_json::to_string(&trace).unwrap();
        let back: EvaluationTrace = serde_json::from_str(&json).unwrap();

        assert_eq!(trace, back);
    }
}

//! Dfakit: define, simulate, and explore deterministic finite automata
//!
//! The core model is pure and synchronous: an [`Automaton`] owns its
//! five-tuple (states, alphabet, start state, accepting states,
//! transition function), accumulates every definition issue on
//! [`validate`](Automaton::validate), replays inputs step by step with
//! [`evaluate`](Automaton::evaluate), and lazily enumerates its language
//! shortest-first with [`language`](Automaton::language). File I/O is
//! isolated in [`persist`], and the interactive conventions of a frontend
//! (single live instance, raw-input tokenizing) in [`session`].
//!
//! # Core Concepts
//!
//! - **Automaton**: the mutable five-tuple, edited through explicit
//!   add/remove operations with deferred validation
//! - **Trace**: the complete ordered record of one evaluation run,
//!   returned for rejected runs too
//! - **Language**: a bounded, restartable shortest-first enumeration of
//!   accepted strings
//!
//! # Example
//!
//! ```rust
//! use dfakit::core::{Automaton, Transition, Verdict};
//! use dfakit::session::parse_input;
//!
//! let mut automaton = Automaton::new();
//! automaton.add_state("q0");
//! automaton.add_state("q1");
//! automaton.add_symbol("a");
//! automaton.add_symbol("b");
//! automaton.set_start("q0");
//! automaton.add_accepting("q1");
//! automaton.add_transition(Transition::new("q0", "a", "q1"));
//! automaton.add_transition(Transition::new("q1", "a", "q1"));
//! automaton.add_transition(Transition::new("q1", "b", "q0"));
//! automaton.add_transition(Transition::new("q0", "b", "q0"));
//!
//! assert!(automaton.validate().is_valid());
//!
//! let trace = automaton.evaluate(&parse_input("aba")).unwrap();
//! assert_eq!(trace.verdict(), &Verdict::Accepted);
//!
//! let strings: Vec<String> = automaton.language(3).unwrap().collect();
//! assert_eq!(strings, vec!["a", "aa", "ba"]);
//! ```

pub mod core;
pub mod definition;
pub mod persist;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Automaton, DefinitionError, EvaluationError, EvaluationTrace, Generation, GenerationStatus,
    Language, RejectionReason, StateId, Symbol, TraceStep, Transition, ValidationReport, Verdict,
};
pub use crate::definition::{AutomatonDefinition, TransitionRecord};
pub use crate::persist::PersistError;
pub use crate::session::{Session, SessionError};

//! Core automaton model and algorithms.
//!
//! This module contains the five-tuple model and everything with
//! algorithmic content:
//! - The [`Automaton`] container and its explicit mutation surface
//! - Validation that accumulates every definition issue
//! - Step-by-step evaluation producing a full [`EvaluationTrace`]
//! - Lazy shortest-first enumeration of the accepted language
//!
//! All operations here are pure and synchronous; file I/O lives in
//! [`crate::persist`] and input conventions in [`crate::session`].

mod automaton;
mod evaluation;
mod generation;
mod validation;

pub use automaton::{Automaton, StateId, Symbol, Transition};
pub use evaluation::{EvaluationError, EvaluationTrace, RejectionReason, TraceStep, Verdict};
pub use generation::{Generation, GenerationStatus, Language, DEFAULT_EXPANSION_CEILING};
pub use validation::{DefinitionError, ValidationReport};

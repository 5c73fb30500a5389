//! Session layer owning the single live automaton.
//!
//! A [`Session`] holds at most one automaton and mediates every
//! operation a frontend drives: define, evaluate, generate, save, load.
//! Until a definition has been accepted, every operation fails with
//! [`SessionError::NotDefined`]. The session also owns the raw-input
//! conventions — tokenizing an input line into symbols and the `*`
//! placeholder for the empty string — so the core model stays free of
//! them.

use crate::core::{Automaton, EvaluationError, EvaluationTrace, Generation, Symbol, ValidationReport};
use crate::definition::AutomatonDefinition;
use crate::persist::{self, PersistError};
use std::path::Path;
use thiserror::Error;

/// Input placeholder for the empty string.
pub const EMPTY_INPUT_TOKEN: &str = "*";

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No automaton has been defined or loaded yet.
    #[error("define an automaton first")]
    NotDefined,

    /// The alphabet contains the `*` token, which is reserved as the
    /// empty-string placeholder in raw input.
    #[error("the '*' token is reserved for the empty string and cannot be an alphabet symbol")]
    ReservedSymbol,

    /// The submitted definition violates the automaton invariants.
    #[error("{0}")]
    Invalid(ValidationReport),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Map a raw input line to a symbol sequence.
///
/// `*` and a blank line mean the empty string. A line containing
/// whitespace is split on it, for alphabets with multi-character symbols;
/// otherwise each character is one symbol. Nothing is checked against an
/// alphabet here; evaluation reports unknown symbols with their position.
pub fn parse_input(input: &str) -> Vec<Symbol> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == EMPTY_INPUT_TOKEN {
        return Vec::new();
    }
    if trimmed.contains(char::is_whitespace) {
        trimmed.split_whitespace().map(Symbol::from).collect()
    } else {
        trimmed.chars().map(|c| Symbol::new(c.to_string())).collect()
    }
}

/// One interactive session: a single owned automaton and the operations
/// a frontend drives against it.
///
/// # Example
///
/// ```rust
/// use dfakit::definition::{AutomatonDefinition, TransitionRecord};
/// use dfakit::session::Session;
///
/// let definition = AutomatonDefinition {
///     states: vec!["q0".into(), "q1".into()],
///     alphabet: vec!["a".into()],
///     start: "q0".into(),
///     accepting: vec!["q1".into()],
///     transitions: vec![
///         TransitionRecord::new("q0", "a", "q1"),
///         TransitionRecord::new("q1", "a", "q0"),
///     ],
/// };
///
/// let mut session = Session::new();
/// session.define(&definition).unwrap();
///
/// let trace = session.evaluate("a").unwrap();
/// assert!(trace.is_accepted());
///
/// let generation = session.generate(2).unwrap();
/// assert_eq!(generation.strings(), &["a".to_string(), "aaa".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    automaton: Option<Automaton>,
}

impl Session {
    /// Create a session with no automaton defined.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_defined(&self) -> bool {
        self.automaton.is_some()
    }

    /// Read-only access to the live automaton, for rendering and
    /// presentation collaborators.
    pub fn automaton(&self) -> Option<&Automaton> {
        self.automaton.as_ref()
    }

    /// Mutable access for incremental edits. Edits may invalidate the
    /// model; evaluation and generation fail closed until it is repaired.
    pub fn automaton_mut(&mut self) -> Option<&mut Automaton> {
        self.automaton.as_mut()
    }

    /// Validate a definition and install it, replacing any previous
    /// automaton.
    pub fn define(&mut self, definition: &AutomatonDefinition) -> Result<(), SessionError> {
        if definition.alphabet.iter().any(|s| s == EMPTY_INPUT_TOKEN) {
            return Err(SessionError::ReservedSymbol);
        }
        let automaton = Automaton::from_definition(definition).map_err(SessionError::Invalid)?;
        self.automaton = Some(automaton);
        Ok(())
    }

    /// Drop the current automaton, if any.
    pub fn clear(&mut self) {
        self.automaton = None;
    }

    /// Tokenize a raw input line and evaluate it against the automaton.
    pub fn evaluate(&self, input: &str) -> Result<EvaluationTrace, SessionError> {
        let automaton = self.automaton.as_ref().ok_or(SessionError::NotDefined)?;
        let symbols = parse_input(input);
        Ok(automaton.evaluate(&symbols)?)
    }

    /// Enumerate up to `limit` accepted strings, shortest first.
    pub fn generate(&self, limit: usize) -> Result<Generation, SessionError> {
        let automaton = self.automaton.as_ref().ok_or(SessionError::NotDefined)?;
        automaton.generate(limit).map_err(SessionError::Invalid)
    }

    /// Save the current automaton as a JSON definition file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let automaton = self.automaton.as_ref().ok_or(SessionError::NotDefined)?;
        persist::save_automaton(path, automaton)?;
        Ok(())
    }

    /// Load a definition file, replacing any previous automaton on
    /// success. A failed load leaves the session unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&Automaton, SessionError> {
        let automaton = persist::load_automaton(path)?;
        Ok(self.automaton.insert(automaton))
    }
}

//! The five-tuple automaton model.
//!
//! An [`Automaton`] owns its states, alphabet, start state, accepting
//! states, and transition table exclusively. All collections preserve
//! insertion order, which is the order used for issue reporting and for
//! the tie-break in language generation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque state label, compared by equality.
///
/// States carry no behavior of their own; a `StateId` is just a name that
/// must be a member of the automaton's state set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for StateId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// Opaque alphabet token, typically a single character.
///
/// Multi-character tokens are allowed; the alphabet is a small enumerated
/// set either way.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Symbol {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// One entry of the transition function: reading `symbol` in state `from`
/// moves the automaton to state `to`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: StateId,
    pub symbol: Symbol,
    pub to: StateId,
}

impl Transition {
    pub fn new(
        from: impl Into<StateId>,
        symbol: impl Into<Symbol>,
        to: impl Into<StateId>,
    ) -> Self {
        Self {
            from: from.into(),
            symbol: symbol.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) -> {}", self.from, self.symbol, self.to)
    }
}

/// A deterministic finite automaton under construction or in use.
///
/// An automaton starts empty and is mutated only through the explicit
/// add/remove operations below. Mutation never fails: validation is
/// deferred, so an edit may leave the model temporarily inconsistent and
/// [`validate`](Automaton::validate) reports every issue. Evaluation and
/// generation refuse to run until the report is clean.
///
/// # Example
///
/// ```rust
/// use dfakit::core::{Automaton, Transition};
///
/// let mut automaton = Automaton::new();
/// automaton.add_state("q0");
/// automaton.add_state("q1");
/// automaton.add_symbol("a");
/// automaton.add_symbol("b");
/// automaton.set_start("q0");
/// automaton.add_accepting("q1");
/// automaton.add_transition(Transition::new("q0", "a", "q1"));
/// automaton.add_transition(Transition::new("q0", "b", "q0"));
/// automaton.add_transition(Transition::new("q1", "a", "q1"));
/// automaton.add_transition(Transition::new("q1", "b", "q0"));
///
/// assert!(automaton.validate().is_valid());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<StateId>,
    alphabet: Vec<Symbol>,
    start: Option<StateId>,
    accepting: Vec<StateId>,
    transitions: Vec<Transition>,
}

impl Automaton {
    /// Create an empty automaton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state. Returns `false` if the label was already present.
    pub fn add_state(&mut self, state: impl Into<StateId>) -> bool {
        let state = state.into();
        if self.states.contains(&state) {
            return false;
        }
        self.states.push(state);
        true
    }

    /// Remove a state. Returns `false` if the label was not present.
    ///
    /// Removal does not cascade: transitions, the accepting set, and the
    /// start state keep any reference to the removed label, and validation
    /// reports them as dangling until the caller cleans up.
    pub fn remove_state(&mut self, state: &StateId) -> bool {
        let before = self.states.len();
        self.states.retain(|s| s != state);
        self.states.len() != before
    }

    /// Add an alphabet symbol. Returns `false` if already present.
    pub fn add_symbol(&mut self, symbol: impl Into<Symbol>) -> bool {
        let symbol = symbol.into();
        if self.alphabet.contains(&symbol) {
            return false;
        }
        self.alphabet.push(symbol);
        true
    }

    /// Remove an alphabet symbol. Returns `false` if not present.
    pub fn remove_symbol(&mut self, symbol: &Symbol) -> bool {
        let before = self.alphabet.len();
        self.alphabet.retain(|s| s != symbol);
        self.alphabet.len() != before
    }

    /// Set the start state. The label need not exist yet; validation
    /// reports a start state outside the state set.
    pub fn set_start(&mut self, state: impl Into<StateId>) {
        self.start = Some(state.into());
    }

    /// Unset the start state.
    pub fn clear_start(&mut self) {
        self.start = None;
    }

    /// Mark a state as accepting. Returns `false` if already marked.
    pub fn add_accepting(&mut self, state: impl Into<StateId>) -> bool {
        let state = state.into();
        if self.accepting.contains(&state) {
            return false;
        }
        self.accepting.push(state);
        true
    }

    /// Unmark an accepting state. Returns `false` if it was not marked.
    pub fn remove_accepting(&mut self, state: &StateId) -> bool {
        let before = self.accepting.len();
        self.accepting.retain(|s| s != state);
        self.accepting.len() != before
    }

    /// Add a transition. An exact duplicate (same source, symbol, and
    /// destination) is skipped and returns `false`. A conflicting entry
    /// for an already-mapped `(from, symbol)` pair is stored as given;
    /// validation reports the conflict.
    pub fn add_transition(&mut self, transition: Transition) -> bool {
        if self.transitions.contains(&transition) {
            return false;
        }
        self.transitions.push(transition);
        true
    }

    /// Remove every transition for the `(from, symbol)` pair. Returns
    /// `false` if none existed.
    pub fn remove_transition(&mut self, from: &StateId, symbol: &Symbol) -> bool {
        let before = self.transitions.len();
        self.transitions
            .retain(|t| !(t.from == *from && t.symbol == *symbol));
        self.transitions.len() != before
    }

    /// The state set, in insertion order.
    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    /// The alphabet, in insertion order.
    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }

    /// The start state, if one has been set.
    pub fn start(&self) -> Option<&StateId> {
        self.start.as_ref()
    }

    /// The accepting states, in insertion order.
    pub fn accepting(&self) -> &[StateId] {
        &self.accepting
    }

    /// The transition table, in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn has_state(&self, state: &StateId) -> bool {
        self.states.contains(state)
    }

    pub fn has_symbol(&self, symbol: &Symbol) -> bool {
        self.alphabet.contains(symbol)
    }

    pub fn is_accepting(&self, state: &StateId) -> bool {
        self.accepting.contains(state)
    }

    /// Look up the destination for `(from, symbol)`, if the transition
    /// function maps the pair. On a model with conflicting entries this
    /// returns the first one added.
    pub fn transition_for(&self, from: &StateId, symbol: &Symbol) -> Option<&StateId> {
        self.transitions
            .iter()
            .find(|t| t.from == *from && t.symbol == *symbol)
            .map(|t| &t.to)
    }
}

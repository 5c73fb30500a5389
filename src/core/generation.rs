//! Shortest-first enumeration of the accepted language.
//!
//! The language of a DFA may be infinite, so enumeration is lazy and
//! bounded: a [`Language`] iterator yields accepted strings breadth-first
//! until the requested number of results or a hard ceiling on search
//! expansions, whichever comes first.

use super::automaton::{Automaton, StateId};
use super::validation::ValidationReport;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default hard ceiling on breadth-first queue expansions.
pub const DEFAULT_EXPANSION_CEILING: usize = 10_000;

/// Lazy shortest-first enumeration of accepted strings.
///
/// The search walks `(state, partial string)` pairs breadth-first from
/// `(start, "")`. Dequeuing an accepting state yields its string (the
/// empty string included), and successors are enqueued in alphabet
/// insertion order, so the enumeration is reproducible for a given
/// definition: strictly non-decreasing in length, ties broken by the
/// order the alphabet was entered.
///
/// Stopping early costs nothing beyond what was already pulled, and
/// constructing a fresh `Language` restarts the enumeration. No visited
/// set is kept: in a DFA every enqueued string is a distinct extension of
/// a distinct string, so revisits cannot occur.
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
/// automaton.add_transition(Transition::new("q1", "a", "q1"));
/// automaton.add_transition(Transition::new("q1", "b", "q0"));
/// automaton.add_transition(Transition::new("q0", "b", "q0"));
///
/// let strings: Vec<String> = automaton.language(3).unwrap().collect();
/// assert_eq!(strings, vec!["a", "aa", "ba"]);
/// ```
pub struct Language<'a> {
    automaton: &'a Automaton,
    queue: VecDeque<(StateId, String)>,
    remaining: usize,
    expansions_left: usize,
    ceiling_hit: bool,
}

impl<'a> Language<'a> {
    fn new(automaton: &'a Automaton, limit: usize, ceiling: usize) -> Self {
        let mut queue = VecDeque::new();
        if let Some(start) = automaton.start() {
            queue.push_back((start.clone(), String::new()));
        }
        Self {
            automaton,
            queue,
            remaining: limit,
            expansions_left: ceiling,
            ceiling_hit: false,
        }
    }

    /// Whether the search ran into its expansion ceiling. Only meaningful
    /// once the iterator has returned `None`; a `true` means the
    /// enumeration is partial rather than the language exhausted.
    pub fn ceiling_hit(&self) -> bool {
        self.ceiling_hit
    }

    /// Drain the iterator into its eager form.
    pub fn into_generation(mut self) -> Generation {
        let mut strings = Vec::new();
        for string in self.by_ref() {
            strings.push(string);
        }
        let status = if self.ceiling_hit {
            GenerationStatus::Partial
        } else {
            GenerationStatus::Complete
        };
        Generation { strings, status }
    }
}

impl Iterator for Language<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.remaining > 0 {
            if self.queue.is_empty() {
                return None;
            }
            if self.expansions_left == 0 {
                self.ceiling_hit = true;
                return None;
            }
            self.expansions_left -= 1;

            let (state, string) = self.queue.pop_front()?;
            for symbol in self.automaton.alphabet() {
                if let Some(next) = self.automaton.transition_for(&state, symbol) {
                    let mut extended = string.clone();
                    extended.push_str(symbol.as_str());
                    self.queue.push_back((next.clone(), extended));
                }
            }

            if self.automaton.is_accepting(&state) {
                self.remaining -= 1;
                return Some(string);
            }
        }
        None
    }
}

/// Eagerly collected generation result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    strings: Vec<String>,
    status: GenerationStatus,
}

impl Generation {
    /// The accepted strings found, shortest first.
    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    /// `true` when the expansion ceiling ended the search before the
    /// requested number of strings was found.
    pub fn is_partial(&self) -> bool {
        self.status == GenerationStatus::Partial
    }
}

/// How a generation run ended.
///
/// `Partial` is an outcome, not an error: the caller may retry with a
/// higher ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationStatus {
    /// The requested number of strings was found, or the language was
    /// exhausted below it.
    Complete,

    /// The expansion ceiling ended the search first.
    Partial,
}

impl Automaton {
    /// Lazily enumerate up to `limit` accepted strings, shortest first,
    /// under the default expansion ceiling.
    ///
    /// Fails closed with the validation report if the definition is
    /// currently invalid.
    pub fn language(&self, limit: usize) -> Result<Language<'_>, ValidationReport> {
        self.language_with_ceiling(limit, DEFAULT_EXPANSION_CEILING)
    }

    /// [`language`](Automaton::language) with an explicit expansion
    /// ceiling.
    pub fn language_with_ceiling(
        &self,
        limit: usize,
        ceiling: usize,
    ) -> Result<Language<'_>, ValidationReport> {
        let report = self.validate();
        if !report.is_valid() {
            return Err(report);
        }
        Ok(Language::new(self, limit, ceiling))
    }

    /// Eagerly collect up to `limit` accepted strings, shortest first.
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
    /// automaton.set_start("q0");
    /// automaton.add_accepting("q1");
    /// automaton.add_transition(Transition::new("q0", "a", "q1"));
    ///
    /// let generation = automaton.generate(5).unwrap();
    /// assert_eq!(generation.strings(), &["a".to_string()]);
    /// assert!(!generation.is_partial());
    /// ```
    pub fn generate(&self, limit: usize) -> Result<Generation, ValidationReport> {
        Ok(self.language(limit)?.into_generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::automaton::Transition;

    fn ends_with_a_automaton() -> Automaton {
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
    fn enumeration_is_shortest_first_and_deterministic() {
        let automaton = ends_with_a_automaton();

        let generation = automaton.generate(7).unwrap();

        assert_eq!(
            generation.strings(),
            &["a", "aa", "ba", "aaa", "aba", "baa", "bba"]
        );
        assert_eq!(generation.status(), GenerationStatus::Complete);
    }

    #[test]
    fn empty_string_is_enumerated_when_start_accepts() {
        let mut automaton = ends_with_a_automaton();
        automaton.add_accepting("q0");

        let strings: Vec<String> = automaton.language(3).unwrap().collect();

        assert_eq!(strings, vec!["", "a", "b"]);
    }

    #[test]
    fn limit_bounds_the_result_count() {
        let automaton = ends_with_a_automaton();

        let generation = automaton.generate(2).unwrap();

        assert_eq!(generation.strings().len(), 2);
        assert_eq!(generation.status(), GenerationStatus::Complete);
    }

    #[test]
    fn finite_language_completes_below_the_limit() {
        let mut automaton = Automaton::new();
        automaton.add_state("q0");
        automaton.add_state("q1");
        automaton.add_symbol("a");
        automaton.set_start("q0");
        automaton.add_accepting("q1");
        automaton.add_transition(Transition::new("q0", "a", "q1"));

        let generation = automaton.generate(10).unwrap();

        assert_eq!(generation.strings(), &["a".to_string()]);
        assert_eq!(generation.status(), GenerationStatus::Complete);
    }

    #[test]
    fn unreachable_accepting_state_reports_partial() {
        let mut automaton = Automaton::new();
        automaton.add_state("q0");
        automaton.add_state("q1");
        automaton.add_symbol("a");
        automaton.set_start("q0");
        automaton.add_accepting("q1");
        automaton.add_transition(Transition::new("q0", "a", "q0"));

        let mut language = automaton.language_with_ceiling(1, 50).unwrap();
        assert!(language.next().is_none());
        assert!(language.ceiling_hit());

        let generation = automaton
            .language_with_ceiling(1, 50)
            .unwrap()
            .into_generation();
        assert!(generation.strings().is_empty());
        assert!(generation.is_partial());
    }

    #[test]
    fn every_generated_string_is_accepted() {
        let automaton = ends_with_a_automaton();

        for string in automaton.language(20).unwrap() {
            let input: Vec<_> = string
                .chars()
                .map(|c| crate::core::Symbol::new(c.to_string()))
                .collect();
            let trace = automaton.evaluate(&input).unwrap();
            assert!(trace.is_accepted(), "generated {string:?} was rejected");
        }
    }

    #[test]
    fn enumeration_restarts_from_scratch() {
        let automaton = ends_with_a_automaton();

        let first: Vec<String> = automaton.language(4).unwrap().collect();
        let second: Vec<String> = automaton.language(4).unwrap().collect();

        assert_eq!(first, second);
    }

    #[test]
    fn invalid_definition_blocks_generation() {
        let mut automaton = ends_with_a_automaton();
        automaton.remove_state(&"q1".into());

        let report = automaton.generate(3).unwrap_err();
        assert!(!report.is_valid());
    }
}

//! JSON file persistence for automaton definitions.
//!
//! Definitions travel as pretty-printed JSON in the
//! [`AutomatonDefinition`] record shape. Loading a live [`Automaton`]
//! is validation-gated: a record that parses but violates the invariants
//! is rejected whole, never half-installed.

use crate::core::Automaton;
use crate::definition::AutomatonDefinition;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub mod error;

pub use error::PersistError;

/// Write a definition record to `path` as pretty-printed JSON.
pub fn save_definition(
    path: impl AsRef<Path>,
    definition: &AutomatonDefinition,
) -> Result<(), PersistError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, definition)?;
    writer.flush()?;
    Ok(())
}

/// Read a definition record from a JSON file, without validating it.
pub fn load_definition(path: impl AsRef<Path>) -> Result<AutomatonDefinition, PersistError> {
    let file = File::open(path)?;
    let definition = serde_json::from_reader(BufReader::new(file))?;
    Ok(definition)
}

/// Save a validated automaton to `path`.
///
/// Fails closed: an automaton that currently fails validation (a missing
/// start state included) is not written.
pub fn save_automaton(path: impl AsRef<Path>, automaton: &Automaton) -> Result<(), PersistError> {
    let report = automaton.validate();
    let definition = match automaton.to_definition() {
        Some(definition) if report.is_valid() => definition,
        _ => return Err(PersistError::Invalid(report)),
    };
    save_definition(path, &definition)
}

/// Load a definition file and build a validated automaton from it.
pub fn load_automaton(path: impl AsRef<Path>) -> Result<Automaton, PersistError> {
    let definition = load_definition(path)?;
    Automaton::from_definition(&definition).map_err(PersistError::Invalid)
}

#![forbid(unsafe_code)]

//! Named, ordered, duplicate-free collection of option descriptors
//!
//! A registry owns the full set of options an application accepts and
//! mediates their creation: every insertion is validated before any state
//! changes, so a failed call leaves the registry exactly as it was. The
//! registry only grows; there is no deletion.

use crate::model::{ChoiceOption, DefinitionError, OptionDescriptor, Value, ValueKind};
use std::collections::HashMap;

/// An application's option definitions, keyed by name in insertion order
///
/// Reads are safe to share once construction is complete; concurrent
/// insertion must be serialized by the caller.
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    name: String,
    description: Option<String>,
    epilog: Option<String>,
    entries: Vec<OptionDescriptor>,
    index: HashMap<String, usize>,
}

impl OptionRegistry {
    /// Creates an empty registry with the given name
    pub fn new(name: impl Into<String>) -> Self {
        OptionRegistry {
            name: name.into(),
            description: None,
            epilog: None,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Sets the description shown at the top of a help screen
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the epilog shown at the bottom of a help screen
    pub fn with_epilog(mut self, epilog: impl Into<String>) -> Self {
        self.epilog = Some(epilog.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn epilog(&self) -> Option<&str> {
        self.epilog.as_deref()
    }

    /// Adds a scalar-kind option and returns the stored descriptor
    ///
    /// Fails with [`DefinitionError::DuplicateName`] if the name is taken
    /// and with [`DefinitionError::ChoicesRequired`] for the choice kind,
    /// which must go through [`OptionRegistry::add_choice_option`]. On
    /// failure nothing is inserted.
    pub fn add_option(
        &mut self,
        name: &str,
        kind: ValueKind,
        default: Option<Value>,
        description: Option<&str>,
    ) -> Result<&OptionDescriptor, DefinitionError> {
        if self.index.contains_key(name) {
            return Err(DefinitionError::DuplicateName(name.to_string()));
        }
        // Build and validate before touching entries or index.
        let descriptor = OptionDescriptor::build(name, kind, default, description)?;
        Ok(self.insert(descriptor))
    }

    /// Adds a choice option and returns the stored descriptor
    ///
    /// The duplicate-name check runs first; the descriptor constructor then
    /// checks the default against `choices`. On failure nothing is inserted.
    pub fn add_choice_option(
        &mut self,
        name: &str,
        choices: Vec<Value>,
        default: Option<Value>,
        description: Option<&str>,
    ) -> Result<&OptionDescriptor, DefinitionError> {
        if self.index.contains_key(name) {
            return Err(DefinitionError::DuplicateName(name.to_string()));
        }
        let descriptor =
            OptionDescriptor::Choice(ChoiceOption::new(name, choices, default, description)?);
        Ok(self.insert(descriptor))
    }

    fn insert(&mut self, descriptor: OptionDescriptor) -> &OptionDescriptor {
        let position = self.entries.len();
        self.index.insert(descriptor.name().to_string(), position);
        self.entries.push(descriptor);
        &self.entries[position]
    }

    /// Number of option definitions registered
    ///
    /// A list-valued option counts once regardless of how many values it may
    /// hold, so this is not the number of arguments an actual command line
    /// might carry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a descriptor by option name
    pub fn get(&self, name: &str) -> Option<&OptionDescriptor> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    /// Iterates over descriptors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.entries.iter()
    }
}

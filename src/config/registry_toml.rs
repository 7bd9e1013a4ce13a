#![forbid(unsafe_code)]

//! TOML registry definitions
//!
//! A registry can be authored as data instead of code:
//!
//! ```toml
//! name = "myapp"
//! description = "frobnicates widgets"
//!
//! [[option]]
//! name = "verbose"
//! kind = "bool"
//! default = true
//! description = "log every step"
//!
//! [[option]]
//! name = "colour"
//! kind = "choice"
//! choices = ["red", "green"]
//! default = "red"
//! ```
//!
//! The serde mirror types here are converted into a real
//! [`OptionRegistry`](crate::registry::OptionRegistry) through its insertion
//! API, so definitions loaded from files pass the same validation as
//! definitions built in code.

use crate::model::{DefinitionError, Value, ValueKind};
use crate::registry::OptionRegistry;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading a registry definition
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The definition file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The definition is not valid TOML or does not match the schema
    #[error("invalid registry definition: {0}")]
    Parse(#[from] toml::de::Error),

    /// The definition violates an insertion-time invariant
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// A non-choice option declares a choice list
    #[error("option '{0}' declares choices but is not a choice option")]
    UnexpectedChoices(String),
}

/// Serde mirror of a registry definition document
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    pub name: String,
    pub description: Option<String>,
    pub epilog: Option<String>,
    #[serde(default, rename = "option")]
    pub options: Vec<OptionConfig>,
}

/// Serde mirror of one `[[option]]` table
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionConfig {
    pub name: String,
    pub kind: ValueKind,
    pub default: Option<Value>,
    pub description: Option<String>,
    pub choices: Option<Vec<Value>>,
}

impl RegistryConfig {
    /// Parses a definition from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a definition file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Validates the definition into a registry
    ///
    /// Options are inserted in document order; the first invalid entry
    /// aborts the conversion.
    pub fn into_registry(self) -> Result<OptionRegistry, ConfigError> {
        let mut registry = OptionRegistry::new(self.name);
        if let Some(description) = self.description {
            registry = registry.with_description(description);
        }
        if let Some(epilog) = self.epilog {
            registry = registry.with_epilog(epilog);
        }

        for option in self.options {
            let description = option.description.as_deref();
            match option.choices {
                Some(choices) if option.kind == ValueKind::Choice => {
                    registry.add_choice_option(
                        &option.name,
                        choices,
                        option.default,
                        description,
                    )?;
                }
                Some(_) => return Err(ConfigError::UnexpectedChoices(option.name)),
                None => {
                    // A choice kind with no choice list fails inside
                    // add_option with ChoicesRequired.
                    registry.add_option(&option.name, option.kind, option.default, description)?;
                }
            }
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OptionDescriptor;

    fn registry_from(text: &str) -> Result<OptionRegistry, ConfigError> {
        RegistryConfig::from_toml_str(text)?.into_registry()
    }

    #[test]
    fn test_minimal_definition() {
        let registry = registry_from("name = \"bare\"\n").unwrap();
        assert_eq!(registry.name(), "bare");
        assert_eq!(registry.description(), None);
        assert_eq!(registry.epilog(), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_full_definition() {
        let text = r#"
name = "myapp"
description = "frobnicates widgets"
epilog = "report bugs upstream"

[[option]]
name = "verbose"
kind = "bool"
default = true
description = "log every step"

[[option]]
name = "colour"
kind = "choice"
choices = ["red", "green"]
default = "red"

[[option]]
name = "ratio"
kind = "float"
default = 0.5

[[option]]
name = "count"
kind = "int"
default = 7

[[option]]
name = "files"
kind = "list"
default = -3

[[option]]
name = "label"
kind = "str"
"#;
        let registry = registry_from(text).unwrap();
        assert_eq!(registry.name(), "myapp");
        assert_eq!(registry.description(), Some("frobnicates widgets"));
        assert_eq!(registry.epilog(), Some("report bugs upstream"));
        assert_eq!(registry.len(), 6);

        let verbose = registry.get("verbose").unwrap();
        assert_eq!(verbose.kind(), ValueKind::Bool);
        assert_eq!(verbose.default(), Some(&Value::Bool(true)));
        assert_eq!(verbose.description(), Some("log every step"));

        match registry.get("colour").unwrap() {
            OptionDescriptor::Choice(choice) => {
                assert_eq!(choice.choices(), vec![Value::from("red"), Value::from("green")]);
                assert_eq!(choice.default(), Some(&Value::from("red")));
            }
            other => panic!("expected a choice option, got {:?}", other),
        }

        match registry.get("files").unwrap() {
            OptionDescriptor::List(list) => {
                assert_eq!(list.size(), Some(&Value::Int(-3)));
            }
            other => panic!("expected a list option, got {:?}", other),
        }

        assert_eq!(registry.get("label").unwrap().default(), None);
    }

    #[test]
    fn test_document_order_is_preserved() {
        let text = r#"
name = "ordered"

[[option]]
name = "zeta"
kind = "str"

[[option]]
name = "alpha"
kind = "str"
"#;
        let registry = registry_from(text).unwrap();
        let names: Vec<&str> = registry.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_unknown_kind_rejected_at_parse() {
        let text = r#"
name = "bad"

[[option]]
name = "wait"
kind = "duration"
"#;
        let err = registry_from(text).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let text = r#"
name = "bad"

[[option]]
name = "count"
kind = "int"

[[option]]
name = "count"
kind = "str"
"#;
        let err = registry_from(text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Definition(DefinitionError::DuplicateName(name)) if name == "count"
        ));
    }

    #[test]
    fn test_choice_default_validated() {
        let text = r#"
name = "bad"

[[option]]
name = "colour"
kind = "choice"
choices = ["red", "green"]
default = "mauve"
"#;
        let err = registry_from(text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Definition(DefinitionError::DefaultNotInChoices { .. })
        ));
    }

    #[test]
    fn test_choices_on_non_choice_kind_rejected() {
        let text = r#"
name = "bad"

[[option]]
name = "count"
kind = "int"
choices = [1, 2, 3]
"#;
        let err = registry_from(text).unwrap_err();
        assert!(matches!(err, ConfigError::UnexpectedChoices(name) if name == "count"));
    }

    #[test]
    fn test_choice_kind_without_choices_rejected() {
        let text = r#"
name = "bad"

[[option]]
name = "colour"
kind = "choice"
"#;
        let err = registry_from(text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Definition(DefinitionError::ChoicesRequired(_))
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let text = r#"
name = "bad"

[[option]]
name = "count"
kind = "int"
weight = 5
"#;
        let err = registry_from(text).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RegistryConfig::load(Path::new("no/such/definition.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

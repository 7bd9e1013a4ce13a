#![forbid(unsafe_code)]

//! Immutable option descriptors, one variant per value kind
//!
//! A descriptor records one option's static metadata: its name, its default,
//! an optional description, and kind-specific constraints. Descriptors never
//! change after construction; all validation happens in the constructors.

use crate::model::value::{Value, ValueKind};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while defining options
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Kind tag outside the closed `1..=6` range
    #[error("unrecognized value kind tag {0}")]
    UnknownKind(u8),

    /// Option name already present in the registry
    #[error("duplicate option name '{0}'")]
    DuplicateName(String),

    /// Choice default missing from the declared choices
    #[error("default value '{default}' is not in {option}'s choices")]
    DefaultNotInChoices { option: String, default: Value },

    /// Choice kind handed to the scalar factory, which cannot supply choices
    #[error("choice option '{0}' requires an explicit choice list")]
    ChoicesRequired(String),
}

/// Element-count constraint carried by a list option
///
/// Decoded from the list option's size field: `0` allows any number of
/// elements, `-N` allows at most `N`, and `N > 0` requires exactly `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Any,
    AtMost(u64),
    Exactly(u64),
}

/// Option holding a single boolean value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoolOption {
    name: String,
    default: Value,
    description: Option<String>,
}

impl BoolOption {
    /// Creates a boolean option; an absent default falls back to `false`
    pub fn new(name: impl Into<String>, default: Option<Value>, description: Option<&str>) -> Self {
        BoolOption {
            name: name.into(),
            default: default.unwrap_or(Value::Bool(false)),
            description: description.map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default(&self) -> &Value {
        &self.default
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Option whose value is drawn from a fixed, ordered set of choices
///
/// The choice list is stored in the order given and is not checked for
/// homogeneity; elements of mixed kinds are accepted as supplied.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceOption {
    name: String,
    choices: Vec<Value>,
    default: Option<Value>,
    description: Option<String>,
}

impl ChoiceOption {
    /// Creates a choice option
    ///
    /// A truthy default must be a member of `choices`; a falsy or absent
    /// default skips the membership check. Use [`ChoiceOption::new_strict`]
    /// to have every supplied default checked.
    pub fn new(
        name: impl Into<String>,
        choices: Vec<Value>,
        default: Option<Value>,
        description: Option<&str>,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        if let Some(default) = &default {
            if default.is_truthy() && !choices.contains(default) {
                return Err(DefinitionError::DefaultNotInChoices {
                    option: name,
                    default: default.clone(),
                });
            }
        }
        Ok(ChoiceOption {
            name,
            choices,
            default,
            description: description.map(str::to_string),
        })
    }

    /// Creates a choice option, rejecting any supplied default that is not
    /// a member of `choices`, truthy or not
    pub fn new_strict(
        name: impl Into<String>,
        choices: Vec<Value>,
        default: Option<Value>,
        description: Option<&str>,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        if let Some(default) = &default {
            if !choices.contains(default) {
                return Err(DefinitionError::DefaultNotInChoices {
                    option: name,
                    default: default.clone(),
                });
            }
        }
        Ok(ChoiceOption {
            name,
            choices,
            default,
            description: description.map(str::to_string),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a fresh copy of the choice list
    ///
    /// Callers receive an owned list each call; the stored sequence is
    /// never handed out.
    pub fn choices(&self) -> Vec<Value> {
        self.choices.clone()
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

// Equality covers name, default, and description; the choice list is not
// compared.
impl PartialEq for ChoiceOption {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.default == other.default
            && self.description == other.description
    }
}

/// Option holding a single float value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatOption {
    name: String,
    default: Option<Value>,
    description: Option<String>,
}

impl FloatOption {
    pub fn new(name: impl Into<String>, default: Option<Value>, description: Option<&str>) -> Self {
        FloatOption {
            name: name.into(),
            default,
            description: description.map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Option holding a single integer value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntOption {
    name: String,
    default: Option<Value>,
    description: Option<String>,
}

impl IntOption {
    pub fn new(name: impl Into<String>, default: Option<Value>, description: Option<&str>) -> Self {
        IntOption {
            name: name.into(),
            default,
            description: description.map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Option holding a sequence of values
///
/// The default field is an element-count constraint, not a value: `0` means
/// any number of elements, `-N` means up to `N` inclusive, and `N > 0` means
/// exactly `N` elements must be supplied. It is never reinterpreted as the
/// option's value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListOption {
    name: String,
    default: Option<Value>,
    description: Option<String>,
}

impl ListOption {
    pub fn new(name: impl Into<String>, size: Option<Value>, description: Option<&str>) -> Self {
        ListOption {
            name: name.into(),
            default: size,
            description: description.map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Alias for [`ListOption::default`]: the element-count constraint
    pub fn size(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Decodes the size field into a typed constraint
    ///
    /// Returns `None` when the size is unset or not an integer.
    pub fn cardinality(&self) -> Option<Cardinality> {
        let size = self.default.as_ref()?.as_int()?;
        Some(match size {
            0 => Cardinality::Any,
            n if n < 0 => Cardinality::AtMost(n.unsigned_abs()),
            n => Cardinality::Exactly(n as u64),
        })
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Option holding a single string value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrOption {
    name: String,
    default: Option<Value>,
    description: Option<String>,
}

impl StrOption {
    pub fn new(name: impl Into<String>, default: Option<Value>, description: Option<&str>) -> Self {
        StrOption {
            name: name.into(),
            default,
            description: description.map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// One option's metadata, tagged by value kind
///
/// Descriptors of different variants never compare equal, even with
/// identical fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OptionDescriptor {
    Bool(BoolOption),
    Choice(ChoiceOption),
    Float(FloatOption),
    Int(IntOption),
    List(ListOption),
    Str(StrOption),
}

impl OptionDescriptor {
    /// Builds the descriptor variant matching `kind`
    ///
    /// Choice options carry an explicit choice list and cannot be built
    /// through this factory; they fail with
    /// [`DefinitionError::ChoicesRequired`]. Use [`ChoiceOption::new`]
    /// instead.
    pub fn build(
        name: impl Into<String>,
        kind: ValueKind,
        default: Option<Value>,
        description: Option<&str>,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        match kind {
            ValueKind::Bool => Ok(OptionDescriptor::Bool(BoolOption::new(
                name,
                default,
                description,
            ))),
            ValueKind::Choice => Err(DefinitionError::ChoicesRequired(name)),
            ValueKind::Float => Ok(OptionDescriptor::Float(FloatOption::new(
                name,
                default,
                description,
            ))),
            ValueKind::Int => Ok(OptionDescriptor::Int(IntOption::new(
                name,
                default,
                description,
            ))),
            ValueKind::List => Ok(OptionDescriptor::List(ListOption::new(
                name,
                default,
                description,
            ))),
            ValueKind::Str => Ok(OptionDescriptor::Str(StrOption::new(
                name,
                default,
                description,
            ))),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            OptionDescriptor::Bool(opt) => opt.name(),
            OptionDescriptor::Choice(opt) => opt.name(),
            OptionDescriptor::Float(opt) => opt.name(),
            OptionDescriptor::Int(opt) => opt.name(),
            OptionDescriptor::List(opt) => opt.name(),
            OptionDescriptor::Str(opt) => opt.name(),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            OptionDescriptor::Bool(_) => ValueKind::Bool,
            OptionDescriptor::Choice(_) => ValueKind::Choice,
            OptionDescriptor::Float(_) => ValueKind::Float,
            OptionDescriptor::Int(_) => ValueKind::Int,
            OptionDescriptor::List(_) => ValueKind::List,
            OptionDescriptor::Str(_) => ValueKind::Str,
        }
    }

    pub fn default(&self) -> Option<&Value> {
        match self {
            OptionDescriptor::Bool(opt) => Some(opt.default()),
            OptionDescriptor::Choice(opt) => opt.default(),
            OptionDescriptor::Float(opt) => opt.default(),
            OptionDescriptor::Int(opt) => opt.default(),
            OptionDescriptor::List(opt) => opt.default(),
            OptionDescriptor::Str(opt) => opt.default(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            OptionDescriptor::Bool(opt) => opt.description(),
            OptionDescriptor::Choice(opt) => opt.description(),
            OptionDescriptor::Float(opt) => opt.description(),
            OptionDescriptor::Int(opt) => opt.description(),
            OptionDescriptor::List(opt) => opt.description(),
            OptionDescriptor::Str(opt) => opt.description(),
        }
    }
}

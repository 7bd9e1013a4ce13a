//! Option metadata model: value vocabulary and typed descriptors

pub mod descriptor;
pub mod value;

pub use descriptor::{
    BoolOption, Cardinality, ChoiceOption, DefinitionError, FloatOption, IntOption, ListOption,
    OptionDescriptor, StrOption,
};
pub use value::{ResolvedOptions, ResolvedValue, Value, ValueKind};

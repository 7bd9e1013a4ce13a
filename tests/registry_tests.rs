//! Integration tests for the descriptor model and registry
//!
//! These exercise the public surface the way a host application would:
//! build descriptors standalone, register the same definitions through the
//! registry, and verify the two agree.

use optmeta::model::{
    BoolOption, ChoiceOption, DefinitionError, FloatOption, IntOption, ListOption,
    OptionDescriptor, StrOption, Value, ValueKind,
};
use optmeta::registry::OptionRegistry;

#[test]
fn test_registry_round_trip_for_every_kind() {
    let mut registry = OptionRegistry::new("myapp")
        .with_description("frivolous")
        .with_epilog("fabulous");

    // booleans
    let bool_opt = BoolOption::new("bO", Some(Value::Bool(true)), Some("I'm small"));
    assert_eq!(bool_opt.name(), "bO");
    assert_eq!(bool_opt.default(), &Value::Bool(true));
    assert_eq!(bool_opt.description(), Some("I'm small"));

    let checked = registry
        .add_option("bO", ValueKind::Bool, Some(Value::Bool(true)), Some("I'm small"))
        .unwrap()
        .clone();
    assert_eq!(registry.len(), 1);
    assert_eq!(checked, OptionDescriptor::Bool(bool_opt));

    // choices
    let choices = vec![Value::from("alpha"), Value::from("beta"), Value::from("gamma")];
    let choice_opt = ChoiceOption::new("cO", choices.clone(), Some(Value::from("beta")), Some("a list"))
        .unwrap();
    assert_eq!(choice_opt.choices(), choices);
    assert_eq!(choice_opt.default(), Some(&Value::from("beta")));

    let checked = registry
        .add_choice_option("cO", choices, Some(Value::from("beta")), Some("a list"))
        .unwrap()
        .clone();
    assert_eq!(registry.len(), 2);
    assert_eq!(checked, OptionDescriptor::Choice(choice_opt));

    // floats
    let float_opt = FloatOption::new("fO", Some(Value::Float(0.25)), Some("bubbly"));
    let checked = registry
        .add_option("fO", ValueKind::Float, Some(Value::Float(0.25)), Some("bubbly"))
        .unwrap()
        .clone();
    assert_eq!(registry.len(), 3);
    assert_eq!(checked, OptionDescriptor::Float(float_opt));

    // ints
    let int_opt = IntOption::new("iO", Some(Value::Int(96)), Some("discrete"));
    let checked = registry
        .add_option("iO", ValueKind::Int, Some(Value::Int(96)), Some("discrete"))
        .unwrap()
        .clone();
    assert_eq!(registry.len(), 4);
    assert_eq!(checked, OptionDescriptor::Int(int_opt));

    // lists
    let list_opt = ListOption::new("lO", Some(Value::Int(-5)), Some("chunky"));
    assert_eq!(list_opt.size(), Some(&Value::Int(-5)));
    let checked = registry
        .add_option("lO", ValueKind::List, Some(Value::Int(-5)), Some("chunky"))
        .unwrap()
        .clone();
    assert_eq!(registry.len(), 5);
    assert_eq!(checked, OptionDescriptor::List(list_opt));

    // strings
    let str_opt = StrOption::new("sO", Some(Value::from("cheerio")), Some("wiggly"));
    let checked = registry
        .add_option("sO", ValueKind::Str, Some(Value::from("cheerio")), Some("wiggly"))
        .unwrap()
        .clone();
    assert_eq!(registry.len(), 6);
    assert_eq!(checked, OptionDescriptor::Str(str_opt));

    // every returned descriptor equals the one found by lookup
    for name in ["bO", "cO", "fO", "iO", "lO", "sO"] {
        assert!(registry.get(name).is_some(), "missing {}", name);
    }
    assert_eq!(registry.get("missing"), None);
}

#[test]
fn test_choice_option_rejects_default_outside_choices() {
    let choices = vec![Value::from("alpha"), Value::from("beta")];
    let err = ChoiceOption::new("bC", choices, Some(Value::from("omega")), Some("a list"))
        .unwrap_err();
    assert!(matches!(err, DefinitionError::DefaultNotInChoices { .. }));
}

#[test]
fn test_duplicate_insert_is_rejected_and_harmless() {
    let mut registry = OptionRegistry::new("myapp");
    registry
        .add_option("bO", ValueKind::Bool, None, None)
        .unwrap();

    let err = registry
        .add_option("bO", ValueKind::Bool, None, None)
        .unwrap_err();
    assert!(matches!(err, DefinitionError::DuplicateName(_)));
    assert_eq!(registry.len(), 1);

    let err = registry
        .add_choice_option("bO", vec![Value::from("x")], None, None)
        .unwrap_err();
    assert!(matches!(err, DefinitionError::DuplicateName(_)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_list_size_is_a_constraint_not_a_value() {
    for size in [0i64, -3, 4] {
        let opt = ListOption::new("lO", Some(Value::Int(size)), None);
        assert_eq!(opt.size(), Some(&Value::Int(size)));
        assert_eq!(opt.default(), opt.size());
    }
}

#[test]
fn test_kind_tag_round_trip_through_registry() {
    // raw tags arriving from outside pass through TryFrom before insertion
    let mut registry = OptionRegistry::new("tagged");

    let kind = ValueKind::try_from(4u8).unwrap();
    registry.add_option("count", kind, None, None).unwrap();
    assert_eq!(registry.get("count").unwrap().kind(), ValueKind::Int);

    let err = ValueKind::try_from(9u8).unwrap_err();
    assert!(matches!(err, DefinitionError::UnknownKind(9)));
    // the registry never saw the bad tag
    assert_eq!(registry.len(), 1);
}

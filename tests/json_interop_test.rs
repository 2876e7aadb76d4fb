use guardrail::{Guard, Value};
use serde_json::json;

// ====== JSON to Value Tests ======

#[test]
fn test_scalars_convert() {
    assert_eq!(Value::from(json!(null)), Value::Nil);
    assert_eq!(Value::from(json!(true)), Value::Boolean(true));
    assert_eq!(Value::from(json!(69)), Value::Number(69.0));
    assert_eq!(Value::from(json!("abc")), Value::String("abc".to_string()));
}

#[test]
fn test_containers_convert_recursively() {
    let value = Value::from(json!({
        "name": "Alice",
        "tags": ["a", "b"],
    }));

    assert_eq!(value.field("name"), &Value::from("Alice"));
    assert_eq!(
        value.field("tags"),
        &Value::array([Value::from("a"), Value::from("b")])
    );
}

#[test]
fn test_parsed_json_validates_directly() {
    let guard = Guard::object()
        .name("User")
        .field("name", Guard::string())
        .field("age", Guard::range(0.0, 150.0))
        .build();

    let document = Value::from(json!({"name": "Alice", "age": 30}));
    assert!(guard.validate(&document).is_success());

    let document = Value::from(json!({"name": "Alice", "age": 200}));
    let result = guard.validate(&document);
    if let stillwater::Validation::Failure(errors) = result {
        assert_eq!(errors.first().path, "User.age");
    } else {
        panic!("expected failure");
    }
}

// ====== Value to JSON Tests ======

#[test]
fn test_round_trip_preserves_json_data() {
    // Numbers travel as f64, so integer inputs come back as floats;
    // serde_json treats 30 and 30.0 as distinct, hence the float here.
    let original = json!({
        "name": "Alice",
        "score": 30.5,
        "active": true,
        "tags": ["a", "b"],
        "meta": null,
    });

    let round_tripped = serde_json::Value::from(Value::from(original.clone()));
    assert_eq!(round_tripped, original);
}

#[test]
fn test_non_finite_numbers_become_null() {
    assert_eq!(
        serde_json::Value::from(Value::from(f64::NAN)),
        json!(null)
    );
    assert_eq!(
        serde_json::Value::from(Value::from(f64::INFINITY)),
        json!(null)
    );
}

#[test]
fn test_nil_maps_to_null() {
    assert_eq!(serde_json::Value::from(Value::Nil), json!(null));
}

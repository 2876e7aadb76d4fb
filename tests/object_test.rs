use guardrail::{Guard, GuardErrors, ValidationResult, Value};
use stillwater::Validation;

fn errors_of(result: ValidationResult) -> GuardErrors {
    match result {
        Validation::Failure(errors) => errors,
        Validation::Success(value) => panic!("expected failure, got success: {:?}", value),
    }
}

// ====== shape Tests ======

#[test]
fn test_object_accepts_matching_table() {
    let guard = Guard::object().name("Foo").field("foo", Guard::string()).build();
    let input = Value::table([("foo", Value::from("bar"))]);

    let result = guard.validate(&input);
    assert!(result.is_success());
}

#[test]
fn test_object_rejects_non_table_with_own_name() {
    let guard = Guard::object().name("Foo").field("foo", Guard::string()).build();
    let errors = errors_of(guard.validate(&Value::from("abc")));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().expected, "Foo");
    // Path equals the type name at top level, so no redundant suffix.
    assert_eq!(errors.first().message, "Expected 'Foo', got: \"abc\"");
}

#[test]
fn test_object_reports_missing_field_at_nested_path() {
    let guard = Guard::object().name("Foo").field("foo", Guard::string()).build();
    let errors = errors_of(guard.validate(&Value::table::<&str, _>([])));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().path, "Foo.foo");
    assert_eq!(errors.first().expected, "string");
    assert_eq!(errors.first().actual, Value::Nil);
    assert_eq!(errors.first().message, "Expected 'string', got: nil (Foo.foo)");
}

#[test]
fn test_anonymous_object_default_name() {
    let guard = Guard::object().field("foo", Guard::string()).build();

    assert_eq!(guard.type_name(), "AnonymousObject");

    let errors = errors_of(guard.validate(&Value::from(1)));
    assert_eq!(errors.first().expected, "AnonymousObject");

    let errors = errors_of(guard.validate(&Value::table::<&str, _>([])));
    assert_eq!(errors.first().path, "AnonymousObject.foo");
}

// ====== aggregation Tests ======

#[test]
fn test_object_accumulates_every_failing_field() {
    let guard = Guard::object()
        .name("User")
        .field("name", Guard::string())
        .field("age", Guard::number())
        .field("admin", Guard::boolean())
        .build();

    let input = Value::table([("name", Value::from(1)), ("admin", Value::from("yes"))]);
    let errors = errors_of(guard.validate(&input));

    // All three failures, in field declaration order.
    let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["User.name", "User.age", "User.admin"]);
}

#[test]
fn test_object_success_needs_zero_field_errors() {
    let guard = Guard::object()
        .name("User")
        .field("name", Guard::string())
        .field("age", Guard::number())
        .build();

    let input = Value::table([
        ("name", Value::from("Alice")),
        ("age", Value::from(30)),
        // Undeclared fields are not validated.
        ("extra", Value::from("ignored")),
    ]);
    assert!(guard.validate(&input).is_success());
}

// ====== nesting Tests ======

#[test]
fn test_nested_object_paths_extend_the_outer_path() {
    let address = Guard::object()
        .name("Address")
        .field("street", Guard::string())
        .build();
    let user = Guard::object()
        .name("User")
        .field("address", address)
        .build();

    let input = Value::table([(
        "address",
        Value::table([("street", Value::from(42))]),
    )]);
    let errors = errors_of(user.validate(&input));

    assert_eq!(errors.len(), 1);
    // The inner object keeps the caller's path instead of renaming to
    // "Address"; only a root invocation renames.
    assert_eq!(errors.first().path, "User.address.street");
}

#[test]
fn test_nested_object_missing_entirely() {
    let address = Guard::object()
        .name("Address")
        .field("street", Guard::string())
        .build();
    let user = Guard::object().name("User").field("address", address).build();

    let errors = errors_of(user.validate(&Value::table::<&str, _>([])));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().path, "User.address");
    assert_eq!(errors.first().expected, "Address");
    assert_eq!(errors.first().actual, Value::Nil);
}

#[test]
fn test_union_typed_field_reports_the_composite_name() {
    let id = Guard::union(vec![Guard::number(), Guard::string()]);
    let guard = Guard::object().name("Ref").field("id", id).build();

    let errors = errors_of(guard.validate(&Value::table([("id", Value::from(true))])));

    assert_eq!(errors.first().path, "Ref.id");
    assert_eq!(errors.first().expected, "number | string");
}

#[test]
fn test_field_name_containing_marker_is_parenthesized_in_path() {
    let guard = Guard::object().name("Ref").field("a|b", Guard::number()).build();

    let errors = errors_of(guard.validate(&Value::table::<&str, _>([])));
    assert_eq!(errors.first().path, "Ref.(a|b)");
}

// ====== explicit path Tests ======

#[test]
fn test_validate_at_keeps_the_caller_path() {
    let guard = Guard::object().name("Foo").field("foo", Guard::string()).build();

    let errors = errors_of(guard.validate_at(&Value::table::<&str, _>([]), "outer"));
    assert_eq!(errors.first().path, "outer.foo");
}

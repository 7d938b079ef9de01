use schema_defaults::{
    ApplyConfig, DefaultMarker, ErrorKind, PathSegment, SchemaNode, SchemaType, apply_default, canonicalize,
};

struct DefaultCase {
    name: &'static str,
    schema: SchemaNode,
    value: &'static str,
    /// `None` means the canonical form equals `value`.
    expected: Option<&'static str>,
}

fn string() -> SchemaNode {
    SchemaNode::typed(SchemaType::String)
}

fn int32() -> SchemaNode {
    SchemaNode::typed(SchemaType::Integer).with_format("int32")
}

fn typed_value() -> SchemaNode {
    SchemaNode::object([("type", string()), ("value", int32())])
}

fn accepted_cases() -> Vec<DefaultCase> {
    vec![
        DefaultCase {
            name: "boolean",
            schema: SchemaNode::typed(SchemaType::Boolean),
            value: "true",
            expected: None,
        },
        DefaultCase {
            name: "quoted string",
            schema: string(),
            value: "foo",
            expected: Some(r#""foo""#),
        },
        DefaultCase {
            name: "array of primitives",
            schema: SchemaNode::array(string()),
            value: r#"["a", "b"]"#,
            expected: Some(r#"["a","b"]"#),
        },
        DefaultCase {
            name: "array of objects",
            schema: SchemaNode::array(typed_value()),
            value: r#"[{"type": "magic", "value": 42}]"#,
            expected: Some(r#"[{"type":"magic","value":42}]"#),
        },
        DefaultCase {
            name: "simple object",
            schema: typed_value(),
            value: r#"{"type":"magic","value":42}"#,
            expected: None,
        },
        DefaultCase {
            name: "complex object",
            schema: SchemaNode::object([
                (
                    "type",
                    SchemaNode::object([("nested", SchemaNode::object([("value", string())]))]),
                ),
                ("value", int32()),
            ]),
            value: r#"{"type": {"nested": {"value": "magic"}}, "value": 42}"#,
            expected: Some(r#"{"type":{"nested":{"value":"magic"}},"value":42}"#),
        },
        DefaultCase {
            name: "arbitrary object",
            schema: SchemaNode::preserve_unknown(),
            value: r#"{"type": "magic", "value": 42}"#,
            expected: Some(r#"{"type":"magic","value":42}"#),
        },
        DefaultCase {
            name: "arbitrary array",
            schema: SchemaNode::preserve_unknown(),
            value: "[1, \"two\", {\"three\": [3.0]}]",
            expected: Some(r#"[1,"two",{"three":[3.0]}]"#),
        },
        DefaultCase {
            name: "number with upper-case exponent",
            schema: SchemaNode::typed(SchemaType::Number),
            value: "1E3",
            expected: None,
        },
        DefaultCase {
            name: "number with lower-case exponent",
            schema: SchemaNode::typed(SchemaType::Number),
            value: " 1e3 ",
            expected: Some("1e3"),
        },
        DefaultCase {
            name: "number with fraction and exponent",
            schema: SchemaNode::typed(SchemaType::Number).with_format("double"),
            value: "1.5E10",
            expected: None,
        },
        DefaultCase {
            name: "arbitrary value with exponents",
            schema: SchemaNode::preserve_unknown(),
            value: r#"{"a": 1E3, "b": [1e3, 1.5E10]}"#,
            expected: Some(r#"{"a":1E3,"b":[1e3,1.5E10]}"#),
        },
        DefaultCase {
            name: "empty array",
            schema: SchemaNode::array(string()),
            value: " [ ] ",
            expected: Some("[]"),
        },
        DefaultCase {
            name: "empty object",
            schema: typed_value(),
            value: "{ }",
            expected: Some("{}"),
        },
        DefaultCase {
            name: "key order follows input",
            schema: typed_value(),
            value: r#"{"value": 1, "type": "x"}"#,
            expected: Some(r#"{"value":1,"type":"x"}"#),
        },
    ]
}

#[test]
fn accepted_defaults_canonicalize() {
    for case in accepted_cases() {
        let mut schema = case.schema;
        let marker = DefaultMarker::new(case.value);
        if let Err(e) = marker.apply_to_schema(&mut schema) {
            panic!("{}: unexpected error {e}", case.name);
        }
        let expected = case.expected.unwrap_or(case.value);
        let actual = schema.default.as_ref().map(|d| d.as_str());
        assert_eq!(actual, Some(expected), "{}", case.name);
    }
}

#[test]
fn canonical_output_is_a_fixed_point() {
    let config = ApplyConfig::default();
    for case in accepted_cases() {
        let once = canonicalize(&case.schema, case.value, &config).unwrap();
        let twice = canonicalize(&case.schema, once.as_str(), &config).unwrap();
        assert_eq!(once, twice, "{}", case.name);
    }
}

#[test]
fn invalid_boolean_is_rejected() {
    let mut schema = SchemaNode::typed(SchemaType::Boolean);
    let err = apply_default(&mut schema, "foo").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidBooleanLiteral("foo".into()));
    assert!(schema.default.is_none());
}

#[test]
fn unknown_property_is_rejected() {
    let mut schema = typed_value();
    let err = apply_default(&mut schema, r#"{"type": "magic", "colour": "red"}"#).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnknownProperty("colour".into()));
    assert!(err.path().is_root());
    assert!(schema.default.is_none());
}

#[test]
fn nested_failure_reports_path() {
    let mut schema = SchemaNode::object([("items", SchemaNode::array(typed_value()))]);
    let raw = r#"{"items": [{"type": "a", "value": 1}, {"type": "b", "value": 1.5}]}"#;
    let err = apply_default(&mut schema, raw).unwrap_err();

    assert!(matches!(err.kind(), ErrorKind::InvalidNumericLiteral { .. }));
    assert_eq!(
        err.path().segments(),
        &[
            PathSegment::Key("items".into()),
            PathSegment::Index(1),
            PathSegment::Key("value".into()),
        ]
    );
    assert_eq!(
        err.to_string(),
        "invalid default at $.items[1].value: invalid integer literal '1.5'"
    );
}

#[test]
fn exponent_is_not_an_integer() {
    let mut schema = int32();
    let err = apply_default(&mut schema, "1E3").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::InvalidNumericLiteral { literal: "1E3".into(), expected: "integer".into() }
    );
}

#[test]
fn null_for_array_is_a_shape_error() {
    let mut schema = SchemaNode::array(string());
    let err = apply_default(&mut schema, "null").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MalformedSequence(_)));
}

#[test]
fn untyped_schema_without_unknown_fields_is_unsupported() {
    let mut schema = SchemaNode::default();
    let err = apply_default(&mut schema, "{}").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnsupportedSchemaKind(_)));
}

#[test]
fn malformed_composites_are_rejected() {
    let mut list = SchemaNode::array(string());
    let err = apply_default(&mut list, r#"["a", "b""#).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MalformedSequence(_)));

    let mut object = typed_value();
    let err = apply_default(&mut object, r#"{"type" "magic"}"#).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MalformedStructure(_)));
}

#[test]
fn defaulted_schema_serializes_with_embedded_json() {
    let mut schema = typed_value();
    apply_default(&mut schema, r#"{"type": "magic", "value": 42}"#).unwrap();
    let doc = serde_json::to_value(&schema).unwrap();
    assert_eq!(doc["default"]["type"], "magic");
    assert_eq!(doc["default"]["value"], 42);
}

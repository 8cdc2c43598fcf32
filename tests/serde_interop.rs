#![cfg(feature = "serde")]

use predicat::{property, Condition, Record, Value};

#[test]
fn record_from_json() {
    let record: Record = serde_json::from_str(
        r#"{"FirstName": "John", "Height": 72, "propNull": null, "active": true}"#,
    )
    .unwrap();
    assert_eq!(record.get("FirstName"), Some(&Value::from("John")));
    assert_eq!(record.get("Height"), Some(&Value::Number(72.0)));
    assert_eq!(record.get("propNull"), Some(&Value::Null));
    assert_eq!(record.get("active"), Some(&Value::Bool(true)));

    assert!(property("Height").lt(73).unwrap().matches(&record));
    assert!(property("propNull").is_null().matches(&record));
}

#[test]
fn value_serializes_untagged() {
    assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
    assert_eq!(serde_json::to_string(&Value::from("x")).unwrap(), r#""x""#);
    assert_eq!(serde_json::to_string(&Value::from(true)).unwrap(), "true");
    assert_eq!(serde_json::to_string(&Value::from(1.5)).unwrap(), "1.5");
}

#[test]
fn condition_as_notation_string() {
    let cond = Condition::all([
        property("age").gt(30).unwrap(),
        !property("status").eq("unemployed"),
    ])
    .unwrap();
    let json = serde_json::to_string(&cond).unwrap();
    assert_eq!(json, r#""(AND[(age^GT^30),(NOT(status^EQ^unemployed))])""#);

    let back: Condition = serde_json::from_str(&json).unwrap();
    assert_eq!(back.to_string(), cond.to_string());
}

#[test]
fn invalid_notation_fails_deserialization() {
    let err = serde_json::from_str::<Condition>(r#""(AND[])""#).unwrap_err();
    assert!(err.to_string().contains("AND requires at least one child"));
    assert!(serde_json::from_str::<Condition>("42").is_err());
}

#[test]
fn word_like_comparands_survive_json() {
    let cond = property("flag").eq(true).or(property("x").eq(Value::Null));
    let json = serde_json::to_string(&cond).unwrap();
    let back: Condition = serde_json::from_str(&json).unwrap();

    for record in [
        Record::new().set("flag", 1),
        Record::new().set("flag", false).set("x", Value::Null),
        Record::new().set("flag", "false").set("x", 0),
    ] {
        assert_eq!(back.evaluate(&record), cond.evaluate(&record));
    }
}

#[test]
fn negative_threshold_refuses_to_serialize() {
    let cond = property("t").gt(-5).unwrap();
    let err = serde_json::to_string(&cond).unwrap_err();
    assert!(err.to_string().contains("(t^GT^-5) has no exact notation"));
}

#[test]
fn fractional_threshold_refuses_to_serialize() {
    let cond = property("ratio").gte(0.5).unwrap();
    assert!(serde_json::to_string(&cond).is_err());
    assert!(serde_json::to_string(&property("ratio").gte(1).unwrap()).is_ok());
}

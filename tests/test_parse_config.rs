//! Integration tests for configuration parsing

use datagen_config::{load_config, parse_config, ConfigError, ErrorKind, Violation};

const SYNTAX_PREFIX: &str = "Error in configuration file: object / array / Date badly formatted: \n\n\t\t";
const EMPTY_NAME_PREFIX: &str = "Error in configuration file: \n\t'collection' and 'database' fields can't be empty";
const COUNT_PREFIX: &str = "Error in configuration file: \n\tfor collection";

fn sample() -> Vec<u8> {
    std::fs::read(concat!(env!("CARGO_MANIFEST_DIR"), "/samples/config.json")).unwrap()
}

#[test]
fn test_sample_config() {
    let jobs = parse_config(&sample(), false).unwrap();

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].collection, "users");
    assert_eq!(jobs[1].collection, "orders");
    assert_eq!(jobs[1].count, 5000);
    assert_eq!(jobs[0].content["age"]["type"], "int");
}

#[test]
fn test_invalid_content() {
    let input = br#"[{
        "database": "datagen_it_test",
        "collection": "test",
        "count": 1000,
        "content": { "k": invalid }
        }]"#;

    let err = parse_config(input, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert!(err.to_string().starts_with(SYNTAX_PREFIX), "unexpected message: {}", err);

    match err {
        ConfigError::Syntax { fragment, line, .. } => {
            assert_eq!(line, 5);
            assert!(fragment.contains("\"k\": invalid"));
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_missing_database_field() {
    let input = br#"[{
        "collection": "test",
        "count": 1000,
        "content": {}
        }]"#;

    let err = parse_config(input, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().starts_with(EMPTY_NAME_PREFIX), "unexpected message: {}", err);
}

#[test]
fn test_missing_database_field_ignored() {
    let input = br#"[{
        "collection": "test",
        "count": 1000,
        "content": {}
        }]"#;

    let jobs = parse_config(input, true).unwrap();
    assert_eq!(jobs.len(), 1);
}

#[test]
fn test_count_must_be_positive() {
    let input = br#"[{
        "database": "datagen_it_test",
        "collection": "test",
        "count": 0,
        "content": {}
        }]"#;

    let err = parse_config(input, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().starts_with(COUNT_PREFIX), "unexpected message: {}", err);
    assert!(err.to_string().contains("test"));
}

#[test]
fn test_all_violations_reported_in_order() {
    let input = br#"[
        {"database": "d", "collection": "ok", "count": 10},
        {"database": "d", "collection": "neg", "count": -5},
        {"collection": "nodb", "count": 1},
        {"database": "d", "collection": "zero", "count": 0}
    ]"#;

    let err = parse_config(input, false).unwrap_err();
    let indexes: Vec<usize> = err.violations().iter().map(Violation::index).collect();
    assert_eq!(indexes, vec![1, 2, 3]);

    let message = err.to_string();
    let lines: Vec<&str> = message.split("\n\t").collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Error in configuration file: ");
    assert!(lines[1].starts_with("for collection neg"));
    assert!(lines[2].starts_with("'collection' and 'database' fields can't be empty"));
    assert!(lines[3].starts_with("for collection zero"));
}

#[test]
fn test_parse_is_idempotent() {
    let good = sample();
    assert_eq!(parse_config(&good, false).unwrap(), parse_config(&good, false).unwrap());

    let bad = br#"[{"collection": "c", "count": 0}]"#;
    assert_eq!(
        parse_config(bad, false).unwrap_err().to_string(),
        parse_config(bad, false).unwrap_err().to_string()
    );
}

#[test]
fn test_load_sample_file() {
    let jobs = load_config(concat!(env!("CARGO_MANIFEST_DIR"), "/samples/config.json"), false).unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].indexes.len(), 1);
    assert_eq!(jobs[0].compression_level.as_deref(), Some("snappy"));
}

#[test]
fn test_null_database_treated_as_missing() {
    let input = br#"[{"database": null, "collection": "c", "count": 1}]"#;

    let jobs = parse_config(input, true).unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].database, "");

    let err = parse_config(input, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().starts_with(EMPTY_NAME_PREFIX), "unexpected message: {}", err);
}

#[test]
fn test_null_count_treated_as_missing() {
    let input = br#"[{"database": "d", "collection": "c", "count": null}]"#;

    let err = parse_config(input, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().starts_with(COUNT_PREFIX), "unexpected message: {}", err);
}

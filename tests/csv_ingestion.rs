use employee_report::ingestion::csv::{ingest_csv_from_path, ingest_csv_from_reader};
use employee_report::types::Salary;
use employee_report::IngestionError;

#[test]
fn ingest_csv_from_path_happy_path() {
    let roster = ingest_csv_from_path("tests/fixtures/employees.csv").unwrap();

    assert_eq!(roster.len(), 3);
    let names: Vec<&str> = roster.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(roster.records()[1].age, 25);
    assert_eq!(roster.records()[1].department, "Sales");
    assert_eq!(roster.records()[1].salary, Salary::from_whole(40_000));
}

#[test]
fn ingest_csv_trims_fields() {
    let roster = ingest_csv_from_path("tests/fixtures/padded.csv").unwrap();

    assert_eq!(roster.len(), 4);
    let dana = &roster.records()[0];
    assert_eq!(dana.name, "Dana");
    assert_eq!(dana.age, 52);
    assert_eq!(dana.department, "Ops");
    assert_eq!(dana.salary.to_string(), "61250.75");
    assert_eq!(roster.records()[2].name, "Fay");
}

#[test]
fn header_only_source_yields_empty_roster() {
    let roster = ingest_csv_from_path("tests/fixtures/header_only.csv").unwrap();
    assert!(roster.is_empty());
}

#[test]
fn ingest_csv_errors_on_short_line() {
    let err = ingest_csv_from_path("tests/fixtures/short_line.csv").unwrap_err();
    match &err {
        IngestionError::MalformedRecord { line, .. } => assert_eq!(*line, 3),
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
    assert!(err.to_string().contains("malformed record at line 3"));
}

#[test]
fn ingest_csv_errors_on_missing_file() {
    let err = ingest_csv_from_path("tests/fixtures/does_not_exist.csv").unwrap_err();
    assert!(matches!(err, IngestionError::SourceUnavailable { .. }));
    assert!(err.to_string().contains("does_not_exist.csv"));
}

#[test]
fn ingest_csv_errors_on_type_parse() {
    let input = "name,age,department,salary\nAda,thirty,Eng,98.5\n";
    let err = ingest_csv_from_reader(input.as_bytes()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 2"), "{msg}");
    assert!(msg.contains("invalid age 'thirty'"), "{msg}");
}

#[test]
fn ingest_csv_errors_on_invalid_utf8() {
    let mut input = b"name,age,department,salary\nAda,30,".to_vec();
    input.extend_from_slice(&[0xff, 0xfe]);
    input.extend_from_slice(b",98.5\n");
    let err = ingest_csv_from_reader(input.as_slice()).unwrap_err();
    assert!(matches!(err, IngestionError::MalformedRecord { line: 2, .. }));
}

#[test]
fn ingest_csv_keeps_high_precision_salaries() {
    let roster = ingest_csv_from_path("tests/fixtures/high_precision.csv").unwrap();

    let salaries: Vec<String> = roster.iter().map(|e| e.salary.to_string()).collect();
    assert_eq!(salaries, vec!["50000.12345", "40000.000001", "50000.123449"]);
    assert!(roster.records()[0].salary > roster.records()[2].salary);
}

#[test]
fn ingest_csv_errors_on_blank_line() {
    let err = ingest_csv_from_path("tests/fixtures/blank_line.csv").unwrap_err();
    match &err {
        IngestionError::MalformedRecord { line, message } => {
            assert_eq!(*line, 3);
            assert_eq!(message, "blank line");
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn ingest_csv_errors_on_whitespace_only_line() {
    let err = ingest_csv_from_path("tests/fixtures/whitespace_line.csv").unwrap_err();
    assert!(matches!(err, IngestionError::MalformedRecord { line: 3, .. }));
    assert!(err.to_string().contains("blank line"));
}

#[test]
fn ingest_csv_keeps_quotes_as_field_content() {
    let roster = ingest_csv_from_path("tests/fixtures/quoted_fields.csv").unwrap();

    assert_eq!(roster.records()[0].name, "\"Alice\"");
    assert_eq!(roster.records()[1].department, "\"Sales\"");
}

#[test]
fn ingest_csv_splits_on_commas_inside_quotes() {
    let err = ingest_csv_from_path("tests/fixtures/quoted_comma.csv").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("malformed record at line 3"), "{msg}");
    assert!(msg.contains("invalid age 'John\"'"), "{msg}");
}

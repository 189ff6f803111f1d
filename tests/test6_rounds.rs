mod common;

use std::collections::HashMap;

use rusty_golf_stats::controller::rounds::{find_course, parse_round_form, validate_round};
use rusty_golf_stats::mvu::error::AppError;

fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn base_form(extra: &[(&str, &str)]) -> HashMap<String, String> {
    let mut pairs = vec![("course", "Pebble Creek"), ("tee", "Blue"), ("notes", " windy ")];
    pairs.extend_from_slice(extra);
    form(&pairs)
}

fn validation_message(result: Result<impl std::fmt::Debug, AppError>) -> String {
    match result {
        Err(AppError::Validation(msg)) => msg,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn parses_rows_and_drops_blank_ones() -> Result<(), AppError> {
    let parsed = parse_round_form(&base_form(&[
        ("strokes_2", "3"),
        ("putts_2", "1"),
        ("gir_2", "on"),
        ("strokes_1", "5"),
        ("putts_1", "2"),
        ("penalties_1", "1"),
        ("fairway_1", "on"),
        ("strokes_3", ""),
        ("putts_3", " "),
        ("unrelated_4", "9"),
    ]))?;
    assert_eq!(parsed.course, "Pebble Creek");
    assert_eq!(parsed.notes, "windy");
    let numbers: Vec<u32> = parsed.holes.iter().map(|(n, _)| *n).collect();
    assert_eq!(numbers, vec![1, 2]);
    let first = parsed.hole(1).expect("hole 1");
    assert!(first.fairway_hit);
    assert!(!first.green_in_regulation);
    assert!(parsed.hole(2).expect("hole 2").green_in_regulation);
    Ok(())
}

#[test]
fn valid_round_builds_payload() -> Result<(), AppError> {
    let courses = common::sample_courses();
    let parsed = parse_round_form(&base_form(&[
        ("strokes_1", "5"),
        ("putts_1", "2"),
        ("penalties_1", "1"),
        ("fairway_1", "on"),
        ("strokes_2", "3"),
    ]))?;
    let submission = validate_round(&parsed, &courses)?;
    assert_eq!(submission.course_id, 7);
    assert_eq!(submission.tee_name, "Blue");
    assert_eq!(submission.notes, "windy");
    assert_eq!(submission.hole_scores.len(), 2);
    assert_eq!(submission.hole_scores[0].penalties, 1);
    assert!(submission.hole_scores[0].fairway_hit);
    assert_eq!(submission.hole_scores[1].putts, 0);

    let body = serde_json::to_value(&submission).map_err(AppError::from)?;
    assert_eq!(body["hole_scores"][0]["hole_number"], 1);
    assert!(body.get("tee_id").is_none());
    Ok(())
}

#[test]
fn unknown_course_and_tee_are_rejected() -> Result<(), AppError> {
    let courses = common::sample_courses();
    let mut parsed = parse_round_form(&base_form(&[("strokes_1", "4")]))?;

    parsed.course = "Pebble".to_string();
    assert!(validation_message(validate_round(&parsed, &courses)).contains("not found"));

    parsed.course = "pebble creek".to_string();
    parsed.tee = "Gold".to_string();
    assert!(validation_message(validate_round(&parsed, &courses)).contains("Tee 'Gold'"));
    Ok(())
}

#[test]
fn hole_values_are_checked() -> Result<(), AppError> {
    let courses = common::sample_courses();
    let cases: [(&[(&str, &str)], &str); 5] = [
        (&[], "at least one hole"),
        (&[("strokes_1", "0")], "strokes must be 1 or more"),
        (&[("strokes_1", "four")], "strokes must be 1 or more"),
        (&[("strokes_1", "4"), ("putts_1", "x")], "putts must be a whole number"),
        (&[("strokes_10", "4")], "Hole 10 is not on this tee"),
    ];
    for (extra, expected) in cases {
        let parsed = parse_round_form(&base_form(extra))?;
        let msg = validation_message(validate_round(&parsed, &courses));
        assert!(msg.contains(expected), "{msg:?} should mention {expected:?}");
    }
    Ok(())
}

#[test]
fn course_lookup_is_exact() {
    let courses = common::sample_courses();
    assert!(find_course(&courses, " PEBBLE CREEK ").is_some());
    assert!(find_course(&courses, "Pebble").is_none());
}

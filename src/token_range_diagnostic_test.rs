//! Tests for per-range diagnostics.

use crate::diagnostic::Diagnostic;
use crate::status::Status;
use crate::token::TokenRange;
use crate::token_range_diagnostic::TokenRangeDiagnostic;
use proptest::prelude::*;
use serde_json::json;
use std::cmp::Ordering;

fn range(start: i64, end: i64) -> TokenRange {
  TokenRange::new(start, end)
}

#[test]
fn test_missing_replica_is_unavailable() {
  let d = TokenRangeDiagnostic::new(range(0, 10), 3, 2);
  assert!(!d.is_available());
  assert_eq!(d.status(), Status::Unavailable);
}

#[test]
fn test_exact_replicas_is_available() {
  let d = TokenRangeDiagnostic::new(range(0, 10), 3, 3);
  assert!(d.is_available());
  assert_eq!(d.status(), Status::Available);
}

#[test]
fn test_zero_required_is_available() {
  let d = TokenRangeDiagnostic::new(range(0, 10), 0, 0);
  assert!(d.is_available());
  assert_eq!(d.status(), Status::Available);
}

#[test]
fn test_extra_replicas_is_available() {
  let d = TokenRangeDiagnostic::new(range(0, 10), 2, 5);
  assert_eq!(d.status(), Status::Available);
}

#[test]
fn test_details_keys() {
  let d = TokenRangeDiagnostic::new(range(0, 10), 2, 1);
  let details = d.details();
  assert_eq!(details.len(), 2);
  assert_eq!(details["required"], json!(2));
  assert_eq!(details["alive"], json!(1));
}

#[test]
fn test_ordering_ignores_counts() {
  let a = TokenRangeDiagnostic::new(range(0, 10), 3, 0);
  let b = TokenRangeDiagnostic::new(range(0, 10), 1, 1);
  assert_eq!(a.cmp(&b), Ordering::Equal);
  assert_eq!(a, b);

  let c = TokenRangeDiagnostic::new(range(10, 20), 3, 0);
  assert!(a < c);
}

#[test]
fn test_serializes_with_status() {
  let d = TokenRangeDiagnostic::new(range(-5, 5), 2, 1);
  let value = serde_json::to_value(&d).unwrap();
  assert_eq!(
    value,
    json!({
      "range": { "start": -5, "end": 5 },
      "status": "UNAVAILABLE",
      "required": 2,
      "alive": 1,
    })
  );
}

proptest! {
  #[test]
  fn availability_matches_counts(required in 0u32..1000, alive in 0u32..1000) {
    let d = TokenRangeDiagnostic::new(range(0, 1), required, alive);
    prop_assert_eq!(d.is_available(), alive >= required);
    let expected = if alive >= required { Status::Available } else { Status::Unavailable };
    prop_assert_eq!(d.status(), expected);
  }
}

//! Availability of a single token range.
//!
//! A range is available when at least as many replicas are alive as the
//! consistency level requires. Counts are computed by whoever inspected the
//! topology (see [`crate::generator`]); this type only derives the verdict.

use crate::diagnostic::{Details, Diagnostic};
use crate::status::Status;
use crate::token::TokenRange;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::json;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Diagnostic for one [`TokenRange`]: required vs. alive replicas.
///
/// Equality, hashing and ordering look at the token range only, so two
/// diagnostics over the same range are the same element of a ring's
/// sorted set even if their counts differ.
#[derive(Clone, Debug)]
pub struct TokenRangeDiagnostic {
  token_range: TokenRange,
  required_replicas: u32,
  alive_replicas: u32,
}

impl TokenRangeDiagnostic {
  /// Creates the diagnostic for `token_range`.
  pub fn new(token_range: TokenRange, required_replicas: u32, alive_replicas: u32) -> Self {
    Self {
      token_range,
      required_replicas,
      alive_replicas,
    }
  }

  /// Returns the token range this diagnostic refers to.
  pub fn token_range(&self) -> &TokenRange {
    &self.token_range
  }

  /// How many replicas must be alive for the range to be available.
  pub fn required_replicas(&self) -> u32 {
    self.required_replicas
  }

  /// How many replicas are effectively alive.
  pub fn alive_replicas(&self) -> u32 {
    self.alive_replicas
  }

  /// Whether the consistency level is achievable on this range.
  ///
  /// ```rust
  /// use ringcheck::token::TokenRange;
  /// use ringcheck::token_range_diagnostic::TokenRangeDiagnostic;
  ///
  /// let range = TokenRange::new(0, 100);
  /// assert!(!TokenRangeDiagnostic::new(range, 3, 2).is_available());
  /// assert!(TokenRangeDiagnostic::new(range, 3, 3).is_available());
  /// ```
  pub fn is_available(&self) -> bool {
    self.alive_replicas >= self.required_replicas
  }
}

impl Diagnostic for TokenRangeDiagnostic {
  fn status(&self) -> Status {
    if self.is_available() {
      Status::Available
    } else {
      Status::Unavailable
    }
  }

  fn details(&self) -> Details {
    let mut details = Details::new();
    details.insert("required".to_string(), json!(self.required_replicas));
    details.insert("alive".to_string(), json!(self.alive_replicas));
    details
  }
}

impl PartialEq for TokenRangeDiagnostic {
  fn eq(&self, other: &Self) -> bool {
    self.token_range == other.token_range
  }
}

impl Eq for TokenRangeDiagnostic {}

impl Hash for TokenRangeDiagnostic {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.token_range.hash(state);
  }
}

impl PartialOrd for TokenRangeDiagnostic {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for TokenRangeDiagnostic {
  fn cmp(&self, other: &Self) -> Ordering {
    self.token_range.cmp(&other.token_range)
  }
}

impl Serialize for TokenRangeDiagnostic {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut s = serializer.serialize_struct("TokenRangeDiagnostic", 4)?;
    s.serialize_field("range", &self.token_range)?;
    s.serialize_field("status", &self.status())?;
    s.serialize_field("required", &self.required_replicas)?;
    s.serialize_field("alive", &self.alive_replicas)?;
    s.end()
  }
}

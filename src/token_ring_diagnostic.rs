//! Ring-wide availability for a keyspace at a consistency level.
//!
//! A [`TokenRingDiagnostic`] holds one [`TokenRangeDiagnostic`] per token
//! range and derives the ring status by merging theirs. The ring is
//! available when every range is; a ring without ranges reports
//! [`Status::Unknown`], which callers should treat as "no data" rather than
//! healthy.
//!
//! The ranges are expected to tile the ring. That is the responsibility of
//! whoever built them and is not checked here.

use crate::consistency::ConsistencyLevel;
use crate::diagnostic::{Details, Diagnostic};
use crate::error::{DiagnosticError, Result};
use crate::keyspace::KeyspaceMetadata;
use crate::status::Status;
use crate::token_range_diagnostic::TokenRangeDiagnostic;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::json;
use std::collections::BTreeSet;
use tracing::debug;

/// Availability of every token range of a keyspace.
#[derive(Clone, Debug)]
pub struct TokenRingDiagnostic {
  keyspace: KeyspaceMetadata,
  consistency_level: ConsistencyLevel,
  datacenter: Option<String>,
  token_range_diagnostics: BTreeSet<TokenRangeDiagnostic>,
}

impl TokenRingDiagnostic {
  /// Builds a ring diagnostic from already computed range diagnostics.
  ///
  /// Ranges may be supplied in any order; they are kept sorted by token range.
  ///
  /// # Errors
  ///
  /// - [`DiagnosticError::InvalidArgument`] if `datacenter` is present for a
  ///   level that is not datacenter-local, or missing (or blank) for one that is.
  /// - [`DiagnosticError::DuplicateTokenRange`] if two diagnostics share a range.
  pub fn new<I>(
    keyspace: KeyspaceMetadata,
    consistency_level: ConsistencyLevel,
    datacenter: Option<String>,
    token_range_diagnostics: I,
  ) -> Result<Self>
  where
    I: IntoIterator<Item = TokenRangeDiagnostic>,
  {
    consistency_level.check_datacenter(datacenter.as_deref())?;

    let mut ranges = BTreeSet::new();
    for diagnostic in token_range_diagnostics {
      let range = *diagnostic.token_range();
      if !ranges.insert(diagnostic) {
        return Err(DiagnosticError::DuplicateTokenRange(range));
      }
    }

    debug!(
      keyspace = keyspace.name(),
      consistency_level = %consistency_level,
      datacenter = datacenter.as_deref().unwrap_or("-"),
      ranges = ranges.len(),
      "built token ring diagnostic"
    );

    Ok(Self {
      keyspace,
      consistency_level,
      datacenter,
      token_range_diagnostics: ranges,
    })
  }

  /// Returns the keyspace this diagnostic refers to.
  pub fn keyspace(&self) -> &KeyspaceMetadata {
    &self.keyspace
  }

  /// Returns the consistency level the diagnostic was computed for.
  pub fn consistency_level(&self) -> ConsistencyLevel {
    self.consistency_level
  }

  /// For a datacenter-local consistency level, the datacenter whose replicas
  /// were counted. `None` for every other level.
  pub fn datacenter(&self) -> Option<&str> {
    self.datacenter.as_deref()
  }

  /// Per-range diagnostics, in ascending token range order.
  pub fn token_range_diagnostics(&self) -> &BTreeSet<TokenRangeDiagnostic> {
    &self.token_range_diagnostics
  }

  /// Whether every token range is available. False for an empty ring.
  pub fn is_available(&self) -> bool {
    self.status() == Status::Available
  }

  /// Ranges that cannot achieve the consistency level, in ring order.
  pub fn unavailable_ranges(&self) -> impl Iterator<Item = &TokenRangeDiagnostic> {
    self
      .token_range_diagnostics
      .iter()
      .filter(|d| !d.is_available())
  }
}

impl Diagnostic for TokenRingDiagnostic {
  fn status(&self) -> Status {
    Status::merge_all(self.token_range_diagnostics.iter().map(|d| d.status()))
  }

  fn details(&self) -> Details {
    let total = self.token_range_diagnostics.len();
    let unavailable = self.unavailable_ranges().count();
    let mut details = Details::new();
    details.insert("keyspace".to_string(), json!(self.keyspace.name()));
    details.insert(
      "consistency_level".to_string(),
      json!(self.consistency_level.as_str()),
    );
    if let Some(dc) = &self.datacenter {
      details.insert("datacenter".to_string(), json!(dc));
    }
    details.insert("total_ranges".to_string(), json!(total));
    details.insert("available_ranges".to_string(), json!(total - unavailable));
    details.insert("unavailable_ranges".to_string(), json!(unavailable));
    details
  }
}

impl Serialize for TokenRingDiagnostic {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let mut s = serializer.serialize_struct("TokenRingDiagnostic", 5)?;
    s.serialize_field("keyspace", self.keyspace.name())?;
    s.serialize_field("consistency_level", &self.consistency_level)?;
    match &self.datacenter {
      Some(dc) => s.serialize_field("datacenter", dc)?,
      None => s.skip_field("datacenter")?,
    }
    s.serialize_field("status", &self.status())?;
    s.serialize_field("token_ranges", &self.token_range_diagnostics)?;
    s.end()
  }
}

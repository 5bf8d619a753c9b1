//! Options for a diagnostic run.
//!
//! Selects the consistency level to check and, for datacenter-local levels,
//! the datacenter whose replicas count. Deserializable so it can sit inside
//! a larger application config file.

use crate::consistency::ConsistencyLevel;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Options for generating a [`crate::token_ring_diagnostic::TokenRingDiagnostic`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticOptions {
  /// Consistency level to check availability for.
  pub consistency_level: ConsistencyLevel,
  /// Datacenter to count replicas in; required for datacenter-local levels,
  /// forbidden otherwise.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub datacenter: Option<String>,
}

impl Default for DiagnosticOptions {
  fn default() -> Self {
    Self {
      consistency_level: ConsistencyLevel::Quorum,
      datacenter: None,
    }
  }
}

impl DiagnosticOptions {
  /// Options for a consistency level that is not datacenter-local.
  pub fn new(consistency_level: ConsistencyLevel) -> Self {
    Self {
      consistency_level,
      datacenter: None,
    }
  }

  /// Options for a datacenter-local consistency level.
  pub fn local(consistency_level: ConsistencyLevel, datacenter: impl Into<String>) -> Self {
    Self {
      consistency_level,
      datacenter: Some(datacenter.into()),
    }
  }

  /// Validates that a datacenter is set exactly when the level is local.
  pub fn validate(&self) -> Result<()> {
    self.consistency_level.check_datacenter(self.datacenter.as_deref())
  }
}

#[cfg(test)]
mod tests {
  use super::DiagnosticOptions;
  use crate::consistency::ConsistencyLevel;

  #[test]
  fn default_validates() {
    let o = DiagnosticOptions::default();
    assert_eq!(o.consistency_level, ConsistencyLevel::Quorum);
    assert!(o.validate().is_ok());
  }

  #[test]
  fn local_requires_datacenter() {
    let mut o = DiagnosticOptions::new(ConsistencyLevel::LocalQuorum);
    assert!(o.validate().is_err());
    o.datacenter = Some("dc1".to_string());
    assert!(o.validate().is_ok());
  }

  #[test]
  fn global_forbids_datacenter() {
    let o = DiagnosticOptions::local(ConsistencyLevel::All, "dc1");
    assert!(o.validate().is_err());
  }

  #[test]
  fn deserializes_with_defaults() {
    let o: DiagnosticOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(o, DiagnosticOptions::default());

    let o: DiagnosticOptions =
      serde_json::from_str(r#"{"consistency_level":"LOCAL_ONE","datacenter":"dc2"}"#).unwrap();
    assert_eq!(o, DiagnosticOptions::local(ConsistencyLevel::LocalOne, "dc2"));
    assert!(o.validate().is_ok());
  }
}

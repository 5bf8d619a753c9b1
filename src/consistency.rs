//! Consistency levels and the replica counts they require.

use crate::error::{DiagnosticError, Result};
use crate::keyspace::ReplicationStrategy;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// How many replicas must take part in an operation for it to succeed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsistencyLevel {
  /// Any node, hints included.
  Any,
  /// One replica.
  One,
  /// Two replicas.
  Two,
  /// Three replicas.
  Three,
  /// A majority of all replicas.
  Quorum,
  /// Every replica.
  All,
  /// One replica in the local datacenter.
  LocalOne,
  /// A majority of the replicas in the local datacenter.
  LocalQuorum,
  /// A majority of the replicas in each datacenter.
  EachQuorum,
  /// Paxos majority of all replicas.
  Serial,
  /// Paxos majority of the replicas in the local datacenter.
  LocalSerial,
}

impl ConsistencyLevel {
  /// Every level, in protocol order.
  pub const ALL_LEVELS: [ConsistencyLevel; 11] = [
    ConsistencyLevel::Any,
    ConsistencyLevel::One,
    ConsistencyLevel::Two,
    ConsistencyLevel::Three,
    ConsistencyLevel::Quorum,
    ConsistencyLevel::All,
    ConsistencyLevel::LocalOne,
    ConsistencyLevel::LocalQuorum,
    ConsistencyLevel::EachQuorum,
    ConsistencyLevel::Serial,
    ConsistencyLevel::LocalSerial,
  ];

  /// Whether the level only considers replicas of a single datacenter.
  pub fn is_dc_local(&self) -> bool {
    matches!(
      self,
      ConsistencyLevel::LocalOne | ConsistencyLevel::LocalQuorum | ConsistencyLevel::LocalSerial
    )
  }

  /// Whether the level is used for lightweight transactions.
  pub fn is_serial(&self) -> bool {
    matches!(self, ConsistencyLevel::Serial | ConsistencyLevel::LocalSerial)
  }

  /// Returns the upper-case protocol name.
  pub fn as_str(&self) -> &'static str {
    match self {
      ConsistencyLevel::Any => "ANY",
      ConsistencyLevel::One => "ONE",
      ConsistencyLevel::Two => "TWO",
      ConsistencyLevel::Three => "THREE",
      ConsistencyLevel::Quorum => "QUORUM",
      ConsistencyLevel::All => "ALL",
      ConsistencyLevel::LocalOne => "LOCAL_ONE",
      ConsistencyLevel::LocalQuorum => "LOCAL_QUORUM",
      ConsistencyLevel::EachQuorum => "EACH_QUORUM",
      ConsistencyLevel::Serial => "SERIAL",
      ConsistencyLevel::LocalSerial => "LOCAL_SERIAL",
    }
  }

  /// Number of replicas that must be alive on a token range for this level
  /// to be achievable.
  ///
  /// `datacenter` is only consulted for datacenter-local levels, where it
  /// selects the replication factor the quorum is computed over.
  ///
  /// ```rust
  /// use ringcheck::consistency::ConsistencyLevel;
  /// use ringcheck::keyspace::ReplicationStrategy;
  ///
  /// let simple = ReplicationStrategy::simple(3);
  /// assert_eq!(ConsistencyLevel::Quorum.required_replicas("ks", &simple, None).unwrap(), 2);
  /// assert_eq!(ConsistencyLevel::All.required_replicas("ks", &simple, None).unwrap(), 3);
  /// ```
  pub fn required_replicas(
    &self,
    keyspace: &str,
    strategy: &ReplicationStrategy,
    datacenter: Option<&str>,
  ) -> Result<u32> {
    let required = match self {
      ConsistencyLevel::Any | ConsistencyLevel::One => 1,
      ConsistencyLevel::Two => 2,
      ConsistencyLevel::Three => 3,
      ConsistencyLevel::Quorum | ConsistencyLevel::Serial => {
        quorum(total_replicas(keyspace, strategy)?)
      }
      ConsistencyLevel::All => total_replicas(keyspace, strategy)?,
      ConsistencyLevel::LocalOne => {
        local_replicas(self, keyspace, strategy, datacenter)?;
        1
      }
      ConsistencyLevel::LocalQuorum | ConsistencyLevel::LocalSerial => {
        quorum(local_replicas(self, keyspace, strategy, datacenter)?)
      }
      ConsistencyLevel::EachQuorum => {
        return Err(DiagnosticError::UnsupportedConsistencyLevel(*self));
      }
    };
    Ok(required)
  }

  /// Checks that a datacenter is given exactly when the level is
  /// datacenter-local, and that it is not blank.
  pub fn check_datacenter(&self, datacenter: Option<&str>) -> Result<()> {
    match (self.is_dc_local(), datacenter) {
      (true, None) => Err(DiagnosticError::InvalidArgument(format!(
        "consistency level {} is datacenter-local but no datacenter was given",
        self
      ))),
      (true, Some(dc)) if dc.trim().is_empty() => Err(DiagnosticError::InvalidArgument(
        "datacenter must not be blank".to_string(),
      )),
      (false, Some(dc)) => Err(DiagnosticError::InvalidArgument(format!(
        "datacenter {} given for non-local consistency level {}",
        dc, self
      ))),
      _ => Ok(()),
    }
  }
}

fn quorum(replicas: u32) -> u32 {
  replicas / 2 + 1
}

fn total_replicas(keyspace: &str, strategy: &ReplicationStrategy) -> Result<u32> {
  strategy.total_replicas().ok_or_else(|| {
    DiagnosticError::InvalidArgument(format!(
      "replication factors of keyspace {} overflow a replica count",
      keyspace
    ))
  })
}

/// Replication factor of the datacenter a local level is scoped to.
fn local_replicas(
  level: &ConsistencyLevel,
  keyspace: &str,
  strategy: &ReplicationStrategy,
  datacenter: Option<&str>,
) -> Result<u32> {
  let dc = datacenter
    .ok_or_else(|| DiagnosticError::InvalidArgument(format!("{} requires a datacenter", level)))?;
  strategy
    .replicas_in(dc)
    .ok_or_else(|| DiagnosticError::UnknownDatacenter {
      keyspace: keyspace.to_string(),
      datacenter: dc.to_string(),
    })
}

impl Display for ConsistencyLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ConsistencyLevel {
  type Err = DiagnosticError;

  fn from_str(s: &str) -> Result<Self> {
    let wanted = s.trim().to_ascii_uppercase();
    ConsistencyLevel::ALL_LEVELS
      .iter()
      .copied()
      .find(|level| level.as_str() == wanted)
      .ok_or_else(|| DiagnosticError::InvalidConsistencyLevel(s.to_string()))
  }
}

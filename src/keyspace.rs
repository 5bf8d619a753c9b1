//! Keyspace descriptor and replication settings.
//!
//! Only the parts the diagnostics need: a name, and enough of the
//! replication strategy to compute replica counts per datacenter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a keyspace places its replicas.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum ReplicationStrategy {
  /// Same replication factor across the whole cluster, datacenters ignored.
  #[serde(rename = "SimpleStrategy")]
  Simple {
    /// Replicas per token range.
    replication_factor: u32,
  },
  /// Replication factor set per datacenter.
  #[serde(rename = "NetworkTopologyStrategy")]
  NetworkTopology {
    /// Replicas per token range in each datacenter.
    datacenters: BTreeMap<String, u32>,
  },
}

impl ReplicationStrategy {
  /// Creates a `SimpleStrategy` with the given factor.
  pub fn simple(replication_factor: u32) -> Self {
    ReplicationStrategy::Simple { replication_factor }
  }

  /// Creates a `NetworkTopologyStrategy` from `(datacenter, factor)` pairs.
  pub fn network_topology<I, K>(datacenters: I) -> Self
  where
    I: IntoIterator<Item = (K, u32)>,
    K: Into<String>,
  {
    ReplicationStrategy::NetworkTopology {
      datacenters: datacenters
        .into_iter()
        .map(|(dc, rf)| (dc.into(), rf))
        .collect(),
    }
  }

  /// Replicas per token range, summed over every datacenter.
  ///
  /// `None` when the per-datacenter factors do not fit in a `u32`.
  pub fn total_replicas(&self) -> Option<u32> {
    match self {
      ReplicationStrategy::Simple { replication_factor } => Some(*replication_factor),
      ReplicationStrategy::NetworkTopology { datacenters } => datacenters
        .values()
        .try_fold(0u32, |total, rf| total.checked_add(*rf)),
    }
  }

  /// Replicas per token range in `datacenter`.
  ///
  /// `SimpleStrategy` does not know about datacenters and reports its single
  /// factor; `NetworkTopologyStrategy` returns `None` for a datacenter it does
  /// not replicate to.
  pub fn replicas_in(&self, datacenter: &str) -> Option<u32> {
    match self {
      ReplicationStrategy::Simple { replication_factor } => Some(*replication_factor),
      ReplicationStrategy::NetworkTopology { datacenters } => datacenters.get(datacenter).copied(),
    }
  }
}

/// The keyspace a diagnostic is computed for.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KeyspaceMetadata {
  name: String,
  replication: ReplicationStrategy,
}

impl KeyspaceMetadata {
  /// Creates keyspace metadata.
  pub fn new(name: impl Into<String>, replication: ReplicationStrategy) -> Self {
    Self {
      name: name.into(),
      replication,
    }
  }

  /// Returns the keyspace name.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Returns the replication strategy.
  pub fn replication(&self) -> &ReplicationStrategy {
    &self.replication
  }
}

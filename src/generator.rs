//! Builds ring diagnostics from a topology snapshot.
//!
//! The snapshot lists, for every token range, the replicas the keyspace's
//! replication strategy places there, each tagged with its datacenter and
//! whether the node is currently considered up. How that snapshot is obtained
//! (gossip, driver metadata, a test fixture) is up to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use ringcheck::config::DiagnosticOptions;
//! use ringcheck::consistency::ConsistencyLevel;
//! use ringcheck::diagnostic::Diagnostic;
//! use ringcheck::generator::{RangeReplicas, Replica, TokenRingDiagnosticGenerator};
//! use ringcheck::keyspace::{KeyspaceMetadata, ReplicationStrategy};
//! use ringcheck::status::Status;
//! use ringcheck::token::TokenRange;
//!
//! let keyspace = KeyspaceMetadata::new("ks1", ReplicationStrategy::simple(3));
//! let generator =
//!   TokenRingDiagnosticGenerator::new(keyspace, DiagnosticOptions::new(ConsistencyLevel::Quorum))?;
//!
//! let snapshot = vec![RangeReplicas::new(
//!   TokenRange::new(0, 100),
//!   vec![
//!     Replica::new("node1", "dc1", true),
//!     Replica::new("node2", "dc1", true),
//!     Replica::new("node3", "dc1", false),
//!   ],
//! )];
//! let ring = generator.generate(snapshot)?;
//! assert_eq!(ring.status(), Status::Available);
//! # Ok::<(), ringcheck::error::DiagnosticError>(())
//! ```

use crate::config::DiagnosticOptions;
use crate::diagnostic::Diagnostic;
use crate::error::Result;
use crate::keyspace::KeyspaceMetadata;
use crate::status::Status;
use crate::token::TokenRange;
use crate::token_range_diagnostic::TokenRangeDiagnostic;
use crate::token_ring_diagnostic::TokenRingDiagnostic;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

/// A node holding a replica of a token range.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Replica {
  /// Node identifier (host id or address).
  pub node: String,
  /// Datacenter the node belongs to.
  pub datacenter: String,
  /// Whether the node is currently considered up.
  pub alive: bool,
}

impl Replica {
  /// Creates a replica entry.
  pub fn new(node: impl Into<String>, datacenter: impl Into<String>, alive: bool) -> Self {
    Self {
      node: node.into(),
      datacenter: datacenter.into(),
      alive,
    }
  }
}

/// The replicas of one token range.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RangeReplicas {
  /// The token range.
  pub range: TokenRange,
  /// Every replica of the range, alive or not.
  pub replicas: Vec<Replica>,
}

impl RangeReplicas {
  /// Creates a snapshot entry for `range`.
  pub fn new(range: TokenRange, replicas: Vec<Replica>) -> Self {
    Self { range, replicas }
  }
}

/// Computes [`TokenRingDiagnostic`]s for one keyspace and one set of options.
///
/// The required replica count only depends on the keyspace and the
/// consistency level, so it is computed once, at construction.
#[derive(Clone, Debug)]
pub struct TokenRingDiagnosticGenerator {
  keyspace: KeyspaceMetadata,
  options: DiagnosticOptions,
  required_replicas: u32,
}

impl TokenRingDiagnosticGenerator {
  /// Creates a generator.
  ///
  /// # Errors
  ///
  /// Fails if the options are inconsistent, if the keyspace does not
  /// replicate to the requested datacenter, or for `EACH_QUORUM`.
  pub fn new(keyspace: KeyspaceMetadata, options: DiagnosticOptions) -> Result<Self> {
    options.validate()?;
    let required_replicas = options.consistency_level.required_replicas(
      keyspace.name(),
      keyspace.replication(),
      options.datacenter.as_deref(),
    )?;
    debug!(
      keyspace = keyspace.name(),
      consistency_level = %options.consistency_level,
      required_replicas,
      "created token ring diagnostic generator"
    );
    Ok(Self {
      keyspace,
      options,
      required_replicas,
    })
  }

  /// Replicas each range needs for the configured consistency level.
  pub fn required_replicas(&self) -> u32 {
    self.required_replicas
  }

  /// Returns the options this generator was built with.
  pub fn options(&self) -> &DiagnosticOptions {
    &self.options
  }

  /// Counts the live replicas of a range that take part in the consistency
  /// level: all of them, or only the local datacenter's for local levels.
  /// A node listed twice counts once.
  pub fn alive_replicas(&self, replicas: &[Replica]) -> u32 {
    let local_dc = self.options.datacenter.as_deref();
    let alive: BTreeSet<&str> = replicas
      .iter()
      .filter(|r| r.alive)
      .filter(|r| local_dc.is_none_or(|dc| r.datacenter == dc))
      .map(|r| r.node.as_str())
      .collect();
    u32::try_from(alive.len()).unwrap_or(u32::MAX)
  }

  /// Builds the ring diagnostic for a topology snapshot.
  ///
  /// # Errors
  ///
  /// [`crate::error::DiagnosticError::DuplicateTokenRange`] if the snapshot
  /// lists a range twice.
  pub fn generate<I>(&self, snapshot: I) -> Result<TokenRingDiagnostic>
  where
    I: IntoIterator<Item = RangeReplicas>,
  {
    let ranges = snapshot.into_iter().map(|entry| {
      let alive = self.alive_replicas(&entry.replicas);
      let diagnostic = TokenRangeDiagnostic::new(entry.range, self.required_replicas, alive);
      if !diagnostic.is_available() {
        trace!(
          range = %entry.range,
          required = self.required_replicas,
          alive,
          "token range unavailable"
        );
      }
      diagnostic
    });

    let ring = TokenRingDiagnostic::new(
      self.keyspace.clone(),
      self.options.consistency_level,
      self.options.datacenter.clone(),
      ranges,
    )?;

    match ring.status() {
      Status::Available => debug!(keyspace = self.keyspace.name(), "token ring available"),
      Status::Unavailable => warn!(
        keyspace = self.keyspace.name(),
        consistency_level = %self.options.consistency_level,
        unavailable = ring.unavailable_ranges().count(),
        total = ring.token_range_diagnostics().len(),
        "token ring cannot achieve consistency level"
      ),
      Status::Unknown => warn!(
        keyspace = self.keyspace.name(),
        "token ring diagnostic has no token ranges"
      ),
    }

    Ok(ring)
  }
}

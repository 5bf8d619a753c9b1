//! Error type for building diagnostics.
//!
//! Deriving a status never fails; only construction does, when the caller
//! hands over data that breaks a documented precondition.

use crate::consistency::ConsistencyLevel;
use crate::token::TokenRange;
use thiserror::Error;

/// Error type for diagnostic construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticError {
  /// An argument violates a precondition (e.g. datacenter given for a
  /// non-local consistency level).
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
  /// The same token range was supplied twice.
  #[error("duplicate token range {0}")]
  DuplicateTokenRange(TokenRange),
  /// The keyspace does not replicate to the requested datacenter.
  #[error("keyspace {keyspace} has no replicas in datacenter {datacenter}")]
  UnknownDatacenter {
    /// Keyspace name.
    keyspace: String,
    /// Requested datacenter.
    datacenter: String,
  },
  /// The consistency level cannot be reduced to a single replica count.
  #[error("consistency level {0} is not supported for ring diagnostics")]
  UnsupportedConsistencyLevel(ConsistencyLevel),
  /// A consistency level name could not be parsed.
  #[error("unknown consistency level: {0}")]
  InvalidConsistencyLevel(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DiagnosticError>;

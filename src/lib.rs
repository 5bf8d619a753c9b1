//! # ringcheck
//!
//! Token ring availability diagnostics for replicated key-value stores.
//!
//! For a keyspace and a consistency level, ringcheck decides whether each
//! token range has enough live replicas to satisfy the level, and folds those
//! per-range verdicts into one ring-wide [`status::Status`].
//!
//! ## Quick Start
//!
//! ```rust
//! use ringcheck::consistency::ConsistencyLevel;
//! use ringcheck::diagnostic::Diagnostic;
//! use ringcheck::keyspace::{KeyspaceMetadata, ReplicationStrategy};
//! use ringcheck::status::Status;
//! use ringcheck::token::TokenRange;
//! use ringcheck::token_range_diagnostic::TokenRangeDiagnostic;
//! use ringcheck::token_ring_diagnostic::TokenRingDiagnostic;
//!
//! let ring = TokenRingDiagnostic::new(
//!   KeyspaceMetadata::new("ks1", ReplicationStrategy::simple(3)),
//!   ConsistencyLevel::Quorum,
//!   None,
//!   vec![
//!     TokenRangeDiagnostic::new(TokenRange::new(0, 100), 2, 2),
//!     TokenRangeDiagnostic::new(TokenRange::new(100, 200), 2, 1),
//!   ],
//! )?;
//! assert_eq!(ring.status(), Status::Unavailable);
//! # Ok::<(), ringcheck::error::DiagnosticError>(())
//! ```
//!
//! Replica counts usually come from a topology snapshot; see
//! [`generator::TokenRingDiagnosticGenerator`].

#![deny(missing_docs)]

/// Options for a diagnostic run.
pub mod config;
/// Consistency levels and their replica-count formula.
pub mod consistency;
/// The `Diagnostic` capability.
pub mod diagnostic;
/// Error type.
pub mod error;
/// Ring diagnostics from topology snapshots.
pub mod generator;
/// Keyspace metadata and replication strategies.
pub mod keyspace;
/// Health levels and their merge rule.
pub mod status;
/// Tokens and token ranges.
pub mod token;
/// Per-range availability.
pub mod token_range_diagnostic;
/// Ring-wide availability.
pub mod token_ring_diagnostic;

#[cfg(test)]
mod token_range_diagnostic_test;

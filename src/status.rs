//! Health levels reported by diagnostics.
//!
//! [`Status`] is a small join-semilattice: [`Status::Unknown`] is the identity,
//! [`Status::Unavailable`] absorbs everything, and [`Status::merge`] picks the
//! worse of two levels. Ring-wide verdicts are folds of per-range statuses.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Health level of a diagnostic.
///
/// Variants are declared from least to most severe so that the derived
/// [`Ord`] doubles as the merge order: `Unknown < Available < Unavailable`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
  /// No information; only produced by a ring without any token range.
  #[default]
  Unknown,
  /// The consistency level is achievable.
  Available,
  /// The consistency level is not achievable.
  Unavailable,
}

impl Status {
  /// Merges two statuses, keeping the most severe one.
  ///
  /// Commutative and associative, with [`Status::Unknown`] as identity.
  ///
  /// ```rust
  /// use ringcheck::status::Status;
  ///
  /// assert_eq!(Status::Unknown.merge(Status::Available), Status::Available);
  /// assert_eq!(Status::Available.merge(Status::Unavailable), Status::Unavailable);
  /// ```
  #[inline]
  pub fn merge(self, other: Status) -> Status {
    self.max(other)
  }

  /// Folds any number of statuses with [`Status::merge`], starting from
  /// [`Status::Unknown`].
  pub fn merge_all<I>(statuses: I) -> Status
  where
    I: IntoIterator<Item = Status>,
  {
    statuses.into_iter().fold(Status::Unknown, Status::merge)
  }

  /// Returns the upper-case name used in reports.
  pub fn as_str(&self) -> &'static str {
    match self {
      Status::Unknown => "UNKNOWN",
      Status::Available => "AVAILABLE",
      Status::Unavailable => "UNAVAILABLE",
    }
  }
}

impl Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

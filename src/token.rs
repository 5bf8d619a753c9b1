//! Tokens and token ranges on the partitioner's hash ring.
//!
//! Tokens are Murmur3-style signed 64-bit hashes. A [`TokenRange`] covers
//! `(start, end]`: the start token is excluded, the end token included. A range
//! whose start is greater than its end wraps around the ring's minimum token.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A position on the token ring.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(pub i64);

impl Token {
  /// The smallest token, which never belongs to any range.
  pub const MIN: Token = Token(i64::MIN);

  /// Creates a token from its raw value.
  #[inline]
  pub const fn new(value: i64) -> Self {
    Self(value)
  }

  /// Returns the raw value.
  #[inline]
  pub const fn value(self) -> i64 {
    self.0
  }
}

impl From<i64> for Token {
  fn from(value: i64) -> Self {
    Self(value)
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// A contiguous slice of the ring, `(start, end]`.
///
/// Ranges order by start token, then end token. Ranges produced from one
/// ring never overlap, so in practice the start token alone decides.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenRange {
  start: Token,
  end: Token,
}

impl TokenRange {
  /// Creates the range `(start, end]` from raw token values.
  pub fn new(start: i64, end: i64) -> Self {
    Self::between(Token(start), Token(end))
  }

  /// Creates the range `(start, end]`.
  pub fn between(start: Token, end: Token) -> Self {
    Self { start, end }
  }

  /// Returns the exclusive start token.
  pub fn start(&self) -> Token {
    self.start
  }

  /// Returns the inclusive end token.
  pub fn end(&self) -> Token {
    self.end
  }

  /// Whether the range crosses the minimum token.
  pub fn is_wrapped_around(&self) -> bool {
    self.start > self.end && self.end != Token::MIN
  }

  /// Whether the range covers the whole ring (start equals end).
  pub fn is_full_ring(&self) -> bool {
    self.start == self.end
  }

  /// Whether `token` falls inside this range.
  pub fn contains(&self, token: Token) -> bool {
    if self.is_full_ring() {
      return token != Token::MIN;
    }
    if self.start < self.end {
      token > self.start && token <= self.end
    } else if self.end == Token::MIN {
      token > self.start
    } else {
      token > self.start || token <= self.end
    }
  }
}

impl Display for TokenRange {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "]{},{}]", self.start, self.end)
  }
}

//! The capability shared by every diagnostic.

use crate::status::Status;
use std::collections::BTreeMap;

/// Supporting detail fields of a diagnostic, keyed by name.
///
/// Values are plain data meant for reports; a `BTreeMap` keeps rendering
/// deterministic.
pub type Details = BTreeMap<String, serde_json::Value>;

/// A health check result: a [`Status`] plus descriptive details.
///
/// Implementations derive both from their own immutable fields, so calling
/// either method repeatedly, from any thread, yields the same answer.
pub trait Diagnostic {
  /// Returns the health level.
  fn status(&self) -> Status;

  /// Returns supporting detail fields. Empty unless overridden.
  fn details(&self) -> Details {
    Details::new()
  }
}

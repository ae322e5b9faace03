//! # ixbrl-context
//!
//! Context declarations for Inline XBRL (iXBRL) tagged documents.
//!
//! ## What is a context?
//!
//! Tagged financial reports scope every reported fact to a *context*: a named
//! declaration naming the reporting entity, the time period the fact applies
//! to, and optional classification dimensions ("segments"). This crate models
//! that one concept as an immutable value object, [`Context`], and owns the
//! only non-trivial logic around it: lenient date normalization and lossless
//! serialization back to a plain JSON-compatible structure.
//!
//! Document scanning, taxonomy handling and file I/O are collaborators that
//! live elsewhere; they hand this crate already-extracted attribute text and
//! consume its JSON output.
//!
//! ## Key Features
//!
//! - **Never fails**: construction accepts whatever the source declared.
//!   Malformed date text degrades to the trimmed original string instead of
//!   aborting processing of an otherwise-valid document
//! - **Lenient Dates**: `YYYY-MM-DD` attribute text becomes a
//!   [`chrono::NaiveDate`]; anything else is preserved as-is via [`DateValue`]
//! - **Deterministic Output**: entity and segment attributes keep their
//!   insertion order through serialization ([`AttrMap`] wraps `IndexMap`)
//! - **Serde Compatible**: every type implements `Serialize`, and
//!   [`Context::to_json`] produces an aliasing-free `serde_json::Value`
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ixbrl-context = "0.1"
//! ```
//!
//! ### Building and exporting a context
//!
//! ```rust
//! use ixbrl_context::{attrs, Context};
//!
//! let context = Context::new(
//!     "FY2022",
//!     attrs! { "scheme": "http://www.sec.gov/CIK", "identifier": "0000320193" },
//!     Some(vec![attrs! { "dimension": "Region", "value": "EMEA" }]),
//!     None,
//!     Some("2022-01-01"),
//!     Some("2022-12-31"),
//! );
//!
//! // Diagnostic one-liner
//! assert_eq!(
//!     context.to_string(),
//!     "<Context FY2022 [2022-01-01 to 2022-12-31] (with segments)>",
//! );
//!
//! // Plain JSON-compatible export
//! let json = context.to_json();
//! assert_eq!(json["startdate"], "2022-01-01");
//! assert_eq!(json["segments"][0]["value"], "EMEA");
//! ```
//!
//! ### Graceful degradation
//!
//! Date attributes in real filings are untrusted text. Normalization is a
//! total function: it never raises, it either parses or passes through.
//!
//! ```rust
//! use ixbrl_context::{attrs, Context};
//!
//! let context = Context::new(
//!     "c3",
//!     attrs! {},
//!     None,
//!     Some("three months ended"),
//!     None,
//!     None,
//! );
//!
//! assert_eq!(context.instant().unwrap().as_str(), Some("three months ended"));
//! assert_eq!(context.to_json()["instant"], "three months ended");
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API: construction, display and serialization are
//!   all total
//! - `to_json` output never aliases the live object's containers

pub mod context;
pub mod date;
pub mod macros;
pub mod map;

pub use context::Context;
pub use date::DateValue;
pub use map::AttrMap;

use serde_json::Value as JsonValue;

/// Converts a slice of contexts to a JSON array, in order.
///
/// Convenience for document-level exporters that collect every declared
/// context into one structure. Each element is the corresponding context's
/// [`Context::to_json`] output.
///
/// # Examples
///
/// ```rust
/// use ixbrl_context::{attrs, contexts_to_json, Context};
///
/// let contexts = vec![
///     Context::new("c1", attrs! {}, None, Some("2022-01-01"), None, None),
///     Context::new("c2", attrs! {}, None, Some("2022-06-30"), None, None),
/// ];
///
/// let json = contexts_to_json(&contexts);
/// assert_eq!(json[0]["id"], "c1");
/// assert_eq!(json[1]["instant"], "2022-06-30");
/// ```
#[must_use]
pub fn contexts_to_json(contexts: &[Context]) -> JsonValue {
    JsonValue::Array(contexts.iter().map(Context::to_json).collect())
}

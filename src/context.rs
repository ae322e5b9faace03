//! The context declaration itself.
//!
//! A context scopes reported facts to a reporting entity, a time period, and
//! optional dimensional qualifiers ("segments"). Every declared context in a
//! document becomes one [`Context`] value, built once by the scanning layer
//! from already-extracted attribute text and never mutated afterwards.
//!
//! A context is semantically either an *instant* context (a single point in
//! time) or a *duration* context (a start/end interval). Construction does not
//! enforce that split: whatever combination the source declared is preserved,
//! and when both are present the duration wins for display purposes.
//!
//! ## Examples
//!
//! ```rust
//! use ixbrl_context::{attrs, Context};
//!
//! let context = Context::new(
//!     "FY2022",
//!     attrs! { "scheme": "http://www.sec.gov/CIK", "identifier": "0000320193" },
//!     None,
//!     None,
//!     Some("2022-01-01"),
//!     Some("2022-12-31"),
//! );
//!
//! assert!(context.is_duration());
//! assert_eq!(context.to_string(), "<Context FY2022 [2022-01-01 to 2022-12-31]>");
//! assert_eq!(context.to_json()["startdate"], "2022-01-01");
//! ```

use crate::date::DateValue;
use crate::map::AttrMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// One declared context: identity, entity, optional segments, and a time
/// specification.
///
/// Construction never fails: the three date parameters are raw attribute text
/// and are each independently normalized via [`DateValue::parse`], degrading
/// to pass-through text when malformed. All other fields are stored as given.
///
/// Field values are fixed at construction; there are no mutating methods.
/// Equality is structural over all six fields.
///
/// # Examples
///
/// ```rust
/// use ixbrl_context::{attrs, Context};
///
/// let context = Context::new(
///     "c1",
///     attrs! { "scheme": "x", "identifier": "ABC" },
///     None,
///     Some("2022-01-01"),
///     None,
///     None,
/// );
///
/// assert!(context.is_instant());
/// assert_eq!(context.instant().unwrap().to_string(), "2022-01-01");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    id: String,
    entity: AttrMap,
    #[serde(default)]
    segments: Option<Vec<AttrMap>>,
    #[serde(default)]
    instant: Option<DateValue>,
    #[serde(default)]
    startdate: Option<DateValue>,
    #[serde(default)]
    enddate: Option<DateValue>,
}

impl Context {
    /// Builds a context from already-extracted attribute values.
    ///
    /// `instant`, `startdate` and `enddate` are raw, untrusted text; each is
    /// normalized independently. No combination of arguments is rejected —
    /// a context with both an instant and a duration pair is stored as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ixbrl_context::{attrs, Context};
    ///
    /// let context = Context::new(
    ///     "c3",
    ///     attrs! {},
    ///     None,
    ///     Some("not-a-date"),
    ///     None,
    ///     None,
    /// );
    ///
    /// // Malformed date text is kept, not rejected
    /// assert_eq!(context.instant().unwrap().as_str(), Some("not-a-date"));
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        entity: AttrMap,
        segments: Option<Vec<AttrMap>>,
        instant: Option<&str>,
        startdate: Option<&str>,
        enddate: Option<&str>,
    ) -> Self {
        Context {
            id: id.into(),
            entity,
            segments,
            instant: DateValue::parse(instant),
            startdate: DateValue::parse(startdate),
            enddate: DateValue::parse(enddate),
        }
    }

    /// The externally assigned context identifier.
    ///
    /// Uniqueness within the declaring document is the caller's
    /// responsibility; it is not checked here.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The entity information attached to this context.
    #[must_use]
    pub fn entity(&self) -> &AttrMap {
        &self.entity
    }

    /// The dimensional qualifiers attached to this context, if any.
    ///
    /// `None` and an empty list are both possible and reflect exactly what
    /// the caller supplied.
    #[must_use]
    pub fn segments(&self) -> Option<&[AttrMap]> {
        self.segments.as_deref()
    }

    /// The normalized instant date, for point-in-time contexts.
    #[must_use]
    pub fn instant(&self) -> Option<&DateValue> {
        self.instant.as_ref()
    }

    /// The normalized start date, for duration contexts.
    #[must_use]
    pub fn startdate(&self) -> Option<&DateValue> {
        self.startdate.as_ref()
    }

    /// The normalized end date, for duration contexts.
    #[must_use]
    pub fn enddate(&self) -> Option<&DateValue> {
        self.enddate.as_ref()
    }

    /// Returns `true` if an instant date is present.
    #[inline]
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        self.instant.is_some()
    }

    /// Returns `true` if both a start and an end date are present.
    ///
    /// A context can report `true` here and from [`Context::is_instant`] at
    /// the same time; duration takes precedence when displaying.
    #[inline]
    #[must_use]
    pub const fn is_duration(&self) -> bool {
        self.startdate.is_some() && self.enddate.is_some()
    }

    /// Returns `true` if at least one segment is attached.
    #[must_use]
    pub fn has_segments(&self) -> bool {
        self.segments.as_ref().is_some_and(|s| !s.is_empty())
    }

    /// Converts the context to a JSON-compatible value.
    ///
    /// The result is an object with exactly the keys `id`, `entity`,
    /// `segments`, `instant`, `startdate` and `enddate`. Normalized dates
    /// become canonical `YYYY-MM-DD` strings, pass-through text is emitted
    /// unchanged, and absent fields become JSON `null`, so the output contains
    /// only plain maps, sequences, strings and nulls.
    ///
    /// Every container in the output is freshly allocated: mutating the
    /// returned value never affects this context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ixbrl_context::{attrs, Context};
    ///
    /// let context = Context::new(
    ///     "c1",
    ///     attrs! { "scheme": "x", "identifier": "ABC" },
    ///     None,
    ///     Some("2022-01-01"),
    ///     None,
    ///     None,
    /// );
    ///
    /// let json = context.to_json();
    /// assert_eq!(json["id"], "c1");
    /// assert_eq!(json["instant"], "2022-01-01");
    /// assert!(json["segments"].is_null());
    /// ```
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let mut object = serde_json::Map::with_capacity(6);
        object.insert("id".to_string(), JsonValue::String(self.id.clone()));
        object.insert("entity".to_string(), self.entity.to_json());
        let segments = match &self.segments {
            Some(segments) => JsonValue::Array(segments.iter().map(AttrMap::to_json).collect()),
            None => JsonValue::Null,
        };
        object.insert("segments".to_string(), segments);
        object.insert("instant".to_string(), date_json(&self.instant));
        object.insert("startdate".to_string(), date_json(&self.startdate));
        object.insert("enddate".to_string(), date_json(&self.enddate));
        JsonValue::Object(object)
    }
}

fn date_json(value: &Option<DateValue>) -> JsonValue {
    match value {
        Some(value) => JsonValue::String(value.to_string()),
        None => JsonValue::Null,
    }
}

impl fmt::Display for Context {
    /// One-line diagnostic form, e.g.
    /// `<Context FY2022 [2022-01-01 to 2022-12-31] (with segments)>`.
    ///
    /// When both a start and an end date are present the duration form is
    /// rendered even if an instant is also set; otherwise the instant (or the
    /// literal `None`) is shown. Not intended for parsing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Context {} [", self.id)?;
        match (&self.startdate, &self.enddate) {
            (Some(start), Some(end)) => write!(f, "{} to {}", start, end)?,
            _ => match &self.instant {
                Some(instant) => write!(f, "{}", instant)?,
                None => f.write_str("None")?,
            },
        }
        f.write_str("]")?;
        if self.has_segments() {
            f.write_str(" (with segments)")?;
        }
        f.write_str(">")
    }
}

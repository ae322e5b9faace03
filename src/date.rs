//! Lenient date normalization for context declarations.
//!
//! This module provides [`DateValue`], the result of normalizing one raw date
//! attribute. Date text in tagged financial documents is untrusted: most of it
//! is well-formed `YYYY-MM-DD`, but real filings contain empty attributes,
//! free-text periods, and out-of-range days. A malformed date must never abort
//! processing of an otherwise-valid document, so normalization here is a total
//! function: it either produces a calendar date or keeps the trimmed original
//! text, and it never fails.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ixbrl_context::DateValue;
//!
//! // Well-formed input becomes a calendar date
//! let date = DateValue::parse(Some(" 2022-01-01 ")).unwrap();
//! assert_eq!(date.as_date(), NaiveDate::from_ymd_opt(2022, 1, 1));
//!
//! // Malformed input degrades to the trimmed original text
//! let text = DateValue::parse(Some("1 April 2022")).unwrap();
//! assert_eq!(text.as_str(), Some("1 April 2022"));
//!
//! // Absent or empty input stays absent
//! assert_eq!(DateValue::parse(None), None);
//! assert_eq!(DateValue::parse(Some("")), None);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The pattern accepted by normalization: 4-digit year, 2-digit month,
/// 2-digit day.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A normalized date attribute: either a parsed calendar date or the trimmed
/// original text when parsing failed.
///
/// The two variants are exclusive by construction. Absence of a date is
/// modeled by the surrounding `Option`, never by an empty variant here.
///
/// # Examples
///
/// ```rust
/// use ixbrl_context::DateValue;
///
/// let date = DateValue::parse(Some("2022-12-31")).unwrap();
/// assert!(date.is_date());
/// assert_eq!(date.to_string(), "2022-12-31");
///
/// let text = DateValue::parse(Some("2022-02-30")).unwrap();
/// assert!(text.is_text());
/// assert_eq!(text.to_string(), "2022-02-30");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateValue {
    /// A successfully parsed calendar date.
    Date(NaiveDate),
    /// The trimmed original input, kept when parsing failed.
    Text(String),
}

impl DateValue {
    /// Normalizes one raw date attribute.
    ///
    /// Absent or empty input yields `None`. Anything else is trimmed and
    /// parsed as `YYYY-MM-DD`; on failure the trimmed text is kept unchanged.
    /// This never panics and never returns an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ixbrl_context::DateValue;
    ///
    /// assert!(DateValue::parse(Some("2022-01-01")).unwrap().is_date());
    /// assert!(DateValue::parse(Some("not-a-date")).unwrap().is_text());
    /// assert_eq!(DateValue::parse(None), None);
    /// ```
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            None => None,
            Some("") => None,
            Some(raw) => Some(Self::from_raw(raw)),
        }
    }

    /// Normalizes a non-empty raw string.
    ///
    /// Unlike [`DateValue::parse`] this always produces a value: input that is
    /// all whitespace trims down to `Text("")`.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            Ok(date) => DateValue::Date(date),
            Err(_) => DateValue::Text(trimmed.to_string()),
        }
    }

    /// Returns `true` if this is a parsed calendar date.
    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, DateValue::Date(_))
    }

    /// Returns `true` if this is pass-through text.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, DateValue::Text(_))
    }

    /// If this is a parsed date, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use ixbrl_context::DateValue;
    ///
    /// let value = DateValue::parse(Some("2022-06-30")).unwrap();
    /// assert_eq!(value.as_date(), NaiveDate::from_ymd_opt(2022, 6, 30));
    ///
    /// let value = DateValue::parse(Some("H1 2022")).unwrap();
    /// assert_eq!(value.as_date(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DateValue::Date(date) => Some(*date),
            DateValue::Text(_) => None,
        }
    }

    /// If this is pass-through text, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DateValue::Date(_) => None,
            DateValue::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for DateValue {
    /// Canonical text form: `YYYY-MM-DD` for dates, the raw text otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            DateValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        DateValue::Date(date)
    }
}

impl Serialize for DateValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(DateValue::from_raw(&raw))
    }
}

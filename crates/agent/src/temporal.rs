//! Temporal expression extraction
//!
//! Pulls explicit dates, day numbers and day ranges out of an utterance so
//! the temporal rule can filter the raw records. Anything unparseable
//! (inverted range, day number outside the month) counts as "no temporal
//! filter resolved" and resolution falls through to later rules.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap());
static SLASH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})\b").unwrap());
static BARE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)").unwrap());
static RANGE_EN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"from\s*(\d+)\s*to\s*(\d+)").unwrap());
static RANGE_AR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"من\s*يوم\s*(\d+)\s*ل").unwrap());
static DAY_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:day|yom|يوم)\s*(\d+)").unwrap());

/// Words that make a question temporal even without a resolvable number
const TEMPORAL_MARKERS: &[&str] = &[
    "today",
    "yesterday",
    "yom",
    "embareh",
    "يوم",
    "امبارح",
    "اليوم",
];

/// An explicit date mentioned in the utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplicitDate {
    /// Full ISO date
    Iso(NaiveDate),
    /// `D/M` without a year; matched against day and month of record dates
    DayMonth(u32, u32),
}

/// What the extractor found
///
/// At most one of `explicit_date` / `day_range` / `day_number` is set;
/// explicit dates beat ranges, ranges beat single day numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemporalQuery {
    pub explicit_date: Option<ExplicitDate>,
    /// Inclusive day-of-month range
    pub day_range: Option<(u32, u32)>,
    pub day_number: Option<u32>,
    pub has_marker: bool,
}

impl TemporalQuery {
    /// Scan an utterance (expects the lowercased form)
    pub fn extract(lowered: &str) -> Self {
        let has_marker = TEMPORAL_MARKERS.iter().any(|m| lowered.contains(m));

        if let Some(date) = extract_explicit_date(lowered) {
            return Self {
                explicit_date: Some(date),
                has_marker,
                ..Self::default()
            };
        }

        if let Some(range) = extract_range(lowered) {
            return Self {
                day_range: Some(range),
                has_marker,
                ..Self::default()
            };
        }

        let day_number = DAY_NUMBER
            .captures(lowered)
            .and_then(|c| c[1].parse::<u32>().ok())
            .filter(|d| (1..=31).contains(d));

        Self {
            day_number,
            has_marker,
            ..Self::default()
        }
    }

    /// A concrete filtering value was found
    pub fn has_value(&self) -> bool {
        self.explicit_date.is_some() || self.day_range.is_some() || self.day_number.is_some()
    }

    /// The question is about time at all
    pub fn is_temporal(&self) -> bool {
        self.has_value() || self.has_marker
    }
}

fn extract_explicit_date(lowered: &str) -> Option<ExplicitDate> {
    // First match wins; only one explicit date is honored
    if let Some(caps) = ISO_DATE.captures(lowered) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day).map(ExplicitDate::Iso);
    }

    if let Some(caps) = SLASH_DATE.captures(lowered) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        if (1..=31).contains(&day) && (1..=12).contains(&month) {
            return Some(ExplicitDate::DayMonth(day, month));
        }
    }

    None
}

fn extract_range(lowered: &str) -> Option<(u32, u32)> {
    let range = if let Some(caps) = BARE_RANGE
        .captures(lowered)
        .or_else(|| RANGE_EN.captures(lowered))
    {
        let start: u32 = caps[1].parse().ok()?;
        let end: u32 = caps[2].parse().ok()?;
        (start, end)
    } else if let Some(caps) = RANGE_AR.captures(lowered) {
        // "من يوم N ل..." with no parsed end defaults to N + 10
        let start: u32 = caps[1].parse().ok()?;
        (start, start + 10)
    } else {
        return None;
    };

    let (start, end) = range;
    if start >= 1 && start <= end && end <= 31 {
        Some((start, end))
    } else {
        None
    }
}

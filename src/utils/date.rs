//! Date handling for content records.
//!
//! Records carry dates in two shapes: an explicit `published` date
//! (`YYYY-MM-DD`) and a free-text `timeline` ("Jan 2023 – Present").
//! Both are resolved into a single [`DateTimeUtc`] so the ranker compares
//! projects and articles the same way.

use anyhow::{Result, bail};
use regex::Regex;
use std::sync::LazyLock;

/// UTC datetime without timezone complexity.
///
/// Field order matters: the derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        let (hour, minute, second) = if bytes.len() == 20 && bytes[10] == b'T' && bytes[19] == b'Z'
        {
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            (
                parse_u8(&bytes[11..13])?,
                parse_u8(&bytes[14..16])?,
                parse_u8(&bytes[17..19])?,
            )
        } else if bytes.len() == 10 {
            (0, 0, 0)
        } else {
            return None;
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    /// Format as `YYYY-MM-DD`.
    pub fn ymd(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

// ============================================================================
// Timeline
// ============================================================================

/// `Mon YYYY` or a bare `YYYY`, restricted to 1900-2099 so counts such as
/// "5000 users" are not mistaken for years.
static TIMELINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+)?\b((?:19|20)\d{2})\b",
    )
    .unwrap()
});

const MONTH_PREFIXES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Extract the latest date mentioned in a free-text timeline.
///
/// | Timeline                  | Result       |
/// |---------------------------|--------------|
/// | `"2021 – 2023"`           | `2023-01-01` |
/// | `"Jan 2023 – Mar 2024"`   | `2024-03-01` |
/// | `"September 2022 – Now"`  | `2022-09-01` |
/// | `"6 months"`              | `None`       |
pub fn parse_timeline(timeline: &str) -> Option<DateTimeUtc> {
    TIMELINE_RE
        .captures_iter(timeline)
        .filter_map(|caps| {
            let year: u16 = caps.get(2)?.as_str().parse().ok()?;
            let month = caps
                .get(1)
                .and_then(|m| month_index(m.as_str()))
                .unwrap_or(1);
            Some(DateTimeUtc::from_ymd(year, month, 1))
        })
        .max()
}

/// Resolve the recency of a record.
///
/// An explicit `published` date wins when it parses, otherwise the latest
/// date found in `timeline`. `None` sorts below every real date.
pub fn resolve(published: Option<&str>, timeline: Option<&str>) -> Option<DateTimeUtc> {
    published
        .and_then(DateTimeUtc::parse)
        .or_else(|| timeline.and_then(parse_timeline))
}

fn month_index(name: &str) -> Option<u8> {
    let lower = name.to_ascii_lowercase();
    MONTH_PREFIXES
        .iter()
        .position(|prefix| lower.starts_with(prefix))
        .map(|i| i as u8 + 1)
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
    }
    Some(result)
}

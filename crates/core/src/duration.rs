// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Signed SLO durations and their ISO-8601 text form.
//!
//! Durations are exact: the canonical form uses days as the largest unit and
//! keeps sub-second precision, so `P9DT12H` and `PT228H` name the same value
//! but only the former is ever produced. Years and months are rejected on
//! input because their length depends on a calendar anchor.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// A signed span of time, serialized as an ISO-8601 duration string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SloDuration(Duration);

impl SloDuration {
    /// The empty duration, `PT0S`.
    pub fn zero() -> Self {
        SloDuration(Duration::zero())
    }

    /// A whole number of days.
    pub fn days(days: i64) -> Self {
        SloDuration(Duration::days(days))
    }

    /// The time from `start` until `end`; negative if `end` is earlier.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        SloDuration(end.signed_duration_since(start))
    }

    pub fn as_chrono(&self) -> Duration {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Duration::zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Duration::zero()
    }

    /// Whole seconds, truncated toward zero.
    pub fn num_seconds(&self) -> i64 {
        self.0.num_seconds()
    }

    /// The duration expressed in fractional days.
    pub fn total_days(&self) -> f64 {
        let secs = self.0.num_seconds() as f64;
        let nanos = f64::from(self.0.subsec_nanos()) / 1e9;
        (secs + nanos) / SECS_PER_DAY as f64
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -*self
        } else {
            *self
        }
    }
}

impl Default for SloDuration {
    fn default() -> Self {
        SloDuration::zero()
    }
}

impl From<Duration> for SloDuration {
    fn from(d: Duration) -> Self {
        SloDuration(d)
    }
}

impl Add for SloDuration {
    type Output = SloDuration;

    fn add(self, rhs: SloDuration) -> SloDuration {
        SloDuration(self.0 + rhs.0)
    }
}

impl AddAssign for SloDuration {
    fn add_assign(&mut self, rhs: SloDuration) {
        self.0 = self.0 + rhs.0;
    }
}

impl Sub for SloDuration {
    type Output = SloDuration;

    fn sub(self, rhs: SloDuration) -> SloDuration {
        SloDuration(self.0 - rhs.0)
    }
}

impl Neg for SloDuration {
    type Output = SloDuration;

    fn neg(self) -> SloDuration {
        SloDuration(-self.0)
    }
}

impl fmt::Display for SloDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.abs().0;
        let total_secs = abs.num_seconds();
        let nanos = abs.subsec_nanos();

        let days = total_secs / SECS_PER_DAY;
        let hours = (total_secs % SECS_PER_DAY) / SECS_PER_HOUR;
        let minutes = (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let secs = total_secs % SECS_PER_MINUTE;

        let mut out = String::from(if self.is_negative() { "-P" } else { "P" });
        if days > 0 {
            out.push_str(&format!("{days}D"));
        }
        if hours > 0 || minutes > 0 || secs > 0 || nanos > 0 {
            out.push('T');
            if hours > 0 {
                out.push_str(&format!("{hours}H"));
            }
            if minutes > 0 {
                out.push_str(&format!("{minutes}M"));
            }
            if nanos > 0 {
                let frac = format!("{nanos:09}");
                out.push_str(&format!("{secs}.{}S", frac.trim_end_matches('0')));
            } else if secs > 0 {
                out.push_str(&format!("{secs}S"));
            }
        }
        if days == 0 && !out.contains('T') {
            return f.write_str("PT0S");
        }
        f.write_str(&out)
    }
}

impl FromStr for SloDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_iso8601(s.trim())
            .map(SloDuration)
            .ok_or_else(|| Error::InvalidDuration(s.to_string()))
    }
}

impl Serialize for SloDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SloDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Parse `[+-]P[nW][nD][T[nH][nM][n[.f]S]]`.
fn parse_iso8601(input: &str) -> Option<Duration> {
    let (negative, rest) = match input.as_bytes().first()? {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };
    let rest = rest.strip_prefix(['P', 'p'])?;
    let (date_part, time_part) = match rest.find(['T', 't']) {
        Some(i) => (&rest[..i], Some(&rest[i + 1..])),
        None => (rest, None),
    };

    let mut total = Duration::zero();
    let mut seen = 0;

    let mut last_rank = 0;
    for (value, unit) in split_components(date_part)? {
        let rank = match unit {
            'W' => 1,
            'D' => 2,
            _ => return None,
        };
        if rank <= last_rank {
            return None;
        }
        last_rank = rank;
        let n: i64 = value.parse().ok()?;
        let part = match unit {
            'W' => Duration::try_weeks(n)?,
            _ => Duration::try_days(n)?,
        };
        total = total.checked_add(&part)?;
        seen += 1;
    }

    if let Some(time_part) = time_part {
        let components = split_components(time_part)?;
        if components.is_empty() {
            return None;
        }
        let mut last_rank = 0;
        for (value, unit) in components {
            let rank = match unit {
                'H' => 1,
                'M' => 2,
                'S' => 3,
                _ => return None,
            };
            if rank <= last_rank {
                return None;
            }
            last_rank = rank;
            let part = match unit {
                'H' => Duration::try_hours(value.parse().ok()?)?,
                'M' => Duration::try_minutes(value.parse().ok()?)?,
                _ => parse_seconds(value)?,
            };
            total = total.checked_add(&part)?;
            seen += 1;
        }
    }

    if seen == 0 {
        return None;
    }
    Some(if negative { -total } else { total })
}

/// Split `12D3H` into `[("12", 'D'), ("3", 'H')]`, uppercasing units.
fn split_components(s: &str) -> Option<Vec<(&str, char)>> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            continue;
        }
        if i == start {
            return None;
        }
        out.push((&s[start..i], c.to_ascii_uppercase()));
        start = i + c.len_utf8();
    }
    if start != s.len() {
        return None;
    }
    Some(out)
}

/// Seconds may carry up to nine fractional digits.
fn parse_seconds(value: &str) -> Option<Duration> {
    let (whole, frac) = match value.find(['.', ',']) {
        Some(i) => (&value[..i], &value[i + 1..]),
        None => (value, ""),
    };
    if whole.is_empty() || frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let secs = Duration::try_seconds(whole.parse().ok()?)?;
    if frac.is_empty() {
        return Some(secs);
    }
    let nanos: i64 = format!("{frac:0<9}").parse().ok()?;
    secs.checked_add(&Duration::nanoseconds(nanos))
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;

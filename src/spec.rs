//! Field specification parser.
//!
//! A specification is a comma-separated list of field numbers and inclusive
//! ranges, for example `1,3-5,7`. Fields are 1-based.
//!
//! ```text
//! 1,3-5      -> [1-1, 3-5]     -> fields 1 3 4 5
//! 1-5,3-7    -> [1-5, 3-7]     -> fields 1 2 3 4 5 6 7
//! 3,1,3      -> [3-3, 1-1, 3-3] -> fields 3 1
//! ```
//!
//! Ranges keep the order they were written in. Overlaps and repeats are
//! legal and are only collapsed when the specification is flattened.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{RangeSide, SpecError};

/// An inclusive range of 1-based field positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    start: i64,
    end: i64,
}

impl FieldRange {
    pub(crate) fn new(start: i64, end: i64) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub(crate) fn single(n: i64) -> Self {
        Self::new(n, n)
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }
}

impl fmt::Display for FieldRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// An ordered list of field ranges as written by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Specification(Vec<FieldRange>);

impl Specification {
    /// Parse a field specification such as `1,3-5`.
    ///
    /// Tokens are trimmed and empty tokens (`1,,2`, trailing commas) are
    /// skipped. A token with a hyphen is a range and must split into exactly
    /// two integers with `start <= end`; range bounds are not checked for
    /// positivity. Any other token must be an integer of at least 1.
    pub fn parse(text: &str) -> Result<Self, SpecError> {
        if text.trim().is_empty() {
            return Err(SpecError::EmptySpecification);
        }

        let mut ranges = Vec::new();
        for token in text.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let range = if token.contains('-') {
                parse_range(token)?
            } else {
                parse_single(token)?
            };
            ranges.push(range);
        }

        Ok(Self(ranges))
    }

    pub fn ranges(&self) -> &[FieldRange] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expand every range into its positions, dropping repeats.
    ///
    /// Positions appear in the order their ranges were declared, ascending
    /// within a range; the first occurrence of a position wins.
    pub fn flatten(&self) -> Vec<i64> {
        dedup_positions(self.0.iter().map(|r| r.start..=r.end))
    }

    /// Like [`flatten`](Self::flatten), restricted to positions `1..=count`.
    ///
    /// Clamps each range before expanding it, so a range such as
    /// `1-4000000000` costs no more than `count` steps.
    pub fn flatten_within(&self, count: usize) -> Vec<i64> {
        let upper = i64::try_from(count).unwrap_or(i64::MAX);
        dedup_positions(
            self.0
                .iter()
                .map(|r| r.start.max(1)..=r.end.min(upper)),
        )
    }
}

impl FromStr for Specification {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl From<Vec<(i64, i64)>> for Specification {
    fn from(pairs: Vec<(i64, i64)>) -> Self {
        Self(pairs.into_iter().map(|(s, e)| FieldRange::new(s, e)).collect())
    }
}

fn parse_range(token: &str) -> Result<FieldRange, SpecError> {
    let pieces: Vec<&str> = token.split('-').collect();
    let &[first, second] = pieces.as_slice() else {
        return Err(SpecError::MalformedRange {
            token: token.to_string(),
        });
    };

    let bound = |raw: &str, side| {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| SpecError::InvalidRangeBound {
                token: token.to_string(),
                side,
                value: raw.to_string(),
            })
    };
    let start = bound(first, RangeSide::Start)?;
    let end = bound(second, RangeSide::End)?;

    if start > end {
        return Err(SpecError::RangeOrderViolation {
            token: token.to_string(),
            start,
            end,
        });
    }

    Ok(FieldRange::new(start, end))
}

fn parse_single(token: &str) -> Result<FieldRange, SpecError> {
    let n = token
        .parse::<i64>()
        .map_err(|_| SpecError::InvalidFieldNumber {
            token: token.to_string(),
        })?;
    if n < 1 {
        return Err(SpecError::NonPositiveField { value: n });
    }
    Ok(FieldRange::single(n))
}

fn dedup_positions<I>(ranges: I) -> Vec<i64>
where
    I: IntoIterator<Item = std::ops::RangeInclusive<i64>>,
{
    let mut seen = HashSet::new();
    let mut positions = Vec::new();
    for range in ranges {
        for pos in range {
            if seen.insert(pos) {
                positions.push(pos);
            }
        }
    }
    positions
}

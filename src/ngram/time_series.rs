//! Year-indexed numeric series with the arithmetic used by frequency queries.

use std::collections::BTreeMap;

use crate::error::{LexigraphError, Result};

/// Lowest year any series is expected to carry.
pub const MIN_YEAR: i32 = 1400;

/// Highest year any series is expected to carry.
pub const MAX_YEAR: i32 = 2100;

/// An ordered mapping from year to a non-negative numeric value.
///
/// Keys enumerate in strictly ascending order with no duplicates. Arithmetic
/// operations never mutate their operands; each produces a new series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    data: BTreeMap<i32, f64>,
}

impl TimeSeries {
    /// Create a new empty time series.
    pub fn new() -> Self {
        TimeSeries {
            data: BTreeMap::new(),
        }
    }

    /// Create a copy of `source` containing only entries with year in
    /// `[start_year, end_year]`, inclusive of both end points.
    ///
    /// An inverted range yields an empty series, never an error.
    pub fn restricted(source: &TimeSeries, start_year: i32, end_year: i32) -> Self {
        if start_year > end_year {
            return TimeSeries::new();
        }
        TimeSeries {
            data: source
                .data
                .range(start_year..=end_year)
                .map(|(&year, &value)| (year, value))
                .collect(),
        }
    }

    /// Set the value for a year. A repeated year overwrites the prior value.
    pub fn insert(&mut self, year: i32, value: f64) {
        self.data.insert(year, value);
    }

    /// Get the value recorded for a year, if any.
    pub fn get(&self, year: i32) -> Option<f64> {
        self.data.get(&year).copied()
    }

    /// Check whether a year has a recorded value.
    pub fn contains_year(&self, year: i32) -> bool {
        self.data.contains_key(&year)
    }

    /// Check whether the series has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get the earliest recorded year, if any.
    pub fn first_year(&self) -> Option<i32> {
        self.data.keys().next().copied()
    }

    /// Get the latest recorded year, if any.
    pub fn last_year(&self) -> Option<i32> {
        self.data.keys().next_back().copied()
    }

    /// All years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        self.data.keys().copied().collect()
    }

    /// All values, index-aligned with [`TimeSeries::years`].
    pub fn values(&self) -> Vec<f64> {
        self.data.values().copied().collect()
    }

    /// Iterate over `(year, value)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.data.iter().map(|(&year, &value)| (year, value))
    }

    /// Sum of all values in the series.
    pub fn total(&self) -> f64 {
        self.data.values().sum()
    }

    /// Year-wise sum over the union of both operands' year sets.
    ///
    /// A year present in only one operand contributes that operand's value
    /// unchanged. Two empty operands yield an empty result.
    pub fn plus(&self, other: &TimeSeries) -> TimeSeries {
        let mut sum = self.data.clone();
        for (&year, &value) in &other.data {
            *sum.entry(year).or_insert(0.0) += value;
        }
        TimeSeries { data: sum }
    }

    /// Divide the value for each of this series' years by `divisor`'s value
    /// for the same year.
    ///
    /// Fails with [`LexigraphError::MissingYear`] if `divisor` lacks a year
    /// present here. Years present only in `divisor` are ignored.
    pub fn divided_by(&self, divisor: &TimeSeries) -> Result<TimeSeries> {
        let mut quotient = BTreeMap::new();
        for (&year, &value) in &self.data {
            match divisor.data.get(&year) {
                Some(&denominator) => {
                    quotient.insert(year, value / denominator);
                }
                None => return Err(LexigraphError::MissingYear(year)),
            }
        }
        Ok(TimeSeries { data: quotient })
    }
}

impl FromIterator<(i32, f64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (i32, f64)>>(iter: I) -> Self {
        TimeSeries {
            data: iter.into_iter().collect(),
        }
    }
}

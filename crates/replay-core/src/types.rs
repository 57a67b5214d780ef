use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SeriesError;

/// The buffered time series the playback cursor walks over.
///
/// `dates` and `prices` are parallel arrays and always the same length: the
/// only fallible constructor enforces it. A fetch replaces the series
/// wholesale; there is no in-place mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    dates: Vec<String>,
    prices: Vec<f64>,
}

impl TimeSeries {
    /// Empty series, the state before any fetch has resolved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from parallel date/price arrays.
    pub fn from_parts(dates: Vec<String>, prices: Vec<f64>) -> Result<Self, SeriesError> {
        if dates.len() != prices.len() {
            return Err(SeriesError::ShapeMismatch {
                dates: dates.len(),
                prices: prices.len(),
            });
        }
        Ok(Self { dates, prices })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The first `k` points as `(labels, values)` slices.
    pub fn prefix(&self, k: usize) -> Result<(&[String], &[f64]), SeriesError> {
        if k > self.len() {
            return Err(SeriesError::OutOfRange {
                index: k,
                len: self.len(),
            });
        }
        Ok((&self.dates[..k], &self.prices[..k]))
    }

    /// The point at index `i`.
    pub fn point(&self, i: usize) -> Result<(&str, f64), SeriesError> {
        if i >= self.len() {
            return Err(SeriesError::OutOfRange {
                index: i,
                len: self.len(),
            });
        }
        Ok((&self.dates[i], self.prices[i]))
    }

    /// The most recent point, if any.
    pub fn latest(&self) -> Option<(&str, f64)> {
        self.len().checked_sub(1).and_then(|i| self.point(i).ok())
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }
}

/// A historical daily close row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyClose {
    pub date: String,
    pub close: f64,
}

impl From<Vec<DailyClose>> for TimeSeries {
    /// Infallible by construction: one date per price.
    fn from(rows: Vec<DailyClose>) -> Self {
        let (dates, prices) = rows.into_iter().map(|row| (row.date, row.close)).unzip();
        Self { dates, prices }
    }
}

/// What the live price display currently shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiveValue {
    Price(f64),
    /// Fixed marker shown when the prediction fetch failed.
    Unavailable,
}

impl fmt::Display for LiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiveValue::Price(p) => write!(f, "${p:.2}"),
            LiveValue::Unavailable => write!(f, "N/A"),
        }
    }
}

/// What the historical table display currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryUpdate {
    Loaded(Vec<DailyClose>),
    /// Fixed marker shown when the historical fetch failed.
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_rejects_shape_mismatch() {
        let err = TimeSeries::from_parts(vec!["d1".into(), "d2".into()], vec![1.0]).unwrap_err();
        assert!(matches!(err, SeriesError::ShapeMismatch { dates: 2, prices: 1 }));
    }

    #[test]
    fn test_prefix_bounds() {
        let series =
            TimeSeries::from_parts(vec!["d1".into(), "d2".into()], vec![1.0, 2.0]).unwrap();

        let (labels, values) = series.prefix(1).unwrap();
        assert_eq!(labels, &["d1".to_string()]);
        assert_eq!(values, &[1.0]);

        let (labels, values) = series.prefix(2).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(values, &[1.0, 2.0]);

        assert!(matches!(
            series.prefix(3),
            Err(SeriesError::OutOfRange { index: 3, len: 2 })
        ));
    }

    #[test]
    fn test_empty_prefix_is_valid() {
        let series = TimeSeries::new();
        let (labels, values) = series.prefix(0).unwrap();
        assert!(labels.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn test_point_and_latest() {
        let series =
            TimeSeries::from_parts(vec!["d1".into(), "d2".into()], vec![1.5, 2.25]).unwrap();
        assert_eq!(series.point(0).unwrap(), ("d1", 1.5));
        assert_eq!(series.latest().unwrap(), ("d2", 2.25));
        assert!(series.point(2).is_err());
        assert!(TimeSeries::new().latest().is_none());
    }

    #[test]
    fn test_live_value_display() {
        assert_eq!(LiveValue::Price(101.5).to_string(), "$101.50");
        assert_eq!(LiveValue::Price(0.0).to_string(), "$0.00");
        assert_eq!(LiveValue::Unavailable.to_string(), "N/A");
    }
}

// File: crates/pricechart-core/src/series.rs
// Summary: Bar model and the ordered, immutable bar sequence the engine works over.
// Notes:
// - `BarRecord` is the parsed input shape handed over by the data-loading layer.
// - `BarSeries` owns its bars exclusively; callers only ever get shared slices.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::SeriesError;

/// One parsed input row, already ordered by the loader.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
    #[serde(default, alias = "turnover_value")]
    pub turnover_value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    /// Position in the sorted sequence.
    pub index: usize,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub turnover_value: f64,
    /// Close-to-close change against the previous bar, in percent.
    pub change_percent: f64,
}

impl Bar {
    /// Build a bar enforcing OHLC invariants:
    /// l <= min(o,c), h >= max(o,c), l <= h, all prices finite.
    pub fn try_new(index: usize, record: &BarRecord, prev_close: Option<f64>) -> Result<Self, SeriesError> {
        let BarRecord { date, open, high, low, close, volume, turnover_value } = *record;
        let invalid = |reason| SeriesError::InvalidBar { index, reason };
        if ![open, high, low, close].iter().all(|v| v.is_finite()) {
            return Err(invalid("non-finite price"));
        }
        if low > open.min(close) { return Err(invalid("low above min(open,close)")); }
        if high < open.max(close) { return Err(invalid("high below max(open,close)")); }
        if low > high { return Err(invalid("low above high")); }

        let change_percent = match prev_close {
            Some(prev) if prev != 0.0 => (close - prev) / prev * 100.0,
            _ => 0.0,
        };
        Ok(Self { index, date, open, high, low, close, volume, turnover_value, change_percent })
    }

    /// True when the bar closed at or above its open.
    pub fn is_up(&self) -> bool { self.close >= self.open }
}

/// Ordered bar sequence, ascending by date.
#[derive(Clone, Debug, Default)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Index the records, derive percent change and validate ordering.
    pub fn from_records<I>(records: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = BarRecord>,
    {
        let mut bars: Vec<Bar> = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            let prev = bars.last();
            if let Some(prev) = prev {
                if record.date <= prev.date {
                    return Err(SeriesError::Unsorted { index });
                }
            }
            let bar = Bar::try_new(index, &record, prev.map(|b| b.close))?;
            bars.push(bar);
        }
        Ok(Self { bars })
    }

    pub fn len(&self) -> usize { self.bars.len() }

    pub fn is_empty(&self) -> bool { self.bars.is_empty() }

    pub fn bars(&self) -> &[Bar] { &self.bars }

    pub fn get(&self, index: usize) -> Option<&Bar> { self.bars.get(index) }

    /// Bars inside `range`, clipped to the sequence.
    pub fn slice(&self, range: Range<usize>) -> &[Bar] {
        let end = range.end.min(self.bars.len());
        let start = range.start.min(end);
        &self.bars[start..end]
    }

    /// Lowest low and highest high over the given bars.
    pub fn price_extent(bars: &[Bar]) -> Option<(f64, f64)> {
        if bars.is_empty() { return None; }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for b in bars {
            lo = lo.min(b.low);
            hi = hi.max(b.high);
        }
        Some((lo, hi))
    }
}

impl AsRef<[Bar]> for BarSeries {
    fn as_ref(&self) -> &[Bar] { &self.bars }
}

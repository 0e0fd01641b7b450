use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// One point of a month's running total: a day and the cumulative amount
/// collected up to and including that day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub day: u32,
    pub cumulative: Decimal,
}

/// Per-month running payment totals, keyed by month (1-12).
///
/// Each month accumulates independently; months with no matching payments
/// are simply absent. Within a month, points are day-ordered and the
/// cumulative amounts are non-decreasing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySeries {
    months: BTreeMap<u32, Vec<SeriesPoint>>,
}

impl MonthlySeries {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Number of months present.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Months present, ascending.
    pub fn months(&self) -> impl Iterator<Item = u32> + '_ {
        self.months.keys().copied()
    }

    /// The day-ordered points for one month, if it is present.
    pub fn points(&self, month: u32) -> Option<&[SeriesPoint]> {
        self.months.get(&month).map(Vec::as_slice)
    }

    /// Iterate months ascending with their points.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[SeriesPoint])> {
        self.months.iter().map(|(m, pts)| (*m, pts.as_slice()))
    }

    /// The final cumulative value for a month (the month's total).
    pub fn month_total(&self, month: u32) -> Option<Decimal> {
        self.months
            .get(&month)
            .and_then(|pts| pts.last())
            .map(|p| p.cumulative)
    }

    pub(crate) fn insert(&mut self, month: u32, points: Vec<SeriesPoint>) {
        self.months.insert(month, points);
    }
}

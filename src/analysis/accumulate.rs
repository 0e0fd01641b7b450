use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{MonthlySeries, Payment, SeriesPoint};

/// Filter `payments` down to one portfolio and compute each month's
/// day-ordered running total.
///
/// Matching is exact; callers fold drifted labels before getting here.
/// Months accumulate independently, and payments sharing a day are summed
/// into a single point. A cartera that matches nothing yields an empty
/// series — whether that is an error is the caller's decision.
pub(crate) fn accumulate(payments: &[Payment], cartera: &str) -> MonthlySeries {
    let mut by_month: BTreeMap<u32, Vec<&Payment>> = BTreeMap::new();
    for p in payments.iter().filter(|p| p.cartera == cartera) {
        by_month.entry(p.month).or_default().push(p);
    }

    if by_month.is_empty() {
        log::debug!("no payments match cartera '{cartera}'");
    }

    let mut series = MonthlySeries::default();
    for (month, mut group) in by_month {
        // Stable sort: same-day payments keep their input order
        group.sort_by_key(|p| p.day);

        let mut points: Vec<SeriesPoint> = Vec::new();
        let mut running = Decimal::ZERO;
        for p in group {
            running += p.amount;
            match points.last_mut() {
                Some(last) if last.day == p.day => last.cumulative = running,
                _ => points.push(SeriesPoint {
                    day: p.day,
                    cumulative: running,
                }),
            }
        }
        series.insert(month, points);
    }
    series
}

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{MonthPeak, MonthlySeries, PeakBand};

/// The maximum cumulative value of each month, classified against the
/// other months' peaks.
///
/// A true max is taken rather than the last point, so corrected or
/// out-of-order series are tolerated. A peak equal to the highest value is
/// `High`, otherwise equal to the lowest is `Low`, anything else is `Mid`.
/// The max test runs first, so ties (including a single-month series) land
/// on `High` consistently.
pub(crate) fn peaks_by_month(series: &MonthlySeries) -> BTreeMap<u32, MonthPeak> {
    let mut peaks: BTreeMap<u32, Decimal> = BTreeMap::new();
    for (month, points) in series.iter() {
        if let Some(max) = points.iter().map(|p| p.cumulative).max() {
            peaks.insert(month, max);
        }
    }

    let (Some(highest), Some(lowest)) = (
        peaks.values().copied().max(),
        peaks.values().copied().min(),
    ) else {
        return BTreeMap::new();
    };

    peaks
        .into_iter()
        .map(|(month, amount)| {
            let band = if amount == highest {
                PeakBand::High
            } else if amount == lowest {
                PeakBand::Low
            } else {
                PeakBand::Mid
            };
            (month, MonthPeak { amount, band })
        })
        .collect()
}

use rust_decimal::Decimal;
use thiserror::Error;

/// The original dashboard always projected the meta over 30 days.
pub(crate) const DEFAULT_TRAJECTORY_DAYS: u32 = 30;

/// One point of the target trajectory: the cumulative meta expected by
/// the end of `day`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TrajectoryPoint {
    pub(crate) day: u32,
    pub(crate) cumulative: Decimal,
}

#[derive(Error, Debug, PartialEq)]
pub(crate) enum AnalysisError {
    #[error("invalid target: {0}")]
    InvalidTarget(&'static str),
}

/// Spread a monthly target evenly over `days` days.
///
/// Closed form: point `d` is `(target / days) × d`. This is the canonical
/// definition; it matches repeated summation up to `Decimal` precision and
/// is independent of any dataset.
pub(crate) fn target_trajectory(
    target: Decimal,
    days: u32,
) -> Result<Vec<TrajectoryPoint>, AnalysisError> {
    if days == 0 {
        return Err(AnalysisError::InvalidTarget("day count must be positive"));
    }
    if target < Decimal::ZERO {
        return Err(AnalysisError::InvalidTarget(
            "monthly target must not be negative",
        ));
    }

    let daily = target / Decimal::from(days);
    Ok((1..=days)
        .map(|day| TrajectoryPoint {
            day,
            cumulative: daily * Decimal::from(day),
        })
        .collect())
}

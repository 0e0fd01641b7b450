use rust_decimal::Decimal;

/// Where a month's peak sits relative to the peaks of the other months.
///
/// The minimum peak across months is `Low` and the maximum is `High`;
/// everything in between is `Mid`. Ties resolve toward `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeakBand {
    Low,
    Mid,
    High,
}

impl PeakBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeakBand::Low => "low",
            PeakBand::Mid => "mid",
            PeakBand::High => "high",
        }
    }
}

impl std::fmt::Display for PeakBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A month's maximum cumulative value and its band within the peak set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthPeak {
    pub amount: Decimal,
    pub band: PeakBand,
}

use rust_decimal::Decimal;

/// A single payment observation from a portfolio dataset.
///
/// Rows are typed at load time; anything that cannot produce a valid
/// `Payment` is quarantined by the importer and never reaches analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    /// Portfolio ("cartera") label this payment belongs to.
    pub cartera: String,
    /// Creation month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Payment amount; never negative.
    pub amount: Decimal,
}

impl Payment {
    pub fn new(cartera: String, month: u32, day: u32, amount: Decimal) -> Self {
        Self {
            cartera,
            month,
            day,
            amount,
        }
    }
}

mod payment;
mod peak;
mod series;

pub use payment::Payment;
pub use peak::{MonthPeak, PeakBand};
pub use series::{MonthlySeries, SeriesPoint};

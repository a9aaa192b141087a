//! Daily-compounded certificate of deposit growth.

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// Interest earned spread evenly over the term's months
    pub mean_monthly_return: f64,
    /// Capital at the end of the term
    pub total: f64,
}

/// Average monthly dividend and end-of-term total.
///
/// Interest compounds daily over a 365-day year. Callers must pass
/// `principal > 0`, `annual_rate >= 0` and `term_months > 0`; nothing is
/// clamped or rounded here.
pub fn compute(principal: f64, annual_rate: f64, term_months: f64) -> CalculationResult {
    let days = term_months * DAYS_PER_YEAR / MONTHS_PER_YEAR;
    let total = principal * (1.0 + annual_rate / DAYS_PER_YEAR).powf(days);
    let mean_monthly_return = (total - principal) / term_months;

    CalculationResult {
        mean_monthly_return,
        total,
    }
}

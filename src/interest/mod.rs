pub mod day_count;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::decimal::{round, Rate, MONEY_DP};
use crate::errors::{LoanError, Result};

pub use day_count::DayCountConvention;

/// elapsed time between two dates under a day count convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearFraction {
    /// exact, unrounded share of a year
    pub fraction: Decimal,
    /// raw day count as defined by the convention
    pub days: i64,
}

/// trait for day count conventions
pub trait DayCounter {
    /// year fraction between `start` and `end`; `start` must not be after `end`
    fn year_fraction(&self, start: NaiveDate, end: NaiveDate) -> Result<YearFraction>;

    /// days in the year used as the divisor for a period starting on `start`
    fn year_basis(&self, start: NaiveDate) -> u32;

    fn name(&self) -> &'static str;
}

/// simple interest on `balance` for one accrual period, rounded to cents
pub fn period_interest(balance: Decimal, annual_rate: Rate, period: &YearFraction) -> Result<Decimal> {
    balance
        .checked_mul(annual_rate.as_decimal())
        .and_then(|annual| annual.checked_mul(period.fraction))
        .map(|interest| round(interest, MONEY_DP))
        .ok_or_else(|| LoanError::ArithmeticError {
            message: format!("interest on balance {} overflowed decimal range", balance),
        })
}

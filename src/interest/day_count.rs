use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{LoanError, Result};
use crate::interest::{DayCounter, YearFraction};

/// day count convention for interest calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// 30 days per month / 360 days per year
    #[serde(rename = "30/360")]
    Thirty360,
    /// actual days / 360
    #[serde(rename = "Actual/360")]
    ActualOver360,
    /// actual days / 365
    #[default]
    #[serde(rename = "Actual/365")]
    ActualOver365,
    /// actual days / 365 or 366 depending on the start year
    #[serde(rename = "Actual/Actual")]
    ActualOverActual,
}

impl DayCountConvention {
    pub const ALL: [DayCountConvention; 4] = [
        DayCountConvention::Thirty360,
        DayCountConvention::ActualOver360,
        DayCountConvention::ActualOver365,
        DayCountConvention::ActualOverActual,
    ];

    /// code used by requests
    pub fn code(&self) -> &'static str {
        match self {
            DayCountConvention::Thirty360 => "30/360",
            DayCountConvention::ActualOver360 => "Actual/360",
            DayCountConvention::ActualOver365 => "Actual/365",
            DayCountConvention::ActualOverActual => "Actual/Actual",
        }
    }

    /// calculate days between dates based on convention
    pub fn calculate_days(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        match self {
            DayCountConvention::Thirty360 => days_30_360(start, end),
            DayCountConvention::ActualOver360
            | DayCountConvention::ActualOver365
            | DayCountConvention::ActualOverActual => (end - start).num_days(),
        }
    }
}

impl DayCounter for DayCountConvention {
    fn year_fraction(&self, start: NaiveDate, end: NaiveDate) -> Result<YearFraction> {
        if start > end {
            return Err(LoanError::InvalidRange { start, end });
        }

        let days = self.calculate_days(start, end);
        let fraction = Decimal::from(days) / Decimal::from(self.year_basis(start));

        Ok(YearFraction { fraction, days })
    }

    fn year_basis(&self, start: NaiveDate) -> u32 {
        match self {
            DayCountConvention::Thirty360 | DayCountConvention::ActualOver360 => 360,
            DayCountConvention::ActualOver365 => 365,
            DayCountConvention::ActualOverActual => {
                if is_leap_year(start.year()) { 366 } else { 365 }
            }
        }
    }

    fn name(&self) -> &'static str {
        self.code()
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DayCountConvention {
    type Err = LoanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DayCountConvention::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| LoanError::UnknownConvention { code: s.to_string() })
    }
}

/// 30/360 with both day-of-month values capped at 30
fn days_30_360(start: NaiveDate, end: NaiveDate) -> i64 {
    let y1 = start.year() as i64;
    let y2 = end.year() as i64;
    let m1 = start.month() as i64;
    let m2 = end.month() as i64;
    let d1 = start.day().min(30) as i64;
    let d2 = end.day().min(30) as i64;

    360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
}

/// check if year is a leap year
pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::errors::{LoanError, Result};
use crate::types::{Frequency, RollStep};

/// Start date followed by `total_periods` payment dates.
///
/// Month-based frequencies keep a month-end date on month-end: whenever the
/// previous date in the sequence is the last day of its month, the next date
/// is moved to the last day of its own month. The check is made against the
/// previous date, not the start date, so the sequence is built as a fold.
pub fn generate_payment_dates(
    start: NaiveDate,
    frequency: Frequency,
    total_periods: u32,
) -> Result<Vec<NaiveDate>> {
    let mut dates = Vec::with_capacity(total_periods as usize + 1);
    dates.push(start);

    let mut current = start;
    for _ in 0..total_periods {
        current = roll_date(current, frequency)?;
        dates.push(current);
    }

    Ok(dates)
}

/// next payment date after `date`
pub fn roll_date(date: NaiveDate, frequency: Frequency) -> Result<NaiveDate> {
    let rolled = match frequency.roll_step() {
        RollStep::Days(days) => date.checked_add_days(Days::new(days)),
        RollStep::Months(months) => date
            .checked_add_months(Months::new(months))
            .and_then(|next| {
                if is_end_of_month(date) {
                    last_day_of_month(next.year(), next.month())
                } else {
                    Some(next)
                }
            }),
    };

    rolled.ok_or_else(|| LoanError::DateOutOfRange {
        message: format!("cannot roll {} forward by one {} period", date, frequency),
    })
}

/// true if `date` is the last calendar day of its month
pub fn is_end_of_month(date: NaiveDate) -> bool {
    date.succ_opt().map_or(true, |next| next.month() != date.month())
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LoanTerms;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::interest::{period_interest, DayCounter};
use crate::payments::dates::generate_payment_dates;
use crate::payments::installment::overflow;

/// one installment period of an amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based period number
    pub period: u32,
    pub payment_date: NaiveDate,
    /// raw day count of the accrual period under the loan's convention
    pub accrual_days: i64,
    pub opening_balance: Money,
    pub principal: Money,
    pub interest: Money,
    pub installment: Money,
    pub closing_balance: Money,
}

/// totals over a schedule, recomputed from its rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_principal: Money,
    pub total_interest: Money,
    pub total_payments: Money,
}

impl ScheduleSummary {
    /// totals fail with `ArithmeticError` when they leave the decimal range
    pub fn from_rows(rows: &[ScheduleRow]) -> Result<Self> {
        let mut total_principal = Money::ZERO;
        let mut total_interest = Money::ZERO;

        for row in rows {
            total_principal = total_principal
                .checked_add(row.principal)
                .ok_or_else(|| overflow("total principal"))?;
            total_interest = total_interest
                .checked_add(row.interest)
                .ok_or_else(|| overflow("total interest"))?;
        }

        let total_payments = total_principal
            .checked_add(total_interest)
            .ok_or_else(|| overflow("total payments"))?;

        Ok(Self {
            total_principal,
            total_interest,
            total_payments,
        })
    }
}

/// amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    installment: Money,
    rows: Vec<ScheduleRow>,
}

impl AmortizationSchedule {
    /// generate the schedule for `terms` paying `installment` each period
    pub fn generate(terms: &LoanTerms, installment: Money) -> Result<Self> {
        let dates = generate_payment_dates(
            terms.start_date(),
            terms.frequency(),
            terms.total_periods(),
        )?;

        Self::generate_for_dates(
            terms.principal(),
            terms.annual_rate(),
            &terms.convention(),
            &dates,
            installment,
        )
    }

    /// Walk `dates` applying a level `installment` to a declining balance.
    ///
    /// Interest is rounded to cents every period and the installment is a
    /// rounded figure, so the balance left after the last regular payment is
    /// rarely zero. The final row absorbs that residue into its principal and
    /// installment, which always closes the loan at exactly 0.00.
    pub fn generate_for_dates<C: DayCounter>(
        principal: Decimal,
        annual_rate: Rate,
        convention: &C,
        dates: &[NaiveDate],
        installment: Money,
    ) -> Result<Self> {
        let level = installment.as_decimal();
        let total_periods = dates.len().saturating_sub(1);

        let mut balance = principal;
        let mut rows = Vec::with_capacity(total_periods);

        for (index, pair) in dates.windows(2).enumerate() {
            let period_number = index + 1;
            let period = convention.year_fraction(pair[0], pair[1])?;

            let interest = period_interest(balance, annual_rate, &period)?;
            let mut principal_portion = level
                .checked_sub(interest)
                .ok_or_else(|| overflow("principal portion"))?;
            balance = balance
                .checked_sub(principal_portion)
                .ok_or_else(|| overflow("outstanding balance"))?;

            let payment = if period_number == total_periods {
                // fold rounding residue into the last period
                principal_portion = principal_portion
                    .checked_add(balance)
                    .ok_or_else(|| overflow("final principal portion"))?;
                balance = Decimal::ZERO;
                principal_portion
                    .checked_add(interest)
                    .ok_or_else(|| overflow("final installment"))?
            } else {
                level
            };

            let opening_balance = balance
                .checked_add(principal_portion)
                .ok_or_else(|| overflow("opening balance"))?;

            rows.push(ScheduleRow {
                period: period_number as u32,
                payment_date: pair[1],
                accrual_days: period.days,
                opening_balance: Money::from_decimal(opening_balance),
                principal: Money::from_decimal(principal_portion),
                interest: Money::from_decimal(interest),
                installment: Money::from_decimal(payment),
                closing_balance: Money::from_decimal(balance),
            });
        }

        if let Some(last) = rows.last() {
            debug!(
                periods = rows.len(),
                %installment,
                final_installment = %last.installment,
                final_adjustment = ?last.installment.checked_sub(installment),
                "generated amortization schedule"
            );
        }

        Ok(Self { installment, rows })
    }

    /// level installment paid in every period but the last
    pub fn installment(&self) -> Money {
        self.installment
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// get row for a 1-based period number
    pub fn get_row(&self, period: u32) -> Option<&ScheduleRow> {
        period.checked_sub(1).and_then(|i| self.rows.get(i as usize))
    }

    pub fn last_row(&self) -> Option<&ScheduleRow> {
        self.rows.last()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Installment of the last period.
    ///
    /// All accumulated rounding drift lands here, so on long schedules it can
    /// differ from [`installment`](Self::installment) by more than a cent.
    pub fn final_installment(&self) -> Option<Money> {
        self.rows.last().map(|r| r.installment)
    }

    pub fn summary(&self) -> Result<ScheduleSummary> {
        ScheduleSummary::from_rows(&self.rows)
    }
}

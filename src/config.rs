use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::decimal::Rate;
use crate::errors::{LoanError, Result};
use crate::interest::DayCountConvention;
use crate::loan::InstallmentLoan;
use crate::types::Frequency;

/// format of every date crossing the crate boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated terms of a fixed installment loan.
///
/// Construct through [`LoanTerms::new`], [`LoanTermsBuilder`] or
/// `TryFrom<LoanRequest>`; all three reject non-positive principals and terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanTerms {
    principal: Decimal,
    annual_rate: Rate,
    start_date: NaiveDate,
    term_years: u32,
    frequency: Frequency,
    convention: DayCountConvention,
}

impl LoanTerms {
    /// `annual_rate_percent` is a percentage, so 9 means 9% a year
    pub fn new(
        principal: Decimal,
        annual_rate_percent: Decimal,
        start_date: NaiveDate,
        term_years: u32,
        frequency: Frequency,
        convention: DayCountConvention,
    ) -> Result<Self> {
        if principal <= Decimal::ZERO {
            return Err(LoanError::InvalidPrincipal { amount: principal });
        }

        if term_years == 0 {
            return Err(LoanError::InvalidTerm {
                years: term_years,
                message: "must be at least one year".to_string(),
            });
        }

        if term_years.checked_mul(frequency.periods_per_year()).is_none() {
            return Err(LoanError::InvalidTerm {
                years: term_years,
                message: format!("too many {} periods", frequency),
            });
        }

        Ok(Self {
            principal,
            annual_rate: Rate::from_percentage(annual_rate_percent),
            start_date,
            term_years,
            frequency,
            convention,
        })
    }

    pub fn builder() -> LoanTermsBuilder {
        LoanTermsBuilder::new()
    }

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn convention(&self) -> DayCountConvention {
        self.convention
    }

    /// number of installments over the whole term
    pub fn total_periods(&self) -> u32 {
        // overflow rejected in new()
        self.term_years * self.frequency.periods_per_year()
    }
}

/// parse a "YYYY-MM-DD" date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|e| LoanError::InvalidDate {
        input: input.to_string(),
        message: e.to_string(),
    })
}

/// builder for loan terms
#[derive(Debug, Clone, Default)]
pub struct LoanTermsBuilder {
    principal: Option<Decimal>,
    annual_rate: Option<Decimal>,
    start_date: Option<Result<NaiveDate>>,
    term_years: Option<u32>,
    frequency: Option<Frequency>,
    convention: Option<DayCountConvention>,
}

impl LoanTermsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn principal(mut self, principal: Decimal) -> Self {
        self.principal = Some(principal);
        self
    }

    /// annual rate as a percentage
    pub fn annual_rate(mut self, percent: Decimal) -> Self {
        self.annual_rate = Some(percent);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(Ok(date));
        self
    }

    /// parse errors surface from build()
    pub fn start_date_str(mut self, date: &str) -> Self {
        self.start_date = Some(parse_date(date));
        self
    }

    pub fn term_years(mut self, years: u32) -> Self {
        self.term_years = Some(years);
        self
    }

    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn convention(mut self, convention: DayCountConvention) -> Self {
        self.convention = Some(convention);
        self
    }

    /// build terms; frequency defaults to monthly and convention to Actual/365
    pub fn build(self) -> Result<LoanTerms> {
        let principal = self.principal.ok_or(LoanError::MissingField { field: "principal" })?;
        let annual_rate = self.annual_rate.ok_or(LoanError::MissingField { field: "annual_rate" })?;
        let start_date = self.start_date.ok_or(LoanError::MissingField { field: "start_date" })??;
        let term_years = self.term_years.ok_or(LoanError::MissingField { field: "term_years" })?;

        LoanTerms::new(
            principal,
            annual_rate,
            start_date,
            term_years,
            self.frequency.unwrap_or_default(),
            self.convention.unwrap_or_default(),
        )
    }

    /// build terms and compute the loan in one step
    pub fn build_loan(self) -> Result<InstallmentLoan> {
        InstallmentLoan::new(self.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_defaults() {
        let terms = LoanTerms::builder()
            .principal(dec!(10000))
            .annual_rate(dec!(9))
            .start_date_str("2024-01-31")
            .term_years(2)
            .build()
            .unwrap();

        assert_eq!(terms.frequency(), Frequency::Monthly);
        assert_eq!(terms.convention(), DayCountConvention::ActualOver365);
        assert_eq!(terms.annual_rate().as_decimal(), dec!(0.09));
        assert_eq!(terms.start_date(), NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(terms.total_periods(), 24);
    }

    #[test]
    fn test_total_periods_per_frequency() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let expected = [
            (Frequency::Weekly, 156),
            (Frequency::BiWeekly, 78),
            (Frequency::Monthly, 36),
            (Frequency::Quarterly, 12),
            (Frequency::SemiAnnual, 6),
            (Frequency::Annual, 3),
        ];

        for (frequency, periods) in expected {
            let terms = LoanTerms::new(
                dec!(1000),
                dec!(5),
                start,
                3,
                frequency,
                DayCountConvention::Thirty360,
            )
            .unwrap();
            assert_eq!(terms.total_periods(), periods);
        }
    }

    #[test]
    fn test_rejects_non_positive_principal() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        for principal in [dec!(0), dec!(-100)] {
            let err = LoanTerms::new(
                principal,
                dec!(5),
                start,
                1,
                Frequency::Monthly,
                DayCountConvention::ActualOver365,
            )
            .unwrap_err();
            assert_eq!(err, LoanError::InvalidPrincipal { amount: principal });
        }
    }

    #[test]
    fn test_rejects_zero_term() {
        let err = LoanTerms::builder()
            .principal(dec!(1000))
            .annual_rate(dec!(5))
            .start_date_str("2024-01-01")
            .term_years(0)
            .build()
            .unwrap_err();

        assert!(matches!(err, LoanError::InvalidTerm { years: 0, .. }));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_rejects_overflowing_term() {
        let err = LoanTerms::builder()
            .principal(dec!(1000))
            .annual_rate(dec!(5))
            .start_date_str("2024-01-01")
            .term_years(u32::MAX)
            .frequency(Frequency::Weekly)
            .build()
            .unwrap_err();

        assert!(matches!(err, LoanError::InvalidTerm { .. }));
    }

    #[test]
    fn test_malformed_date_surfaces_at_build() {
        for input in ["2024-02-30", "31/01/2024", "", "2024-1-31x"] {
            let err = LoanTerms::builder()
                .principal(dec!(1000))
                .annual_rate(dec!(5))
                .start_date_str(input)
                .term_years(1)
                .build()
                .unwrap_err();
            assert!(matches!(err, LoanError::InvalidDate { .. }), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_missing_fields() {
        let err = LoanTerms::builder().annual_rate(dec!(5)).build().unwrap_err();
        assert_eq!(err, LoanError::MissingField { field: "principal" });

        let err = LoanTerms::builder()
            .principal(dec!(1000))
            .annual_rate(dec!(5))
            .term_years(1)
            .build()
            .unwrap_err();
        assert_eq!(err, LoanError::MissingField { field: "start_date" });
    }

    #[test]
    fn test_zero_rate_is_accepted() {
        let terms = LoanTerms::builder()
            .principal(dec!(1200))
            .annual_rate(dec!(0))
            .start_date_str("2024-01-01")
            .term_years(1)
            .build()
            .unwrap();
        assert!(terms.annual_rate().is_zero());
    }
}

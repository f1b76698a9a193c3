use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::LoanTerms;
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::interest::DayCounter;
use crate::payments::dates::generate_payment_dates;

/// solve the level installment for a set of loan terms
pub fn solve_installment(terms: &LoanTerms) -> Result<Money> {
    let dates = generate_payment_dates(
        terms.start_date(),
        terms.frequency(),
        terms.total_periods(),
    )?;

    solve_installment_for_dates(
        terms.principal(),
        terms.annual_rate(),
        &terms.convention(),
        &dates,
    )
}

/// Level installment whose discounted payments sum to `principal`.
///
/// Each period discounts by `1 + R * year_fraction`, chained multiplicatively
/// across periods, so uneven period lengths are priced exactly. The result is
/// `principal / sum(1 / product_k)` rounded half to even to cents.
pub fn solve_installment_for_dates<C: DayCounter>(
    principal: Decimal,
    annual_rate: Rate,
    convention: &C,
    dates: &[NaiveDate],
) -> Result<Money> {
    let rate = annual_rate.as_decimal();
    let mut product = Decimal::ONE;
    let mut discount_sum = Decimal::ZERO;

    for pair in dates.windows(2) {
        let period = convention.year_fraction(pair[0], pair[1])?;

        let factor = rate
            .checked_mul(period.fraction)
            .and_then(|growth| Decimal::ONE.checked_add(growth))
            .ok_or_else(|| overflow("period growth factor"))?;

        product = product
            .checked_mul(factor)
            .ok_or_else(|| overflow("compounded growth factor"))?;

        let discount = Decimal::ONE
            .checked_div(product)
            .ok_or_else(|| LoanError::ArithmeticError {
                message: format!("growth factor collapsed to zero at {}", pair[1]),
            })?;

        discount_sum = discount_sum
            .checked_add(discount)
            .ok_or_else(|| overflow("discount factor sum"))?;
    }

    if discount_sum.is_zero() {
        return Err(LoanError::ArithmeticError {
            message: "discount factor sum is zero".to_string(),
        });
    }

    let installment = principal
        .checked_div(discount_sum)
        .ok_or_else(|| overflow("installment"))?;

    debug!(
        periods = dates.len().saturating_sub(1),
        convention = convention.name(),
        %discount_sum,
        %installment,
        "solved level installment"
    );

    Ok(Money::from_decimal(installment))
}

pub(crate) fn overflow(what: &str) -> LoanError {
    LoanError::ArithmeticError {
        message: format!("{} overflowed decimal range", what),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::DayCountConvention;
    use crate::types::Frequency;
    use rust_decimal_macros::dec;

    fn terms(
        principal: Decimal,
        rate: Decimal,
        start: &str,
        years: u32,
        frequency: Frequency,
        convention: DayCountConvention,
    ) -> LoanTerms {
        LoanTerms::builder()
            .principal(principal)
            .annual_rate(rate)
            .start_date_str(start)
            .term_years(years)
            .frequency(frequency)
            .convention(convention)
            .build()
            .unwrap()
    }

    #[test]
    fn test_reference_monthly_actual_365() {
        let terms = terms(
            dec!(10000),
            dec!(9),
            "2024-01-31",
            2,
            Frequency::Monthly,
            DayCountConvention::ActualOver365,
        );

        let installment = solve_installment(&terms).unwrap();
        assert_eq!(installment, Money::from_str_exact("456.80").unwrap());

        // deterministic across calls
        assert_eq!(solve_installment(&terms).unwrap(), installment);
    }

    #[test]
    fn test_matches_annuity_formula_for_even_periods() {
        // 30/360 monthly gives r = 1% every period: P * r / (1 - (1 + r)^-n)
        let terms = terms(
            dec!(10000),
            dec!(12),
            "2024-01-15",
            1,
            Frequency::Monthly,
            DayCountConvention::Thirty360,
        );

        assert_eq!(solve_installment(&terms).unwrap(), Money::from_str_exact("888.49").unwrap());
    }

    #[test]
    fn test_annual_periods() {
        let terms = terms(
            dec!(1000),
            dec!(10),
            "2024-01-01",
            2,
            Frequency::Annual,
            DayCountConvention::Thirty360,
        );

        assert_eq!(solve_installment(&terms).unwrap(), Money::from_str_exact("576.19").unwrap());
    }

    #[test]
    fn test_other_frequencies_and_conventions() {
        let quarterly = terms(
            dec!(250000),
            dec!(7.5),
            "2023-11-30",
            5,
            Frequency::Quarterly,
            DayCountConvention::ActualOverActual,
        );
        assert_eq!(
            solve_installment(&quarterly).unwrap(),
            Money::from_str_exact("15104.97").unwrap()
        );

        let weekly = terms(
            dec!(5000),
            dec!(6),
            "2024-01-31",
            1,
            Frequency::Weekly,
            DayCountConvention::ActualOver360,
        );
        assert_eq!(solve_installment(&weekly).unwrap(), Money::from_str_exact("99.16").unwrap());
    }

    #[test]
    fn test_zero_rate_splits_principal_evenly() {
        let terms = terms(
            dec!(1200),
            dec!(0),
            "2024-01-01",
            1,
            Frequency::Monthly,
            DayCountConvention::ActualOver365,
        );

        assert_eq!(solve_installment(&terms).unwrap(), Money::from_major(100));
    }

    #[test]
    fn test_collapsed_growth_factor_is_arithmetic_error() {
        // -100% over a full 30/360 year drives the growth factor to zero
        let terms = terms(
            dec!(1000),
            dec!(-100),
            "2024-01-01",
            1,
            Frequency::Annual,
            DayCountConvention::Thirty360,
        );

        let err = solve_installment(&terms).unwrap_err();
        assert!(matches!(err, LoanError::ArithmeticError { .. }));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_no_periods_is_arithmetic_error() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let err = solve_installment_for_dates(
            dec!(1000),
            Rate::from_percentage(dec!(5)),
            &DayCountConvention::ActualOver365,
            &[start],
        )
        .unwrap_err();

        assert!(matches!(err, LoanError::ArithmeticError { .. }));
    }

    #[test]
    fn test_unordered_dates_rejected() {
        let dates = [
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        ];
        let err = solve_installment_for_dates(
            dec!(1000),
            Rate::from_percentage(dec!(5)),
            &DayCountConvention::ActualOver365,
            &dates,
        )
        .unwrap_err();

        assert!(matches!(err, LoanError::InvalidRange { .. }));
    }
}

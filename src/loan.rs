use chrono::NaiveDate;
use tracing::info;

use crate::config::{LoanTerms, LoanTermsBuilder};
use crate::decimal::Money;
use crate::errors::Result;
use crate::payments::{
    generate_payment_dates, solve_installment_for_dates, AmortizationSchedule, ScheduleSummary,
};
use crate::serialization::LoanResponse;

/// fixed installment loan with its solved installment and schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallmentLoan {
    terms: LoanTerms,
    payment_dates: Vec<NaiveDate>,
    schedule: AmortizationSchedule,
}

impl InstallmentLoan {
    /// roll the payment dates, solve the installment and build the schedule
    pub fn new(terms: LoanTerms) -> Result<Self> {
        let payment_dates = generate_payment_dates(
            terms.start_date(),
            terms.frequency(),
            terms.total_periods(),
        )?;

        let convention = terms.convention();
        let installment = solve_installment_for_dates(
            terms.principal(),
            terms.annual_rate(),
            &convention,
            &payment_dates,
        )?;

        let schedule = AmortizationSchedule::generate_for_dates(
            terms.principal(),
            terms.annual_rate(),
            &convention,
            &payment_dates,
            installment,
        )?;
        let summary = schedule.summary()?;

        info!(
            principal = %terms.principal(),
            rate = %terms.annual_rate(),
            frequency = %terms.frequency(),
            convention = %convention,
            periods = terms.total_periods(),
            %installment,
            total_interest = %summary.total_interest,
            "computed installment loan"
        );

        Ok(Self {
            terms,
            payment_dates,
            schedule,
        })
    }

    /// builder for loan terms that can finish with `build_loan()`
    pub fn builder() -> LoanTermsBuilder {
        LoanTermsBuilder::new()
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// level installment (EMI)
    pub fn installment(&self) -> Money {
        self.schedule.installment()
    }

    /// start date followed by every payment date
    pub fn payment_dates(&self) -> &[NaiveDate] {
        &self.payment_dates
    }

    pub fn maturity_date(&self) -> NaiveDate {
        self.payment_dates
            .last()
            .copied()
            .unwrap_or_else(|| self.terms.start_date())
    }

    pub fn schedule(&self) -> &AmortizationSchedule {
        &self.schedule
    }

    pub fn summary(&self) -> Result<ScheduleSummary> {
        self.schedule.summary()
    }

    pub fn to_response(&self) -> Result<LoanResponse> {
        LoanResponse::from_loan(self)
    }

    /// pretty json of the response view
    pub fn to_json_pretty(&self) -> String {
        match self.to_response() {
            Ok(response) => response
                .to_json_pretty()
                .unwrap_or_else(|e| format!("JSON error: {}", e)),
            Err(e) => format!("JSON error: {}", e),
        }
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}

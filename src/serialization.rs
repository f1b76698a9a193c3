//! request and response views for hosting services
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{LoanTerms, DATE_FORMAT};
use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::interest::DayCountConvention;
use crate::loan::InstallmentLoan;
use crate::payments::{ScheduleRow, ScheduleSummary};
use crate::types::Frequency;

/// loan request as received from a caller; codes are validated on conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub principal: Decimal,
    /// percentage, 9 means 9%
    pub annual_rate: Decimal,
    pub years: u32,
    /// YYYY-MM-DD
    pub start_date: String,
    /// W, BW, M, Q, S or A
    pub frequency: String,
    /// 30/360, Actual/360, Actual/365 or Actual/Actual
    pub convention: String,
}

impl TryFrom<LoanRequest> for LoanTerms {
    type Error = LoanError;

    fn try_from(request: LoanRequest) -> Result<Self> {
        let frequency: Frequency = request.frequency.parse()?;
        let convention: DayCountConvention = request.convention.parse()?;

        LoanTerms::builder()
            .principal(request.principal)
            .annual_rate(request.annual_rate)
            .start_date_str(&request.start_date)
            .term_years(request.years)
            .frequency(frequency)
            .convention(convention)
            .build()
    }
}

/// externalized schedule row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRowView {
    #[serde(rename = "Payment #")]
    pub payment_number: u32,
    #[serde(rename = "Payment Date")]
    pub payment_date: String,
    #[serde(rename = "Opening Balance")]
    pub opening_balance: Money,
    #[serde(rename = "Principal")]
    pub principal: Money,
    #[serde(rename = "Interest")]
    pub interest: Money,
    #[serde(rename = "EMI")]
    pub emi: Money,
    #[serde(rename = "Closing Balance")]
    pub closing_balance: Money,
}

impl From<&ScheduleRow> for ScheduleRowView {
    fn from(row: &ScheduleRow) -> Self {
        ScheduleRowView {
            payment_number: row.period,
            payment_date: row.payment_date.format(DATE_FORMAT).to_string(),
            opening_balance: row.opening_balance,
            principal: row.principal,
            interest: row.interest,
            emi: row.installment,
            closing_balance: row.closing_balance,
        }
    }
}

/// serializable view of a computed loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResponse {
    pub emi: Money,
    pub schedule: Vec<ScheduleRowView>,
    pub summary: ScheduleSummary,
}

impl LoanResponse {
    pub fn from_loan(loan: &InstallmentLoan) -> Result<Self> {
        Ok(LoanResponse {
            emi: loan.installment(),
            schedule: loan.schedule().rows().iter().map(ScheduleRowView::from).collect(),
            summary: loan.summary()?,
        })
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// validate a request, compute the loan and build its response
pub fn calculate(request: LoanRequest) -> Result<LoanResponse> {
    let terms = LoanTerms::try_from(request)?;
    InstallmentLoan::new(terms)?.to_response()
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("unknown payment frequency: {code:?} (expected one of W, BW, M, Q, S, A)")]
    UnknownFrequency {
        code: String,
    },

    #[error("unknown day count convention: {code:?} (expected one of 30/360, Actual/360, Actual/365, Actual/Actual)")]
    UnknownConvention {
        code: String,
    },

    #[error("invalid principal: {amount} must be greater than zero")]
    InvalidPrincipal {
        amount: Decimal,
    },

    #[error("invalid term of {years} years: {message}")]
    InvalidTerm {
        years: u32,
        message: String,
    },

    #[error("invalid date {input:?}: {message}")]
    InvalidDate {
        input: String,
        message: String,
    },

    #[error("missing required field: {field}")]
    MissingField {
        field: &'static str,
    },

    #[error("date out of range: {message}")]
    DateOutOfRange {
        message: String,
    },

    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("arithmetic error: {message}")]
    ArithmeticError {
        message: String,
    },
}

impl LoanError {
    /// true for errors caused by bad caller input
    pub fn is_invalid_input(&self) -> bool {
        !matches!(
            self,
            LoanError::ArithmeticError { .. } | LoanError::InvalidRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_classification() {
        let bad_code = LoanError::UnknownFrequency { code: "D".to_string() };
        assert!(bad_code.is_invalid_input());

        let bad_principal = LoanError::InvalidPrincipal { amount: dec!(-5) };
        assert!(bad_principal.is_invalid_input());

        let degenerate = LoanError::ArithmeticError { message: "zero discount sum".to_string() };
        assert!(!degenerate.is_invalid_input());
    }

    #[test]
    fn test_error_messages_name_the_parameter() {
        let err = LoanError::UnknownConvention { code: "ACT/ACT".to_string() };
        assert!(err.to_string().contains("ACT/ACT"));

        let err = LoanError::InvalidTerm { years: 0, message: "must be at least one year".to_string() };
        assert_eq!(err.to_string(), "invalid term of 0 years: must be at least one year");
    }
}

pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod loan;
pub mod payments;
pub mod serialization;
pub mod types;

// re-export key types
pub use config::{LoanTerms, LoanTermsBuilder};
pub use decimal::{round, Money, Rate};
pub use errors::{LoanError, Result};
pub use interest::{DayCountConvention, DayCounter, YearFraction};
pub use loan::InstallmentLoan;
pub use payments::{
    generate_payment_dates, solve_installment, AmortizationSchedule, ScheduleRow,
    ScheduleSummary,
};
pub use serialization::{calculate, LoanRequest, LoanResponse, ScheduleRowView};
pub use types::Frequency;

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;

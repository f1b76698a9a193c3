pub mod amortization;
pub mod dates;
pub mod installment;

pub use amortization::{AmortizationSchedule, ScheduleRow, ScheduleSummary};
pub use dates::{generate_payment_dates, is_end_of_month, last_day_of_month, roll_date};
pub use installment::{solve_installment, solve_installment_for_dates};

/// quick start - minimal example to get started
use installment_schedule_rs::{DayCountConvention, Frequency, InstallmentLoan};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a 10,000 loan at 9% repaid monthly over two years
    let loan = InstallmentLoan::builder()
        .principal(dec!(10000))
        .annual_rate(dec!(9))
        .start_date_str("2024-01-31")
        .term_years(2)
        .frequency(Frequency::Monthly)
        .convention(DayCountConvention::ActualOver365)
        .build_loan()?;

    println!("EMI = {}", loan.installment());
    println!("maturity = {}", loan.maturity_date());

    let summary = loan.summary()?;
    println!("total interest = {}", summary.total_interest);

    Ok(())
}

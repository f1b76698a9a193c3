/// schedule table - print the full amortization schedule with totals
use installment_schedule_rs::{DayCountConvention, Frequency, InstallmentLoan};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let loan = InstallmentLoan::builder()
        .principal(dec!(25000))
        .annual_rate(dec!(10.5))
        .start_date_str("2024-02-29")
        .term_years(3)
        .frequency(Frequency::Monthly)
        .convention(DayCountConvention::ActualOverActual)
        .build_loan()?;

    println!("\nEMI = {}\n", loan.installment());
    println!(
        "{:<5} {:<12} {:>12} {:>10} {:>10} {:>10} {:>12}",
        "Pmt#", "Date", "Opening", "Principal", "Interest", "EMI", "Closing"
    );

    for row in loan.schedule().rows() {
        println!(
            "{:<5} {:<12} {:>12} {:>10} {:>10} {:>10} {:>12}",
            row.period,
            row.payment_date.format("%Y-%m-%d").to_string(),
            row.opening_balance.to_string(),
            row.principal.to_string(),
            row.interest.to_string(),
            row.installment.to_string(),
            row.closing_balance.to_string(),
        );
    }

    let summary = loan.summary()?;
    println!("\nsummary:");
    println!("  total payments : {}", summary.total_payments);
    println!("  total principal: {}", summary.total_principal);
    println!("  total interest : {}", summary.total_interest);

    Ok(())
}

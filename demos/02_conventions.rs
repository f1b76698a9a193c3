/// conventions - compare installments across day counts and frequencies
use installment_schedule_rs::{DayCountConvention, Frequency, InstallmentLoan};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 50,000 at 8% over 5 years from 2024-01-31 ===\n");
    println!("{:<6} {:<14} {:>10} {:>10} {:>12}", "freq", "convention", "EMI", "last", "interest");

    for frequency in Frequency::ALL {
        for convention in DayCountConvention::ALL {
            let loan = InstallmentLoan::builder()
                .principal(dec!(50000))
                .annual_rate(dec!(8))
                .start_date_str("2024-01-31")
                .term_years(5)
                .frequency(frequency)
                .convention(convention)
                .build_loan()?;

            let last = loan.schedule().final_installment().unwrap_or(loan.installment());
            println!(
                "{:<6} {:<14} {:>10} {:>10} {:>12}",
                frequency.code(),
                convention.code(),
                loan.installment().to_string(),
                last.to_string(),
                loan.summary()?.total_interest.to_string(),
            );
        }
    }

    Ok(())
}

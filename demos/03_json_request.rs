/// json request - the request/response views a hosting service would use
use installment_schedule_rs::{calculate, LoanRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let body = r#"{
        "principal": "10000",
        "annual_rate": "9",
        "years": 2,
        "start_date": "2024-01-31",
        "frequency": "M",
        "convention": "Actual/365"
    }"#;

    let request: LoanRequest = serde_json::from_str(body)?;
    let response = calculate(request)?;
    println!("{}", response.to_json_pretty()?);

    // invalid codes are rejected before any computation
    let bad: LoanRequest = serde_json::from_str(&body.replace("\"M\"", "\"X\""))?;
    match calculate(bad) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("rejected: {}", e),
    }

    Ok(())
}

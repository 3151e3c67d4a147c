/// quick start - single deposit held to maturity
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use time_deposit_rs::{
    export, LedgerEngine, MarginTier, Money, Rate, StatementConfig, TierSchedule, Transaction,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 20.66% base rate with the three-band margin schedule
    let tiers = TierSchedule::new(vec![
        MarginTier::up_to(Money::from_major(50_000), Rate::from_percentage(dec!(8))),
        MarginTier::up_to(Money::from_major(499_000), Rate::from_percentage(dec!(7))),
        MarginTier::unbounded(Rate::from_percentage(dec!(6.5))),
    ])?;
    let config = StatementConfig::new(
        "Ada Obi",
        "0012345678",
        Rate::from_percentage(dec!(20.66)),
        tiers,
        365,
    );

    let engine = LedgerEngine::new(config)?;
    let transactions = vec![Transaction::deposit(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        Money::from_major(100_000),
    )];

    let statement = engine.run(&transactions)?;

    println!("statement for {} ({})", statement.client_name, statement.account_number);
    println!("{}", export::to_csv_string(&statement)?);
    println!("maturity date:  {}", statement.maturity_date);
    println!("net principal:  {}", statement.totals.principal);
    println!("total roi:      {}", statement.totals.roi);
    println!("total value:    {}", statement.totals.total_value);
    println!("export as:      {}", statement.file_name("csv"));

    Ok(())
}

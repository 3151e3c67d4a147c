/// multi-lot scenario - deposits and a FIFO withdrawal
///
/// run with RUST_LOG=debug to watch the engine trace the accrual steps
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use time_deposit_rs::{
    export, Event, LedgerEngine, Money, Rate, StatementConfig, TierSchedule, Transaction,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = StatementConfig::new(
        "Chinedu Eze",
        "0087654321",
        Rate::from_percentage(dec!(20.66)),
        TierSchedule::default(),
        365,
    );
    let engine = LedgerEngine::new(config)?;

    // entered out of order on purpose; the engine re-sorts by date
    let transactions = vec![
        Transaction::withdrawal(date(2025, 6, 1), Money::from_major(80_000)),
        Transaction::deposit(date(2025, 1, 1), Money::from_major(100_000)),
        Transaction::deposit(date(2025, 3, 1), Money::from_major(45_000)),
    ];

    let statement = engine.run(&transactions)?;

    println!("{}", export::to_csv_string(&statement)?);

    let consumed = statement
        .events
        .iter()
        .filter(|event| matches!(event, Event::LotConsumed { .. }))
        .count();
    println!("lots fully consumed by the withdrawal: {}", consumed);
    println!("total value at maturity: {}", statement.totals.total_value);
    println!("{}", export::to_json_pretty(&statement)?);

    Ok(())
}

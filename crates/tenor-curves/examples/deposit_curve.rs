//! Deposit Curve Construction Example
//!
//! Bootstraps a short-end curve from cash deposits and a forward deposit,
//! then prints interpolated spot rates and discount factors.
//!
//! Market Data: spot January 2, 2025 (ACT/360)
//!
//! | Instrument | Period    | Quote  |
//! |------------|-----------|--------|
//! | Deposit    | O/N       | 4.30%  |
//! | Deposit    | 1M        | 4.35%  |
//! | Deposit    | 3M        | 4.42%  |
//! | Deposit    | 6M        | 4.51%  |
//! | Forward    | 6M x 9M   | 95.40  |
//!
//! Run with: RUST_LOG=debug cargo run --example deposit_curve [config.toml]

use tenor_curves::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CurveError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => CurveConfig::from_file(path)?,
        None => CurveConfig::default(),
    };

    let spot = Date::from_ymd(2025, 1, 2)?;

    let instruments: Vec<Instrument> = vec![
        Deposit::from_tenor(spot, "ON", 4.30)?.into(),
        Deposit::from_tenor(spot, "1M", 4.35)?.into(),
        Deposit::from_tenor(spot, "3M", 4.42)?.into(),
        Deposit::from_tenor(spot, "6M", 4.51)?.into(),
        ForwardDeposit::from_months(spot, 6, 9, 95.40)?.into(),
    ];

    let curve = SequentialBootstrapper::new(spot)
        .with_config(config)
        .add_instruments(instruments.iter().copied())
        .bootstrap()?;

    println!("=== CURVE POINTS ({} basis) ===", curve.basis());
    for (date, df) in curve.pillar_discount_factors() {
        let rate = curve.rate_at(date).unwrap_or_default();
        println!("{date}  rate={:.4}%  df={df:.6}", rate * 100.0);
    }

    println!();
    println!("=== INTERPOLATED ===");
    for days in [7, 45, 120, 200, 250] {
        let date = spot + days;
        match (curve.spot_rate(date), curve.discount_factor(date)) {
            (Ok(rate), Ok(df)) => println!("{date}  rate={:.4}%  df={df:.6}", rate * 100.0),
            (Err(e), _) | (_, Err(e)) => println!("{date}  {e}"),
        }
    }

    // Chain the 6M deposit discount factor through the forward period
    if let (Some(deposit), Some(forward)) = (
        instruments[3].as_deposit(),
        instruments[4].as_forward(),
    ) {
        let df_start = deposit.discount_factor(forward.start_date());
        let df_end = forward.discount_factor(df_start);
        println!();
        println!(
            "Chained DF to {}: {df_end:.6} (implied spot rate {:.4}%)",
            forward.maturity_date(),
            forward.spot_rate(df_end, spot) * 100.0
        );
    }

    Ok(())
}

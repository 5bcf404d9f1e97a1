use vaglio::{BandSpec, Vaglio, candles_from_klines};

// A short exchange response: six minute klines, prices as strings, the
// third with zero volume.
const RAW_KLINES: &str = r#"[
  [1672617600000, "16500.10", "16501.00", "16499.80", "16500.60", "12.4", 1672617659999],
  [1672617660000, "16500.60", "16501.40", "16500.10", "16500.90", "10.1", 1672617719999],
  [1672617720000, "16500.90", "16501.20", "16500.50", "16500.70", "0.0",  1672617779999],
  [1672617780000, "16500.70", "16501.80", "16500.40", "16501.50", "14.9", 1672617839999],
  [1672617840000, "16501.50", "16502.30", "16501.10", "16502.00", "11.7", 1672617899999],
  [1672617900000, "16502.00", "16502.60", "16501.60", "16502.40", "13.2", 1672617959999]
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Decode the wire rows into candles.
    let candles = candles_from_klines(RAW_KLINES)?;
    println!("decoded {} candles", candles.len());

    // 2. Screen the batch in memory; short series need short windows.
    let vaglio = Vaglio::builder()
        .bands(BandSpec::new(3, 4.0), BandSpec::new(5, 4.0))
        .build()?;
    let outcome = vaglio.screen(candles)?;

    // 3. The zero-volume minute surfaces as a warning, the trailing
    //    close-only minute as a backfill.
    println!("{}", outcome.report);
    for row in &outcome.validated {
        println!(
            "open_time {}  status {:?}",
            row.candle.open_time, row.status
        );
    }

    Ok(())
}

use std::sync::Arc;

use vaglio::{CandleRequest, Vaglio};
use vaglio_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Install a subscriber so the per-stage totals are visible.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    // 2. Build the screener against the deterministic mock source.
    let vaglio = Vaglio::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;

    // 3. Fetch and screen eight hours of BTCUSDT minutes. The fixture
    //    carries one anomaly of every class the pipeline classifies.
    let outcome = vaglio.run(&CandleRequest::new("BTCUSDT")).await?;

    // 4. Print the operator summary.
    println!("{}", outcome.report);

    // 5. Show every grid point the screen flagged.
    for point in outcome.series.iter().filter(|p| p.status.code() != 0) {
        println!("{}  {:>8.2}  {:?}", point.ts, point.price, point.status);
    }

    Ok(())
}

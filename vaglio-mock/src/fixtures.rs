use vaglio_core::{Candle, MINUTE_MS};

/// Open time of the first fixture candle: 2023-01-02 00:00:00 UTC.
pub const SERIES_START_MS: i64 = 1_672_617_600_000;

/// Grid index of the seeded price spike in the `BTCUSDT` fixture.
pub const BTCUSDT_SPIKE_MINUTE: i64 = 400;

pub fn by_symbol(symbol: &str) -> Option<Vec<Candle>> {
    match symbol {
        "BTCUSDT" => Some(btcusdt()),
        "ETHUSDT" => Some(ethusdt()),
        _ => None,
    }
}

/// A well-formed minute candle on the fixture grid.
fn base_candle(i: i64, px: f64) -> Candle {
    Candle {
        open_time: SERIES_START_MS + i * MINUTE_MS,
        close_time: SERIES_START_MS + i * MINUTE_MS + 59_999,
        open: px,
        high: px + 0.3,
        low: px - 0.3,
        close: px + 0.1,
        volume: 5.0 + (i % 3) as f64,
    }
}

/// Gently trending price path with a small repeating wiggle so no two
/// neighbouring rows repeat and no row has zero OHLC variance.
fn path(i: i64, base: f64) -> f64 {
    base + i as f64 * 0.25 + (i % 5) as f64 * 0.2
}

/// Eight hours of BTCUSDT minutes with one seeded anomaly of every class
/// the pipeline classifies:
///
/// - row 25 repeats row 24's five OHLCV fields (warning)
/// - row 60 trades zero volume (warning)
/// - row 90 prints zero-variance OHLC (warning)
/// - row 130 has a zero-width interval (drop)
/// - row 200 reuses row 199's timestamps (drop via overlap)
/// - rows 300-302 are missing entirely (backfill)
/// - row 400 prints 2000 above trend (discontinuity under default bands)
fn btcusdt() -> Vec<Candle> {
    let mut out = Vec::with_capacity(477);
    for i in 0..480_i64 {
        if (300..=302).contains(&i) {
            continue;
        }
        let mut c = base_candle(i, path(i, 30_000.0));
        match i {
            25 => {
                let prev = base_candle(24, path(24, 30_000.0));
                c.open = prev.open;
                c.high = prev.high;
                c.low = prev.low;
                c.close = prev.close;
                c.volume = prev.volume;
            }
            60 => c.volume = 0.0,
            90 => {
                let px = path(90, 30_000.0);
                c.open = px;
                c.high = px;
                c.low = px;
                c.close = px;
            }
            130 => c.close_time = c.open_time,
            200 => {
                let prev = base_candle(199, path(199, 30_000.0));
                c.open_time = prev.open_time;
                c.close_time = prev.close_time;
            }
            BTCUSDT_SPIKE_MINUTE => {
                let px = path(i, 30_000.0) + 2_000.0;
                c.open = px;
                c.high = px + 0.3;
                c.low = px - 0.3;
                c.close = px + 0.1;
            }
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Six clean hours of ETHUSDT minutes; nothing for the screen to flag
/// beyond the trailing close-only grid point.
fn ethusdt() -> Vec<Candle> {
    (0..360_i64)
        .map(|i| base_candle(i, path(i, 1_500.0)))
        .collect()
}

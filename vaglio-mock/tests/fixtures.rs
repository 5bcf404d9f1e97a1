use vaglio_core::{CandleRequest, CandleSource, MINUTE_MS, VaglioError};
use vaglio_mock::{MockSource, SERIES_START_MS};

#[tokio::test]
async fn fixtures_are_deterministic() {
    let source = MockSource::new();
    let req = CandleRequest::new("BTCUSDT");
    let first = source.minute_candles(&req).await.unwrap();
    let second = source.minute_candles(&req).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 477);
}

#[tokio::test]
async fn btcusdt_carries_the_seeded_anomalies() {
    let candles = MockSource::new()
        .minute_candles(&CandleRequest::new("BTCUSDT"))
        .await
        .unwrap();

    // Row 25 repeats row 24's OHLCV wholesale.
    assert_eq!(candles[25].open, candles[24].open);
    assert_eq!(candles[25].volume, candles[24].volume);
    // Row 60 trades nothing.
    assert_eq!(candles[60].volume, 0.0);
    // Row 90 never moves.
    assert_eq!(candles[90].high, candles[90].low);
    // Row 130 has no width.
    assert_eq!(candles[130].open_time, candles[130].close_time);
    // Row 200 sits on row 199's timestamps.
    assert_eq!(candles[200].open_time, candles[199].open_time);
    // Minutes 300-302 are absent.
    assert!(
        candles
            .iter()
            .all(|c| c.open_time != SERIES_START_MS + 300 * MINUTE_MS)
    );
}

#[tokio::test]
async fn request_bounds_filter_open_times() {
    let start = SERIES_START_MS + 10 * MINUTE_MS;
    let end = SERIES_START_MS + 20 * MINUTE_MS;
    let candles = MockSource::new()
        .minute_candles(&CandleRequest::new("ETHUSDT").between(start, end))
        .await
        .unwrap();
    assert_eq!(candles.len(), 10);
    assert!(candles.iter().all(|c| c.open_time >= start && c.open_time < end));
}

#[tokio::test]
async fn forced_failure_and_unknown_symbols_error() {
    let source = MockSource::new();
    for symbol in ["FAIL", "DOGEUSDT"] {
        let err = source
            .minute_candles(&CandleRequest::new(symbol))
            .await
            .unwrap_err();
        assert!(matches!(err, VaglioError::Source { .. }), "symbol {symbol}");
    }
}

//! Decoding of raw exchange kline rows.
//!
//! Minute klines arrive as a JSON array of 12-element arrays:
//!
//! ```json
//! [
//!   [
//!     1499040000000,      // open time (ms)
//!     "0.00386200",       // open
//!     "0.00386200",       // high
//!     "0.00386200",       // low
//!     "0.00386200",       // close
//!     "0.47000000",       // volume
//!     1499644799999,      // close time (ms)
//!     "0.00181514",       // quote asset volume
//!     1,                  // number of trades
//!     "0.47000000",       // taker buy base asset volume
//!     "0.00181514",       // taker buy quote asset volume
//!     "0"                 // ignore
//!   ]
//! ]
//! ```
//!
//! Only the first seven fields feed the screening pipeline; the rest,
//! including the literal `ignore` column, are dropped on decode. Prices are
//! usually strings but some gateways re-encode them as numbers, so both are
//! accepted.

use serde_json::Value;

use crate::{Candle, VaglioError};

/// Minimum fields a kline row must carry: open time through close time.
const MIN_ROW_LEN: usize = 7;

/// Decode a JSON document of kline rows into candles, preserving order.
///
/// # Errors
/// Returns [`VaglioError::Data`] if the document is not a JSON array of
/// rows, or any row is malformed (see [`candle_from_kline`]).
pub fn candles_from_klines(raw: &str) -> Result<Vec<Candle>, VaglioError> {
    let doc: Value = serde_json::from_str(raw)
        .map_err(|e| VaglioError::data(format!("kline document is not valid JSON: {e}")))?;
    let rows = doc
        .as_array()
        .ok_or_else(|| VaglioError::data("kline document must be a JSON array of rows"))?;
    rows.iter().map(candle_from_kline).collect()
}

/// Decode a single kline row.
///
/// # Errors
/// Returns [`VaglioError::Data`] if the row is not an array of at least
/// seven elements, timestamps are not integers, or a price/volume field is
/// neither a number nor a numeric string.
pub fn candle_from_kline(row: &Value) -> Result<Candle, VaglioError> {
    let fields = row
        .as_array()
        .ok_or_else(|| VaglioError::data("kline row must be a JSON array"))?;
    if fields.len() < MIN_ROW_LEN {
        return Err(VaglioError::data(format!(
            "kline row has {} fields, expected at least {MIN_ROW_LEN}",
            fields.len()
        )));
    }
    Ok(Candle {
        open_time: field_ms(&fields[0], "open time")?,
        open: field_f64(&fields[1], "open")?,
        high: field_f64(&fields[2], "high")?,
        low: field_f64(&fields[3], "low")?,
        close: field_f64(&fields[4], "close")?,
        volume: field_f64(&fields[5], "volume")?,
        close_time: field_ms(&fields[6], "close time")?,
    })
}

fn field_ms(v: &Value, name: &str) -> Result<i64, VaglioError> {
    v.as_i64()
        .ok_or_else(|| VaglioError::data(format!("kline {name} must be an integer timestamp")))
}

fn field_f64(v: &Value, name: &str) -> Result<f64, VaglioError> {
    match v {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| VaglioError::data(format!("kline {name} is out of f64 range"))),
        Value::String(s) => s
            .parse::<f64>()
            .map_err(|_| VaglioError::data(format!("kline {name} is not numeric: {s:?}"))),
        other => Err(VaglioError::data(format!(
            "kline {name} must be a number or numeric string, got {other}"
        ))),
    }
}

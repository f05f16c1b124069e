//! Per-ticker capabilities: quote info and news

use serde::Deserialize;
use serde_json::json;

use super::{CapabilityError, CapabilityResult, parse_args};

/// Known tickers with richer stub rows. Anything else gets a generic row.
const KNOWN: &[(&str, &str, &str, f64)] = &[
  ("AAPL", "Apple Inc.", "NMS", 187.44),
  ("MSFT", "Microsoft Corporation", "NMS", 402.12),
  ("TSLA", "Tesla Inc.", "NMS", 231.90),
  ("NVDA", "NVIDIA Corporation", "NMS", 876.33),
  ("SPY", "SPDR S&P 500 ETF Trust", "PCX", 502.18),
];

fn require_symbol(symbol: &str) -> Result<String, CapabilityError> {
  let symbol = symbol.trim().to_uppercase();
  if symbol.is_empty() {
    return Err(CapabilityError::Failed("symbol must not be empty".to_string()));
  }
  Ok(symbol)
}

/// `get_ticker_info(symbol)` — quote summary for one symbol.
pub fn get_ticker_info(params: &serde_json::Value) -> CapabilityResult {
  #[derive(Deserialize)]
  struct Args {
    symbol: String,
  }

  let args: Args = parse_args(params)?;
  let symbol = require_symbol(&args.symbol)?;

  let (name, exchange, price) = KNOWN
    .iter()
    .find(|(s, ..)| *s == symbol)
    .map(|(_, name, exchange, price)| (name.to_string(), *exchange, *price))
    .unwrap_or_else(|| (format!("{} Holdings", symbol), "NMS", 100.0));

  Ok(json!({
    "symbol": symbol,
    "shortName": name,
    "exchange": exchange,
    "quoteType": "EQUITY",
    "currency": "USD",
    "regularMarketPrice": price,
  }))
}

/// `get_ticker_news(symbol)` — recent headlines for one symbol.
pub fn get_ticker_news(params: &serde_json::Value) -> CapabilityResult {
  #[derive(Deserialize)]
  struct Args {
    symbol: String,
  }

  let args: Args = parse_args(params)?;
  let symbol = require_symbol(&args.symbol)?;

  Ok(json!([
    {
      "title": format!("{} reports quarterly results", symbol),
      "publisher": "Finagent Wire",
      "link": format!("https://news.example.com/{}/earnings", symbol.to_lowercase()),
    },
    {
      "title": format!("Analysts weigh in on {}", symbol),
      "publisher": "Finagent Wire",
      "link": format!("https://news.example.com/{}/analysts", symbol.to_lowercase()),
    },
  ]))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn info_returns_known_row_for_aapl() {
    let result = get_ticker_info(&json!({"symbol": "aapl"})).unwrap();
    assert_eq!(result["symbol"], "AAPL");
    assert_eq!(result["shortName"], "Apple Inc.");
  }

  #[test]
  fn info_falls_back_for_unknown_symbols() {
    let result = get_ticker_info(&json!({"symbol": "ZZZQ"})).unwrap();
    assert_eq!(result["symbol"], "ZZZQ");
    assert_eq!(result["quoteType"], "EQUITY");
  }

  #[test]
  fn missing_symbol_is_an_invocation_failure() {
    let err = get_ticker_info(&json!({})).unwrap_err();
    assert!(matches!(err, CapabilityError::InvalidParams(_)));

    let err = get_ticker_news(&json!({"symbol": "  "})).unwrap_err();
    assert!(matches!(err, CapabilityError::Failed(_)));
  }

  #[test]
  fn news_returns_headlines_for_symbol() {
    let result = get_ticker_news(&json!({"symbol": "TSLA"})).unwrap();
    let items = result.as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items[0]["title"].as_str().unwrap().contains("TSLA"));
  }
}

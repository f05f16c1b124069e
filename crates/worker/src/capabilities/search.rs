//! Free-text search capabilities over the quote universe

use serde::Deserialize;
use serde_json::json;

use super::CapabilityResult;
use super::parse_args;

const DEFAULT_MAX_RESULTS: usize = 8;

/// Searchable quote universe: (symbol, name, exchange, quote type)
const UNIVERSE: &[(&str, &str, &str, &str)] = &[
  ("AAPL", "Apple Inc.", "NMS", "EQUITY"),
  ("MSFT", "Microsoft Corporation", "NMS", "EQUITY"),
  ("GOOGL", "Alphabet Inc.", "NMS", "EQUITY"),
  ("AMZN", "Amazon.com Inc.", "NMS", "EQUITY"),
  ("TSLA", "Tesla Inc.", "NMS", "EQUITY"),
  ("NVDA", "NVIDIA Corporation", "NMS", "EQUITY"),
  ("SPY", "SPDR S&P 500 ETF Trust", "PCX", "ETF"),
  ("QQQ", "Invesco QQQ Trust", "NMS", "ETF"),
  ("VFINX", "Vanguard 500 Index Fund", "NAS", "MUTUALFUND"),
];

/// `search_quote(query, max_results?)` — case-insensitive symbol/name match.
pub fn search_quote(params: &serde_json::Value) -> CapabilityResult {
  #[derive(Deserialize)]
  struct Args {
    query: String,
    #[serde(default)]
    max_results: Option<usize>,
  }

  let args: Args = parse_args(params)?;
  let needle = args.query.trim().to_lowercase();
  let limit = args.max_results.unwrap_or(DEFAULT_MAX_RESULTS);

  let matches: Vec<_> = UNIVERSE
    .iter()
    .filter(|(symbol, name, ..)| {
      symbol.to_lowercase().contains(&needle) || name.to_lowercase().contains(&needle)
    })
    .take(limit)
    .map(|(symbol, name, exchange, quote_type)| {
      json!({
        "symbol": symbol,
        "name": name,
        "exchange": exchange,
        "type": quote_type,
      })
    })
    .collect();

  Ok(json!(matches))
}

/// `search_news(query, news_count?)` — headlines mentioning the query.
pub fn search_news(params: &serde_json::Value) -> CapabilityResult {
  #[derive(Deserialize)]
  struct Args {
    query: String,
    #[serde(default)]
    news_count: Option<usize>,
  }

  let args: Args = parse_args(params)?;
  let query = args.query.trim();
  let limit = args.news_count.unwrap_or(DEFAULT_MAX_RESULTS);

  let stories = [
    format!("Markets digest latest on {}", query),
    format!("{} in focus as earnings season opens", query),
    format!("What analysts expect next for {}", query),
  ];

  let items: Vec<_> = stories
    .iter()
    .take(limit)
    .enumerate()
    .map(|(i, title)| {
      json!({
        "title": title,
        "publisher": "Finagent Wire",
        "link": format!("https://news.example.com/story/{}", i + 1),
      })
    })
    .collect();

  Ok(json!(items))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn quote_search_matches_symbol_and_name() {
    let result = search_quote(&json!({"query": "apple"})).unwrap();
    let items = result.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["symbol"], "AAPL");

    let result = search_quote(&json!({"query": "trust"})).unwrap();
    assert_eq!(result.as_array().unwrap().len(), 2);
  }

  #[test]
  fn quote_search_honors_max_results() {
    let result = search_quote(&json!({"query": "inc", "max_results": 2})).unwrap();
    assert_eq!(result.as_array().unwrap().len(), 2);
  }

  #[test]
  fn quote_search_with_no_match_returns_empty_list() {
    let result = search_quote(&json!({"query": "xyzzy"})).unwrap();
    assert!(result.as_array().unwrap().is_empty());
  }

  #[test]
  fn news_search_honors_news_count() {
    let result = search_news(&json!({"query": "tesla", "news_count": 1})).unwrap();
    let items = result.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0]["title"].as_str().unwrap().contains("tesla"));
  }
}

//! Sector screen capabilities: top ETFs, funds, and company lists

use serde::Deserialize;
use serde_json::json;

use super::CapabilityResult;
use super::parse_args;

#[derive(Deserialize)]
struct SectorArgs {
  #[allow(dead_code)]
  sector: String,
}

#[derive(Deserialize)]
struct SectorTopArgs {
  #[allow(dead_code)]
  sector: String,
  top_n: usize,
}

fn listings(rows: &[(&str, &str)], top_n: usize) -> serde_json::Value {
  let rows: Vec<_> = rows
    .iter()
    .take(top_n)
    .map(|(symbol, name)| json!({"symbol": symbol, "name": name}))
    .collect();
  json!(rows)
}

// Placeholder screen tables. The sector argument is accepted (and required)
// per the method contract, but the stub data is sector-agnostic.

const TOP_ETFS: &[(&str, &str)] = &[("SPY", "SPDR S&P 500 ETF Trust")];

const TOP_MUTUAL_FUNDS: &[(&str, &str)] = &[("VFINX", "Vanguard 500 Index Fund")];

const TOP_COMPANIES: &[(&str, &str)] = &[
  ("AAPL", "Apple Inc."),
  ("MSFT", "Microsoft Corporation"),
  ("GOOGL", "Alphabet Inc."),
];

const TOP_GROWTH: &[(&str, &str)] = &[
  ("TSLA", "Tesla Inc."),
  ("NVDA", "NVIDIA Corporation"),
  ("AMZN", "Amazon.com Inc."),
];

const TOP_PERFORMING: &[(&str, &str)] = &[
  ("NVDA", "NVIDIA Corporation"),
  ("META", "Meta Platforms Inc."),
  ("AVGO", "Broadcom Inc."),
];

/// `get_top_etfs(sector)`
pub fn get_top_etfs(params: &serde_json::Value) -> CapabilityResult {
  let _args: SectorArgs = parse_args(params)?;
  Ok(listings(TOP_ETFS, TOP_ETFS.len()))
}

/// `get_top_mutual_funds(sector)`
pub fn get_top_mutual_funds(params: &serde_json::Value) -> CapabilityResult {
  let _args: SectorArgs = parse_args(params)?;
  Ok(listings(TOP_MUTUAL_FUNDS, TOP_MUTUAL_FUNDS.len()))
}

/// `get_top_companies(sector, top_n)`
pub fn get_top_companies(params: &serde_json::Value) -> CapabilityResult {
  let args: SectorTopArgs = parse_args(params)?;
  Ok(listings(TOP_COMPANIES, args.top_n))
}

/// `get_top_growth_companies(sector, top_n)`
pub fn get_top_growth_companies(params: &serde_json::Value) -> CapabilityResult {
  let args: SectorTopArgs = parse_args(params)?;
  Ok(listings(TOP_GROWTH, args.top_n))
}

/// `get_top_performing_companies(sector, top_n)`
pub fn get_top_performing_companies(params: &serde_json::Value) -> CapabilityResult {
  let args: SectorTopArgs = parse_args(params)?;
  Ok(listings(TOP_PERFORMING, args.top_n))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::capabilities::CapabilityError;
  use serde_json::json;

  #[test]
  fn top_companies_truncates_to_top_n() {
    let result = get_top_companies(&json!({"sector": "tech", "top_n": 1})).unwrap();
    assert_eq!(result, json!([{"symbol": "AAPL", "name": "Apple Inc."}]));

    let result = get_top_companies(&json!({"sector": "tech", "top_n": 3})).unwrap();
    assert_eq!(result.as_array().unwrap().len(), 3);
  }

  #[test]
  fn missing_top_n_is_an_invocation_failure() {
    let err = get_top_growth_companies(&json!({"sector": "tech"})).unwrap_err();
    assert!(matches!(err, CapabilityError::InvalidParams(_)));
  }

  #[test]
  fn etfs_and_funds_need_only_a_sector() {
    let etfs = get_top_etfs(&json!({"sector": "tech"})).unwrap();
    assert_eq!(etfs, json!([{"symbol": "SPY", "name": "SPDR S&P 500 ETF Trust"}]));

    let funds = get_top_mutual_funds(&json!({"sector": "tech"})).unwrap();
    assert_eq!(funds, json!([{"symbol": "VFINX", "name": "Vanguard 500 Index Fund"}]));
  }

  #[test]
  fn growth_and_performing_lead_with_expected_rows() {
    let growth = get_top_growth_companies(&json!({"sector": "tech", "top_n": 1})).unwrap();
    assert_eq!(growth, json!([{"symbol": "TSLA", "name": "Tesla Inc."}]));

    let performing = get_top_performing_companies(&json!({"sector": "tech", "top_n": 1})).unwrap();
    assert_eq!(performing, json!([{"symbol": "NVDA", "name": "NVIDIA Corporation"}]));
  }
}

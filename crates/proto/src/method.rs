use serde::{Deserialize, Serialize};

/// Capability names exposed by the worker's registry.
///
/// The wire format carries methods as plain strings so that an unknown name
/// can be answered with a "Method not found" response instead of a parse
/// failure; this enum is the typed view used by the dispatcher and prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
  // Ticker
  GetTickerInfo,
  GetTickerNews,
  // Search
  SearchQuote,
  SearchNews,
  // Sector screens
  GetTopEtfs,
  GetTopMutualFunds,
  GetTopCompanies,
  GetTopGrowthCompanies,
  GetTopPerformingCompanies,
}

impl Method {
  /// All registered capabilities, in the order they are advertised to the model.
  pub const ALL: [Method; 9] = [
    Method::GetTickerInfo,
    Method::GetTickerNews,
    Method::SearchQuote,
    Method::SearchNews,
    Method::GetTopEtfs,
    Method::GetTopMutualFunds,
    Method::GetTopCompanies,
    Method::GetTopGrowthCompanies,
    Method::GetTopPerformingCompanies,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Method::GetTickerInfo => "get_ticker_info",
      Method::GetTickerNews => "get_ticker_news",
      Method::SearchQuote => "search_quote",
      Method::SearchNews => "search_news",
      Method::GetTopEtfs => "get_top_etfs",
      Method::GetTopMutualFunds => "get_top_mutual_funds",
      Method::GetTopCompanies => "get_top_companies",
      Method::GetTopGrowthCompanies => "get_top_growth_companies",
      Method::GetTopPerformingCompanies => "get_top_performing_companies",
    }
  }
}

impl std::fmt::Display for Method {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for Method {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "get_ticker_info" => Ok(Method::GetTickerInfo),
      "get_ticker_news" => Ok(Method::GetTickerNews),
      "search_quote" => Ok(Method::SearchQuote),
      "search_news" => Ok(Method::SearchNews),
      "get_top_etfs" => Ok(Method::GetTopEtfs),
      "get_top_mutual_funds" => Ok(Method::GetTopMutualFunds),
      "get_top_companies" => Ok(Method::GetTopCompanies),
      "get_top_growth_companies" => Ok(Method::GetTopGrowthCompanies),
      "get_top_performing_companies" => Ok(Method::GetTopPerformingCompanies),
      _ => Err(()),
    }
  }
}

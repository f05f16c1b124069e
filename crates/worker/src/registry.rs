//! Method dispatch for the worker process

use std::str::FromStr;

use proto::{METHOD_NOT_FOUND, Method, Request, Response};
use tracing::{debug, warn};

use crate::capabilities::{search, sector, ticker};

/// Registry mapping method names to capabilities.
///
/// Read-only after construction; the serve loop holds one instance for the
/// life of the process.
#[derive(Debug, Default, Clone)]
pub struct Registry;

impl Registry {
  pub fn new() -> Self {
    Self
  }

  /// Handle one request, always producing a response.
  ///
  /// Unknown methods and capability failures are reported through the
  /// response `error` string; nothing here panics or exits.
  pub fn dispatch(&self, request: Request) -> Response {
    debug!(method = %request.method, "Handling request");

    let Ok(method) = Method::from_str(&request.method) else {
      warn!(method = %request.method, "Unknown method");
      return Response::failure(METHOD_NOT_FOUND);
    };

    let outcome = match method {
      Method::GetTickerInfo => ticker::get_ticker_info(&request.params),
      Method::GetTickerNews => ticker::get_ticker_news(&request.params),
      Method::SearchQuote => search::search_quote(&request.params),
      Method::SearchNews => search::search_news(&request.params),
      Method::GetTopEtfs => sector::get_top_etfs(&request.params),
      Method::GetTopMutualFunds => sector::get_top_mutual_funds(&request.params),
      Method::GetTopCompanies => sector::get_top_companies(&request.params),
      Method::GetTopGrowthCompanies => sector::get_top_growth_companies(&request.params),
      Method::GetTopPerformingCompanies => sector::get_top_performing_companies(&request.params),
    };

    match outcome {
      Ok(result) => Response::success(result),
      Err(e) => {
        warn!(method = %method, err = %e, "Capability failed");
        Response::failure(e.to_string())
      }
    }
  }
}

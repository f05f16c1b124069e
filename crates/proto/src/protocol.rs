//! Wire types for the worker RPC protocol.
//!
//! Framing is one UTF-8 JSON value per newline-terminated line, in both
//! directions. There is no request id: the transport is strictly
//! half-duplex, so correlation is positional — the client never sends a
//! second request before reading the response to the first.

use serde::{Deserialize, Serialize};

/// Error message the worker emits for a line that is not valid JSON.
pub const MALFORMED_REQUEST: &str = "Invalid JSON input";

/// Error message the worker emits for an unregistered method name.
pub const METHOD_NOT_FOUND: &str = "Method not found";

/// One request line sent to the worker.
///
/// `method` is a plain string rather than [`crate::Method`] so that an
/// unknown name still parses and can be answered with
/// [`METHOD_NOT_FOUND`] instead of a malformed-request error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
  pub method: String,
  #[serde(default)]
  pub params: serde_json::Value,
}

impl Request {
  pub fn new(method: impl Into<String>, params: serde_json::Value) -> Self {
    Self {
      method: method.into(),
      params,
    }
  }
}

/// One response line emitted by the worker.
///
/// Exactly one of `result` / `error` is non-null. Both fields are always
/// serialized (nulls included) — the wire shape is part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
  pub result: Option<serde_json::Value>,
  pub error: Option<String>,
}

impl Response {
  pub fn success(result: serde_json::Value) -> Self {
    Self {
      result: Some(result),
      error: None,
    }
  }

  pub fn failure(message: impl Into<String>) -> Self {
    Self {
      result: None,
      error: Some(message.into()),
    }
  }

  /// Serialize to a single line of JSON, without the trailing newline.
  ///
  /// The line is guaranteed newline-free: serde_json escapes control
  /// characters inside strings, so an embedded `\n` in a result value can
  /// never break the framing.
  pub fn to_line(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string(self)
  }

  pub fn from_line(line: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(line.trim())
  }
}

/// A tool call parsed out of LLM reply text.
///
/// Purely transient: created per reply, fed to the RPC client, and
/// discarded once its result has been spliced back into the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
  pub name: String,
  #[serde(default)]
  pub parameters: serde_json::Value,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn success_response_matches_wire_shape() {
    let response = Response::success(json!([{"symbol": "AAPL", "name": "Apple Inc."}]));
    assert_eq!(
      response.to_line().unwrap(),
      r#"{"result":[{"symbol":"AAPL","name":"Apple Inc."}],"error":null}"#
    );
  }

  #[test]
  fn failure_response_matches_wire_shape() {
    let response = Response::failure(METHOD_NOT_FOUND);
    assert_eq!(response.to_line().unwrap(), r#"{"result":null,"error":"Method not found"}"#);

    let response = Response::failure(MALFORMED_REQUEST);
    assert_eq!(response.to_line().unwrap(), r#"{"result":null,"error":"Invalid JSON input"}"#);
  }

  #[test]
  fn response_round_trip_is_idempotent() {
    let original = Response::success(json!({"price": 187.44, "note": "line one\nline two"}));
    let line = original.to_line().unwrap();
    assert!(!line.contains('\n'), "framing must stay single-line");

    let reparsed = Response::from_line(&line).unwrap();
    assert_eq!(reparsed, original);
    assert_eq!(reparsed.to_line().unwrap(), line);
  }

  #[test]
  fn request_params_default_to_null_when_absent() {
    let request: Request = serde_json::from_str(r#"{"method":"get_ticker_info"}"#).unwrap();
    assert_eq!(request.method, "get_ticker_info");
    assert!(request.params.is_null());
  }

  #[test]
  fn tool_invocation_parses_with_and_without_parameters() {
    let invocation: ToolInvocation =
      serde_json::from_str(r#"{"name":"get_ticker_info","parameters":{"symbol":"AAPL"}}"#).unwrap();
    assert_eq!(invocation.name, "get_ticker_info");
    assert_eq!(invocation.parameters, json!({"symbol": "AAPL"}));

    let bare: ToolInvocation = serde_json::from_str(r#"{"name":"search_news"}"#).unwrap();
    assert!(bare.parameters.is_null());
  }
}

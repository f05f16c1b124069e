//! Capability implementations behind the worker registry
//!
//! Each capability deserializes its own `Args` struct from the request
//! params; missing or ill-typed keys surface as invocation failures carried
//! in the response `error` string, never as protocol failures. The data
//! itself is deterministic placeholder material standing behind the fixed
//! method contract.

pub mod search;
pub mod sector;
pub mod ticker;

use thiserror::Error;

/// A failure raised by a capability during execution.
///
/// The registry converts this into a response with `error` set; it never
/// escapes the worker as a crash.
#[derive(Debug, Error)]
pub enum CapabilityError {
  #[error("Invalid params: {0}")]
  InvalidParams(#[from] serde_json::Error),
  #[error("{0}")]
  Failed(String),
}

pub type CapabilityResult = Result<serde_json::Value, CapabilityError>;

/// Parse the params value into a capability's `Args` struct.
///
/// A `null` params value (absent on the wire) is treated as an empty map so
/// that capabilities whose arguments all have defaults still work.
pub(crate) fn parse_args<T: serde::de::DeserializeOwned>(params: &serde_json::Value) -> Result<T, CapabilityError> {
  let value = if params.is_null() {
    serde_json::Value::Object(serde_json::Map::new())
  } else {
    params.clone()
  };
  Ok(serde_json::from_value(value)?)
}

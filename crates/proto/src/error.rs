use thiserror::Error;

/// Client-side failures for a single worker call.
///
/// Capability failures are not represented here — those travel inside a
/// well-formed [`crate::Response`] with its `error` field set. This enum
/// covers the cases where no usable response line came back at all.
#[derive(Debug, Error)]
pub enum RpcError {
  /// The worker process was already dead when the call was attempted,
  /// or it closed its output stream mid-call.
  #[error("worker process terminated")]
  ProcessTerminated,

  /// Writing the request line failed (broken pipe, closed stdin).
  #[error("transport error: {0}")]
  Transport(String),

  /// The response line was empty or not valid JSON. Carries the raw
  /// offending line for diagnostics.
  #[error("invalid response from worker: {line:?}")]
  Protocol { line: String },

  /// No response line arrived within the configured deadline.
  #[error("worker call timed out after {0} seconds")]
  Timeout(u64),

  #[error("failed to serialize request: {0}")]
  Serialize(#[from] serde_json::Error),
}

//! Integration tests for the worker serve loop
//!
//! Drives `serve()` with in-memory streams, asserting the exact wire bytes
//! the protocol scenarios require and that bad input never kills the loop.

use tokio::io::BufReader;
use worker::{Registry, serve};

async fn run_lines(input: &str) -> Vec<String> {
  let registry = Registry::new();
  let reader = BufReader::new(input.as_bytes());
  let mut output: Vec<u8> = Vec::new();

  serve(&registry, reader, &mut output).await.expect("serve should not fail");

  String::from_utf8(output)
    .expect("output should be UTF-8")
    .lines()
    .map(str::to_string)
    .collect()
}

#[tokio::test]
async fn known_method_returns_result_with_null_error() {
  let output = run_lines("{\"method\":\"get_top_companies\",\"params\":{\"sector\":\"tech\",\"top_n\":1}}\n").await;
  assert_eq!(
    output,
    vec![r#"{"result":[{"symbol":"AAPL","name":"Apple Inc."}],"error":null}"#]
  );
}

#[tokio::test]
async fn unknown_method_returns_method_not_found() {
  let output = run_lines("{\"method\":\"bogus\",\"params\":{}}\n").await;
  assert_eq!(output, vec![r#"{"result":null,"error":"Method not found"}"#]);
}

#[tokio::test]
async fn malformed_line_returns_invalid_json_input() {
  let output = run_lines("not json\n").await;
  assert_eq!(output, vec![r#"{"result":null,"error":"Invalid JSON input"}"#]);
}

#[tokio::test]
async fn loop_survives_bad_input_and_keeps_answering() {
  let input = concat!(
    "not json\n",
    "{\"method\":\"bogus\",\"params\":{}}\n",
    "{\"method\":\"get_top_etfs\",\"params\":{\"sector\":\"tech\"}}\n",
    "{\"method\":\"get_ticker_info\",\"params\":{}}\n",
    "{\"method\":\"get_top_companies\",\"params\":{\"sector\":\"tech\",\"top_n\":1}}\n",
  );

  let output = run_lines(input).await;
  assert_eq!(output.len(), 5, "every request line gets exactly one response line");
  assert_eq!(output[0], r#"{"result":null,"error":"Invalid JSON input"}"#);
  assert_eq!(output[1], r#"{"result":null,"error":"Method not found"}"#);
  assert!(output[2].contains("SPY"));
  assert!(output[3].contains("Invalid params"), "capability failure, not a crash: {}", output[3]);
  assert_eq!(output[4], r#"{"result":[{"symbol":"AAPL","name":"Apple Inc."}],"error":null}"#);
}

#[tokio::test]
async fn every_response_is_a_single_parseable_line() {
  let input = concat!(
    "{\"method\":\"get_ticker_news\",\"params\":{\"symbol\":\"AAPL\"}}\n",
    "{\"method\":\"search_quote\",\"params\":{\"query\":\"trust\",\"max_results\":1}}\n",
  );

  let output = run_lines(input).await;
  assert_eq!(output.len(), 2);
  for line in &output {
    let response = proto::Response::from_line(line).expect("each line parses as a Response");
    assert!(response.result.is_some());
    assert!(response.error.is_none());
  }
}

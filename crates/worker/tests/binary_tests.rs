//! End-to-end tests against the real finagent-worker binary
//!
//! Spawns the binary with piped stdin/stdout and speaks the line protocol
//! directly, covering the full request → dispatch → response path plus
//! shutdown on end-of-input.

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;

#[tokio::test]
async fn worker_binary_answers_each_line_and_exits_on_eof() {
  let mut child = Command::new(env!("CARGO_BIN_EXE_finagent-worker"))
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::null())
    .spawn()
    .expect("worker binary should spawn");

  let mut stdin = child.stdin.take().unwrap();
  let stdout = child.stdout.take().unwrap();
  let mut lines = BufReader::new(stdout).lines();

  let requests = [
    "{\"method\":\"get_top_companies\",\"params\":{\"sector\":\"tech\",\"top_n\":1}}\n",
    "{\"method\":\"bogus\",\"params\":{}}\n",
    "not json\n",
    "{\"method\":\"get_ticker_info\",\"params\":{\"symbol\":\"AAPL\"}}\n",
  ];
  let expected = [
    Some(r#"{"result":[{"symbol":"AAPL","name":"Apple Inc."}],"error":null}"#),
    Some(r#"{"result":null,"error":"Method not found"}"#),
    Some(r#"{"result":null,"error":"Invalid JSON input"}"#),
    None, // shape checked below
  ];

  for (request, expected) in requests.iter().zip(expected) {
    stdin.write_all(request.as_bytes()).await.unwrap();
    stdin.flush().await.unwrap();

    let line = lines
      .next_line()
      .await
      .unwrap()
      .expect("one response line per request line");
    if let Some(expected) = expected {
      assert_eq!(line, expected);
    } else {
      let response = proto::Response::from_line(&line).unwrap();
      assert!(response.error.is_none());
      assert_eq!(response.result.unwrap()["symbol"], "AAPL");
    }
  }

  // Closing stdin ends the serve loop
  drop(stdin);
  let status = child.wait().await.unwrap();
  assert!(status.success());
}

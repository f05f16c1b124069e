//! Line-based serve loop over the worker's input/output streams

use proto::{MALFORMED_REQUEST, Request, Response};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::Registry;

/// Serve requests until end-of-input.
///
/// One request line in, one response line out, flushed before the next
/// read — the client blocks on that line, so buffering a response would
/// deadlock the session. Malformed lines get a response too; only EOF (or
/// an I/O error on the streams themselves) ends the loop.
pub async fn serve<R, W>(registry: &Registry, reader: R, mut writer: W) -> std::io::Result<()>
where
  R: AsyncBufRead + Unpin,
  W: AsyncWrite + Unpin,
{
  let mut lines = reader.lines();

  while let Some(line) = lines.next_line().await? {
    let response = match serde_json::from_str::<Request>(&line) {
      Ok(request) => registry.dispatch(request),
      Err(e) => {
        warn!(err = %e, line_preview = %line.chars().take(120).collect::<String>(), "Malformed request line");
        Response::failure(MALFORMED_REQUEST)
      }
    };

    let mut out = response.to_line().map_err(std::io::Error::other)?;
    out.push('\n');
    writer.write_all(out.as_bytes()).await?;
    writer.flush().await?;
  }

  debug!("Input stream closed, worker loop ending");
  Ok(())
}

//! Tool-block extraction from model replies
//!
//! The model requests data by embedding `<tool>{...}</tool>` regions in its
//! free-text reply. This module finds those regions, parses each interior
//! as a [`ToolInvocation`], and reports the byte span of the whole region
//! so the orchestrator can splice results back in by range.

use std::ops::Range;

use proto::ToolInvocation;
use tracing::{trace, warn};

/// Opening marker of an embedded tool call
pub const OPEN_MARKER: &str = "<tool>";
/// Closing marker of an embedded tool call
pub const CLOSE_MARKER: &str = "</tool>";

/// A parsed tool call together with the region of text it came from.
///
/// `span` covers the full region including both markers, so replacing
/// `text[span]` removes the call from the reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolBlock {
  pub invocation: ToolInvocation,
  pub span: Range<usize>,
}

/// Extract all well-formed tool blocks from `text`, in order of appearance.
///
/// Marker pairs are matched non-overlapping, left to right, with multiline
/// interiors allowed. A region whose interior is not a valid invocation is
/// logged and skipped; malformed input never fails the whole reply. An
/// unmatched open marker ends the scan.
pub fn extract_tool_blocks(text: &str) -> Vec<ToolBlock> {
  let mut blocks = Vec::new();
  let mut cursor = 0;

  while let Some(open_rel) = text[cursor..].find(OPEN_MARKER) {
    let open = cursor + open_rel;
    let interior_start = open + OPEN_MARKER.len();

    let Some(close_rel) = text[interior_start..].find(CLOSE_MARKER) else {
      trace!(offset = open, "Unmatched open marker, stopping scan");
      break;
    };
    let interior_end = interior_start + close_rel;
    let end = interior_end + CLOSE_MARKER.len();
    cursor = end;

    let interior = text[interior_start..interior_end].trim();
    match serde_json::from_str::<ToolInvocation>(interior) {
      Ok(invocation) => {
        trace!(name = %invocation.name, span_start = open, span_end = end, "Extracted tool block");
        blocks.push(ToolBlock {
          invocation,
          span: open..end,
        });
      }
      Err(e) => {
        warn!(
            err = %e,
            interior_preview = %interior.chars().take(120).collect::<String>(),
            "Skipping malformed tool block"
        );
      }
    }
  }

  blocks
}

/// Render the result region spliced into the reply in place of a tool block.
pub fn render_result_block(payload: &serde_json::Value) -> String {
  let body = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
  format!("<tool_result>\n{}\n</tool_result>", body)
}

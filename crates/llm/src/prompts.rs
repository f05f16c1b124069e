//! Prompt text for the finance assistant

use proto::Method;

/// Directive appended after tool results have been spliced into a reply,
/// before the second completion call.
pub const SUMMARY_DIRECTIVE: &str = "Summarize the results in a helpful way. Do not show the raw JSON.";

/// Build the system prompt that opens every conversation.
///
/// Enumerates the registered capabilities so the model knows which names it
/// may call through `<tool>{...}</tool>` blocks.
pub fn system_prompt() -> String {
  let mut prompt = String::from(
    "You are a financial assistant. When necessary, you use tools via <tool>{...}</tool> format.\n\
     A tool block contains a JSON object with \"name\" and \"parameters\" keys.\n\
     Here are the tools you can use:\n",
  );
  for method in Method::ALL {
    prompt.push_str("- ");
    prompt.push_str(method.as_str());
    prompt.push('\n');
  }
  prompt.push_str("\nYou will use the <tool> JSON blocks to call these tools.\n");
  prompt
}

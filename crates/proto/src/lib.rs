mod error;
mod method;
mod protocol;

pub use error::RpcError;
pub use method::Method;
pub use protocol::{MALFORMED_REQUEST, METHOD_NOT_FOUND, Request, Response, ToolInvocation};

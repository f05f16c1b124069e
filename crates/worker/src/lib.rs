//! Worker process: capability registry, dispatch, and the line-based serve loop.

pub mod capabilities;
mod registry;
mod serve;

pub use capabilities::CapabilityError;
pub use registry::Registry;
pub use serve::serve;

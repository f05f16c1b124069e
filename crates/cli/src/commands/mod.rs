mod chat;
mod config;

pub use chat::cmd_chat;
pub use config::cmd_config;

mod config;
mod fetch;

pub use config::handle_config_command;
pub use fetch::handle_fetch_command;

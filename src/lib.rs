pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::config::{toml_config::TomlConfig, CliArgs, ServiceConfig};
pub use crate::core::{client::UpstreamClient, regroup::regroup};
pub use crate::server::{build_router, serve, AppState};
pub use crate::utils::error::{Result, ServiceError};

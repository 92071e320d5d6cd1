pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::client::{CpfClient, EndpointReply};
pub use config::toml_config::TomlConfig;
pub use crate::core::cpf::is_valid;
pub use crate::core::handler::evaluate_body;
pub use utils::error::{CpfError, RequestRejection, Result};

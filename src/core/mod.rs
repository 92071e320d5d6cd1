pub mod cpf;
pub mod handler;

pub use crate::domain::ports::ConfigProvider;

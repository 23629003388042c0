//! Application layer: rule dispatch, the shop, configuration and fixtures.

pub mod config;
pub mod dispatcher;
pub mod fixtures;
pub mod shop;


pub use config::{AgingConfig, ConfigError};
pub use dispatcher::{DispatchError, RuleDispatcher};
pub use shop::Shop;

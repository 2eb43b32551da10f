//! REST 接口模块

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{
    CommandResponse, ConfigResponse, ResponseStatus,
};

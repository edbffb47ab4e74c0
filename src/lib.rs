pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{operations, target::Target};
pub use crate::domain::model::{ElementInfo, ElementKey, ElementRow, TargetReport};
pub use crate::utils::error::{Result, TargetError};

pub mod operations;
pub mod target;

pub use crate::domain::model::{ElementInfo, ElementKey, ElementRow, TargetReport};
pub use crate::utils::error::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TargetError {
    #[error("element {element} in group {group} is not on the target")]
    ElementNotFound { group: i32, element: i32 },

    #[error("the target has no elements; add an element to the design first")]
    EmptyTarget,

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TargetError>;

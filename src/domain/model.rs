use serde::{Deserialize, Serialize};
use std::fmt;

/// One resolution pattern cell on a USAF 1951 target, identified by its
/// group and element numbers. Element conventionally cycles 1-6 within a
/// group, but any integer pair is a valid key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementKey {
    pub group: i32,
    pub element: i32,
}

impl ElementKey {
    pub fn new(group: i32, element: i32) -> Self {
        Self { group, element }
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group {}, element {}", self.group, self.element)
    }
}

/// Dimensions derived from an [`ElementKey`]. Always the formula module's
/// output for the key, never set by hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementInfo {
    pub line_pairs_per_mm: f64,
    pub width_um: f64,
    pub height_um: f64,
}

/// One row of a target report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRow {
    pub key: ElementKey,
    #[serde(flatten)]
    pub info: ElementInfo,
}

/// Structured output of [`Target::report`](crate::Target::report): target
/// metadata, element rows in insertion order, and the critical dimension.
/// `critical_dimension_um` is `None` when the target has no elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetReport {
    pub height_in: i32,
    pub width_in: i32,
    pub thickness_mm: f64,
    pub material: String,
    pub elements: Vec<ElementRow>,
    pub critical_dimension_um: Option<f64>,
}

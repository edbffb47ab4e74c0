use crate::core::operations;
use crate::domain::model::{ElementInfo, ElementKey, ElementRow, TargetReport};
use crate::utils::error::{Result, TargetError};

/// A custom USAF 1951 resolution target design: substrate metadata plus the
/// set of group/element patterns placed on it.
///
/// Elements are kept in insertion order so reports are deterministic.
/// Every stored [`ElementInfo`] is exactly the output of the
/// [`operations`] formulas for its key.
#[derive(Debug, Clone)]
pub struct Target {
    height_in: i32,
    width_in: i32,
    thickness_mm: f64,
    material: String,
    elements: Vec<(ElementKey, ElementInfo)>,
}

impl Target {
    /// Creates an empty target with the given substrate dimensions
    /// (height and width in inches, thickness in millimeters) and material.
    pub fn new(
        height_in: i32,
        width_in: i32,
        thickness_mm: f64,
        material: impl Into<String>,
    ) -> Self {
        Self {
            height_in,
            width_in,
            thickness_mm,
            material: material.into(),
            elements: Vec::new(),
        }
    }

    pub fn height_in(&self) -> i32 {
        self.height_in
    }

    pub fn width_in(&self) -> i32 {
        self.width_in
    }

    pub fn thickness_mm(&self) -> f64 {
        self.thickness_mm
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    /// Number of elements currently on the design.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The computed dimensions for a key, if that element is on the design.
    pub fn element(&self, key: ElementKey) -> Option<&ElementInfo> {
        self.elements.iter().find(|(k, _)| *k == key).map(|(_, info)| info)
    }

    /// Iterates elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementKey, &ElementInfo)> + '_ {
        self.elements.iter().map(|(k, info)| (*k, info))
    }

    /// Adds an element to the design, computing its lp/mm, width, and
    /// height. Re-adding an existing key recomputes and replaces it in
    /// place, so the call is idempotent.
    pub fn add_element(&mut self, group: i32, element: i32) {
        let key = ElementKey::new(group, element);
        let info = ElementInfo {
            line_pairs_per_mm: operations::line_pairs_per_mm(group, element),
            width_um: operations::line_width_um(group, element),
            height_um: operations::line_height_um(group, element),
        };

        match self.elements.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = info,
            None => self.elements.push((key, info)),
        }
        tracing::debug!(
            "added {}: {:.2} lp/mm, {:.2} um wide",
            key,
            info.line_pairs_per_mm,
            info.width_um
        );
    }

    /// Removes an element from the design. A missing key is reported as
    /// [`TargetError::ElementNotFound`] and leaves the target unchanged;
    /// the target stays usable either way.
    pub fn remove_element(&mut self, group: i32, element: i32) -> Result<()> {
        let key = ElementKey::new(group, element);
        match self.elements.iter().position(|(k, _)| *k == key) {
            Some(index) => {
                self.elements.remove(index);
                Ok(())
            }
            None => Err(TargetError::ElementNotFound { group, element }),
        }
    }

    /// The critical dimension: the smallest line width on the design, in
    /// microns. An empty design is [`TargetError::EmptyTarget`].
    pub fn critical_dimension(&self) -> Result<f64> {
        self.elements
            .iter()
            .map(|(_, info)| info.width_um)
            .fold(None, |min, width| match min {
                Some(m) if m <= width => Some(m),
                _ => Some(width),
            })
            .ok_or(TargetError::EmptyTarget)
    }

    /// Produces the structured report: metadata, element rows in insertion
    /// order, and the critical dimension (`None` when there are no
    /// elements). Rendering is the caller's concern.
    pub fn report(&self) -> TargetReport {
        TargetReport {
            height_in: self.height_in,
            width_in: self.width_in,
            thickness_mm: self.thickness_mm,
            material: self.material.clone(),
            elements: self
                .elements
                .iter()
                .map(|(key, info)| ElementRow { key: *key, info: *info })
                .collect(),
            critical_dimension_um: self.critical_dimension().ok(),
        }
    }
}

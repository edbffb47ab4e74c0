use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "build_target")]
#[command(about = "Build a USAF 1951 resolution target design from a group/element range")]
pub struct CliConfig {
    /// Target height in inches
    pub height: i32,

    /// Target width in inches
    pub width: i32,

    /// Substrate thickness in millimeters
    pub thickness: f64,

    /// Substrate material, e.g. "soda lime"
    pub material: String,

    /// First group to add (may be negative)
    #[arg(allow_negative_numbers = true)]
    pub group_start: i32,

    /// End of the group range (exclusive)
    #[arg(allow_negative_numbers = true)]
    pub group_end: i32,

    /// First element to add within each group
    #[arg(allow_negative_numbers = true)]
    pub element_start: i32,

    /// End of the element range (exclusive)
    #[arg(allow_negative_numbers = true)]
    pub element_end: i32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit the report as JSON instead of a table")]
    pub json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_dimension("height", self.height)?;
        validation::validate_dimension("width", self.width)?;
        validation::validate_thickness("thickness", self.thickness)?;
        validation::validate_material("material", &self.material)?;
        validation::validate_range("group range", self.group_start, self.group_end)?;
        validation::validate_range("element range", self.element_start, self.element_end)?;
        Ok(())
    }
}

//! Plain-text rendering of a [`TargetReport`].

use crate::domain::model::TargetReport;
use std::fmt::Write;

/// Formats a report as the human-readable table the CLI prints: a specs
/// block, one row per element in insertion order, and the critical
/// dimension (or a "no elements" notice for an empty design).
pub fn render_report(report: &TargetReport) -> String {
    let mut out = String::new();

    // Infallible writes; String's fmt::Write never errors.
    let _ = writeln!(out, "Target Specs");
    let _ = writeln!(out, "---------------");
    let _ = writeln!(out, "Height:    {} in", report.height_in);
    let _ = writeln!(out, "Width:     {} in", report.width_in);
    let _ = writeln!(out, "Thickness: {} mm", report.thickness_mm);
    let _ = writeln!(out, "Material:  {}", report.material);

    if report.elements.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "No elements found.");
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Elements");
    let _ = writeln!(out, "---------------");
    let _ = writeln!(
        out,
        "{:>5}  {:>7}  {:>8}  {:>9}  {:>10}",
        "group", "element", "lp/mm", "width(um)", "height(um)"
    );
    for row in &report.elements {
        let _ = writeln!(
            out,
            "{:>5}  {:>7}  {:>8.2}  {:>9.2}  {:>10.2}",
            row.key.group,
            row.key.element,
            row.info.line_pairs_per_mm,
            row.info.width_um,
            row.info.height_um
        );
    }

    if let Some(cd) = report.critical_dimension_um {
        let _ = writeln!(out);
        let _ = writeln!(out, "The critical dimension is {:.2} microns.", cd);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::target::Target;

    #[test]
    fn test_render_lists_elements_and_critical_dimension() {
        let mut target = Target::new(3, 3, 1.5, "soda lime");
        target.add_element(5, 5);
        target.add_element(7, 6);

        let text = render_report(&target.report());

        assert!(text.contains("Height:    3 in"));
        assert!(text.contains("Thickness: 1.5 mm"));
        assert!(text.contains("Material:  soda lime"));
        assert!(text.contains("lp/mm"));
        assert!(text.contains("50.80"));
        assert!(text.contains("228.07"));
        assert!(text.contains("The critical dimension is 2.19 microns."));

        // Rows come out in insertion order.
        let row_5_5 = text.find("50.80").unwrap();
        let row_7_6 = text.find("228.07").unwrap();
        assert!(row_5_5 < row_7_6);
    }

    #[test]
    fn test_render_empty_target() {
        let target = Target::new(2, 2, 0.8, "fused silica");
        let text = render_report(&target.report());

        assert!(text.contains("Target Specs"));
        assert!(text.contains("No elements found."));
        assert!(!text.contains("critical dimension"));
    }
}

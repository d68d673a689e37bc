//! Text report for a validation result

use console::style;

use crate::model::ValidationResult;

const RULE: &str = "==========================";

/// Render the results block shown after a check.
///
/// `colored` forces ANSI styling of the status word on or off, independent
/// of whether stdout is a terminal.
pub fn generate_report(result: &ValidationResult, colored: bool) -> String {
    let status = if result.is_valid {
        style(result.status_label()).green().bright()
    } else {
        style(result.status_label()).red().bright()
    }
    .force_styling(colored);

    let mut report = String::new();
    report.push('\n');
    report.push_str(RULE);
    report.push_str("\n         RESULTS\n");
    report.push_str(RULE);
    report.push_str("\n\n");
    report.push_str(&format!("Effective Cap: {:.2} tons\n", result.effective_cap));
    report.push_str(&format!("Status: {}\n", status));

    if result.is_valid {
        report.push_str(&format!("\nRemaining Tonnage: {:.2} tons\n", result.remaining_tonnage));
        report.push_str(&format!("Unused Clan Tonnage: {:.2} tons\n", result.unused_primary_tonnage));
        report.push_str(&format!(
            "Unused Inner Sphere Tonnage: {:.2} tons\n",
            result.unused_secondary_tonnage
        ));
    } else {
        report.push_str("\nYour force composition exceeds the base limit. Adjust your units to comply.\n");
    }

    report.push('\n');
    report.push_str(RULE);
    report.push_str("\n        END OF REPORT\n");
    report.push_str(RULE);
    report.push('\n');
    report
}

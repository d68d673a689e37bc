//! Output formatting module

use force_domain::{generate_report, ForceComposition, ValidationResult};
use force_types::{OutputFormat, Result};
use serde::Serialize;

/// JSON document emitted by `--format json`
#[derive(Debug, Serialize)]
pub struct CheckOutput<'a> {
    pub composition: &'a ForceComposition,
    pub result: &'a ValidationResult,
}

pub fn render_result(
    output_format: OutputFormat,
    composition: &ForceComposition,
    result: &ValidationResult,
    colored: bool,
) -> Result<String> {
    match output_format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&CheckOutput { composition, result })?),
        OutputFormat::Table => Ok(generate_report(result, colored)),
    }
}

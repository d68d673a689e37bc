//! Console input session: banner, sequential prompts and numeric parsing

use force_domain::ForceComposition;
use force_types::{Error, Result};
use std::io::{BufRead, Write};

pub const CLAN_PROMPT: &str = "Enter Clan Tonnage (tons): ";
pub const INNER_SPHERE_PROMPT: &str = "Enter Inner Sphere Tonnage (tons): ";
pub const BASE_LIMIT_PROMPT: &str = "Enter Base Tonnage Limit (tons): ";

/// Values already known before prompting (e.g. given as CLI flags)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PresetValues {
    pub primary_tonnage: Option<f64>,
    pub secondary_tonnage: Option<f64>,
    pub base_limit: Option<f64>,
}

impl PresetValues {
    pub fn is_complete(&self) -> bool {
        self.primary_tonnage.is_some() && self.secondary_tonnage.is_some() && self.base_limit.is_some()
    }
}

/// Parse one tonnage answer. Surrounding whitespace is ignored; anything
/// else that is not a number is rejected.
pub fn parse_tonnage(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|_| {
        tracing::debug!(input = trimmed, "rejected non-numeric input");
        Error::InvalidNumber(trimmed.to_string())
    })
}

pub fn write_banner<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "\n==========================")?;
    writeln!(writer, "      MIXED FORCE VALIDATOR")?;
    writeln!(writer, "==========================\n")?;
    Ok(())
}

/// Prompt on `writer` and read one line from `reader`.
///
/// End of input counts as a non-numeric answer.
fn prompt_value<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<f64> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::InvalidNumber(String::new()));
    }
    parse_tonnage(&line)
}

/// Collect the three inputs, prompting only for the ones not preset.
///
/// The first malformed answer aborts the session; later prompts are not shown.
pub fn read_composition<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    preset: PresetValues,
) -> Result<ForceComposition> {
    let primary_tonnage = match preset.primary_tonnage {
        Some(v) => v,
        None => prompt_value(reader, writer, CLAN_PROMPT)?,
    };
    let secondary_tonnage = match preset.secondary_tonnage {
        Some(v) => v,
        None => prompt_value(reader, writer, INNER_SPHERE_PROMPT)?,
    };
    let base_limit = match preset.base_limit {
        Some(v) => v,
        None => prompt_value(reader, writer, BASE_LIMIT_PROMPT)?,
    };

    Ok(ForceComposition::new(primary_tonnage, secondary_tonnage, base_limit))
}

//! Command handlers

use crate::cli::{Cli, Commands};
use crate::logging;
use crate::output::render_result;
use force_app::config::Config;
use force_app::input::{read_composition, write_banner, PresetValues};
use force_types::{LogLevel, OutputFormat, Result};
use std::io::{self, Write};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // `config` manages the file itself, so an unreadable file must not block it
    if let Some(Commands::Config {
        show,
        set_output,
        set_color,
        set_log_level,
        reset,
    }) = cli.command
    {
        logging::init(logging::effective_level(LogLevel::default(), cli.verbose));
        return cmd_config(show, set_output, set_color, set_log_level, reset);
    }

    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    logging::init(logging::effective_level(config.log_level, cli.verbose));

    match &loaded {
        Ok(_) => tracing::debug!("configuration loaded"),
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable configuration, using defaults"),
    }

    let output_format = cli.format.unwrap_or(config.output_format);
    // Color only if: terminal supports it AND not --no-color AND config.color
    let colored = config.color && !cli.no_color && console::colors_enabled();

    let preset = match cli.command {
        Some(Commands::Check {
            clan,
            inner_sphere,
            limit,
        }) => PresetValues {
            primary_tonnage: clan,
            secondary_tonnage: inner_sphere,
            base_limit: limit,
        },
        _ => PresetValues::default(),
    };
    cmd_check(preset, output_format, colored)
}

fn cmd_check(preset: PresetValues, output_format: OutputFormat, colored: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    // Keep stdout clean for JSON: banner and prompts go to stderr there
    let composition = match output_format {
        OutputFormat::Table => {
            let mut writer = io::stdout().lock();
            write_banner(&mut writer)?;
            read_composition(&mut reader, &mut writer, preset)?
        }
        OutputFormat::Json => {
            let mut writer = io::stderr().lock();
            if !preset.is_complete() {
                write_banner(&mut writer)?;
            }
            read_composition(&mut reader, &mut writer, preset)?
        }
    };

    let result = composition.validate();
    tracing::info!(
        effective_cap = result.effective_cap,
        status = result.status_label(),
        "check complete"
    );

    let rendered = render_result(output_format, &composition, &result, colored)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_color: Option<bool>,
    set_log_level: Option<LogLevel>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(color) = set_color {
        config.color = color;
        modified = true;
    }

    if let Some(log_level) = set_log_level {
        config.log_level = log_level;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(())
}

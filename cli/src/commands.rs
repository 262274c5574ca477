use crate::config::limits::MAX_CHANNEL_CAPACITY;
use crate::config::setup;
use crate::error::{AppError, AppResult};
use crate::theme::{ThemeManager, ThemeSource};
use clap::{Parser, Subcommand};
use engine::{ChannelCategory, ChannelColors, ChannelCounts};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trackhue")]
#[command(about = "Browse sequencer themes and the colors they give each channel")]
#[command(version)]
pub struct Cli {
    /// Theme to activate instead of the configured one
    #[arg(long, short, global = true)]
    pub theme: Option<String>,

    /// Use this config file instead of ./config.toml or ~/.config/trackhue/config.toml
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List available themes
    Themes {
        #[arg(long)]
        json: bool,
    },
    /// Print the colors of every channel for a channel layout
    Colors {
        /// Number of pitch channels
        #[arg(long, default_value_t = 4, value_parser = parse_channel_count)]
        pitch: usize,
        /// Number of noise channels
        #[arg(long, default_value_t = 1, value_parser = parse_channel_count)]
        noise: usize,
        /// Number of modulation channels
        #[arg(long = "mod", default_value_t = 1, value_parser = parse_channel_count)]
        modulation: usize,
        /// Resolve palette references to literal colors
        #[arg(long)]
        computed: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print one style variable of the active theme
    Var {
        /// Variable name, with or without the leading `--`
        name: String,
        /// Follow var() references to a literal value
        #[arg(long)]
        computed: bool,
    },
    /// Print every literal UI color of the active theme
    UiColors {
        #[arg(long)]
        json: bool,
    },
    /// Create ~/.config/trackhue and its themes directory
    Init,
}

#[derive(Serialize)]
struct ChannelRow {
    channel: usize,
    category: ChannelCategory,
    colors: ChannelColors,
}

fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)
        .map_err(|e| AppError::Io(format!("Failed to write JSON output: {e}")))?;
    writeln!(out)?;
    Ok(())
}

fn parse_channel_count(value: &str) -> Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a channel count"))?;
    if count > MAX_CHANNEL_CAPACITY {
        return Err(format!(
            "at most {MAX_CHANNEL_CAPACITY} channels per category are supported"
        ));
    }
    Ok(count)
}

/// Run one command against the theme manager, writing results to `out`
pub fn execute(command: &Command, manager: &mut ThemeManager, out: &mut dyn Write) -> AppResult<()> {
    match command {
        Command::Themes { json } => list_themes(manager, *json, out),
        Command::Colors {
            pitch,
            noise,
            modulation,
            computed,
            json,
        } => {
            let counts = ChannelCounts::new(*pitch, *noise, *modulation);
            print_colors(manager, &counts, *computed, *json, out)
        }
        Command::Var { name, computed } => {
            writeln!(out, "{}", manager.variable(name, *computed))?;
            Ok(())
        }
        Command::UiColors { json } => print_ui_colors(manager, *json, out),
        Command::Init => {
            let dir = setup::initialize_config_dir()?;
            writeln!(out, "Config directory ready: {}", dir.display())?;
            Ok(())
        }
    }
}

fn list_themes(manager: &ThemeManager, json: bool, out: &mut dyn Write) -> AppResult<()> {
    let themes = manager.available_themes();
    if json {
        return write_json(out, &themes);
    }

    for theme in themes {
        let marker = if theme.active { "*" } else { " " };
        let kind = if theme.formula { "formula" } else { "palette" };
        let source = match &theme.source {
            ThemeSource::Builtin => "built-in".to_string(),
            ThemeSource::User(path) => path.display().to_string(),
        };
        writeln!(
            out,
            "{marker} {:<20} {kind:<8} {source:<10} {}",
            theme.name, theme.description
        )?;
    }
    Ok(())
}

fn print_colors(
    manager: &mut ThemeManager,
    counts: &ChannelCounts,
    computed: bool,
    json: bool,
    out: &mut dyn Write,
) -> AppResult<()> {
    let rows: Vec<ChannelRow> = manager
        .all_channel_colors(counts, computed)
        .into_iter()
        .enumerate()
        .map(|(channel, colors)| ChannelRow {
            channel,
            category: counts.classify(channel).0,
            colors,
        })
        .collect();

    if json {
        return write_json(out, &rows);
    }

    writeln!(
        out,
        "{:<8} {:<6} {:<32} {:<32} {:<32} primary-note",
        "channel", "kind", "secondary-channel", "primary-channel", "secondary-note"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<8} {:<6} {:<32} {:<32} {:<32} {}",
            row.channel,
            row.category.to_string(),
            row.colors.secondary_channel,
            row.colors.primary_channel,
            row.colors.secondary_note,
            row.colors.primary_note
        )?;
    }
    Ok(())
}

fn print_ui_colors(manager: &ThemeManager, json: bool, out: &mut dyn Write) -> AppResult<()> {
    let colors = manager.ui_colors();
    if json {
        let map: std::collections::BTreeMap<&str, &str> = colors
            .iter()
            .map(|(color, value)| (color.name(), value.as_str()))
            .collect();
        return write_json(out, &map);
    }

    for (color, value) in colors {
        writeln!(out, "--{}: {value}", color.name())?;
    }
    Ok(())
}

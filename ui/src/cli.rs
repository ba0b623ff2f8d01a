use crate::app::context::UiContext;
use crate::error::{AppError, AppResult};
use crate::theme::codec;
use crate::theme::descriptors::{WindowThemeDescriptor, descriptor_for_key, descriptors};
use crate::theme::ThemeFlags;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use windowing::{Colour, ColourWithFlags, WindowClass};

#[derive(Debug, Parser)]
#[command(
    name = "parkui",
    about = "Manage ParkUI window colour themes",
    version
)]
pub struct Cli {
    /// Configuration file to use instead of the standard location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding theme files.
    #[arg(long, global = true, value_name = "PATH")]
    pub themes_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available themes, marking the active one.
    List,

    /// Print the active theme's colours.
    Show {
        /// Only show this window class (`WC_RIDE` or `ride`).
        #[arg(long)]
        class: Option<String>,
    },

    /// Make a theme active by name or list position.
    Select { name: String },

    /// Change one colour slot of the active theme.
    #[command(name = "set-colour")]
    SetColour {
        class: String,
        slot: usize,
        colour: String,
        #[arg(long)]
        translucent: bool,
    },

    /// Turn a theme feature flag on or off.
    #[command(name = "set-flag")]
    SetFlag {
        /// lights-ride, lights-park, alt-scenario-select-font,
        /// full-bottom-toolbar or 3d-image-buttons
        flag: String,
        #[arg(value_enum)]
        state: Switch,
    },

    /// Rename the active theme.
    Rename { name: String },

    /// Copy the active theme under a new name and make the copy active.
    Duplicate { name: String },

    /// Delete the active theme's file and return to the default theme.
    Delete,

    /// Write the active theme as JSON.
    Export {
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Accepts a descriptor key (`WC_RIDE_LIST`) or its short form (`ride-list`).
pub fn parse_window_class(name: &str) -> Option<WindowClass> {
    let mut key = name.trim().to_uppercase().replace('-', "_");
    if !key.starts_with("WC_") {
        key.insert_str(0, "WC_");
    }
    descriptor_for_key(&key).map(|desc| desc.class)
}

fn resolve_theme_index(ui: &UiContext, name: &str) -> AppResult<usize> {
    let themes = ui.themes();
    if let Some(index) = themes.index_for_name(name) {
        return Ok(index);
    }
    if let Some(index) = themes
        .available_themes()
        .iter()
        .position(|theme| theme.config_name == name)
    {
        return Ok(index);
    }
    match name.parse::<usize>() {
        Ok(index) if index < themes.available_themes().len() => Ok(index),
        _ => Err(AppError::Validation(format!("No theme named '{name}'"))),
    }
}

fn format_slot(slot: ColourWithFlags) -> String {
    if slot.is_translucent() {
        format!("{} (translucent)", slot.colour.name())
    } else {
        slot.colour.name().to_string()
    }
}

fn write_descriptor(
    ui: &UiContext,
    desc: &WindowThemeDescriptor,
    out: &mut impl Write,
) -> AppResult<()> {
    let slots: Vec<String> = (0..usize::from(desc.num_colours))
        .map(|slot| format_slot(ui.themes().colour(desc.class, slot)))
        .collect();
    writeln!(out, "{}: {}", desc.key, slots.join(", "))?;
    Ok(())
}

/// Runs one command against an initialised context.
pub fn run(command: Commands, ui: &mut UiContext, out: &mut impl Write) -> AppResult<()> {
    match command {
        Commands::List => {
            let active = ui.themes().active_index();
            for (index, theme) in ui.themes().available_themes().iter().enumerate() {
                let marker = if Some(index) == active { '*' } else { ' ' };
                writeln!(out, "{marker} {index:>2}  {}", theme.display_name)?;
            }
        }
        Commands::Show { class } => {
            let theme = ui.themes().current_theme();
            writeln!(out, "Theme: {}", theme.name)?;
            match class {
                Some(name) => {
                    let unknown =
                        || AppError::Validation(format!("Unknown window class '{name}'"));
                    let class = parse_window_class(&name).ok_or_else(unknown)?;
                    let desc = descriptors()
                        .iter()
                        .find(|desc| desc.class == class)
                        .ok_or_else(unknown)?;
                    write_descriptor(ui, desc, out)?;
                }
                None => {
                    for desc in descriptors() {
                        write_descriptor(ui, desc, out)?;
                    }
                }
            }
        }
        Commands::Select { name } => {
            let index = resolve_theme_index(ui, &name)?;
            ui.select_theme(index)?;
            writeln!(out, "Active theme: {}", ui.themes().current_theme().name)?;
        }
        Commands::SetColour {
            class,
            slot,
            colour,
            translucent,
        } => {
            let window_class = parse_window_class(&class)
                .ok_or_else(|| AppError::Validation(format!("Unknown window class '{class}'")))?;
            let colour = Colour::from_name(&colour)
                .ok_or_else(|| AppError::Validation(format!("Unknown colour '{colour}'")))?;
            let mut value = ColourWithFlags::new(colour);
            value.set_translucent(translucent);
            ui.set_theme_colour(window_class, slot, value)?;
        }
        Commands::SetFlag { flag, state } => {
            let theme_flag = ThemeFlags::from_cli_name(&flag)
                .ok_or_else(|| AppError::Validation(format!("Unknown theme flag '{flag}'")))?;
            ui.set_theme_flag(theme_flag, state == Switch::On)?;
        }
        Commands::Rename { name } => {
            ui.rename_theme(&name)?;
            writeln!(out, "Renamed theme to '{name}'")?;
        }
        Commands::Duplicate { name } => {
            ui.duplicate_theme(&name)?;
            writeln!(out, "Active theme: {name}")?;
        }
        Commands::Delete => {
            ui.delete_theme()?;
            writeln!(out, "Active theme: {}", ui.themes().current_theme().name)?;
        }
        Commands::Export { output } => {
            let json = codec::to_string_pretty(ui.themes().current_theme())?;
            match output {
                Some(path) => std::fs::write(&path, json)?,
                None => writeln!(out, "{json}")?,
            }
        }
    }
    Ok(())
}

//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate: one subcommand for rewriting, one per generator, and one for
//! settings.

use crate::arguments::{determine, Provider, Style};
use clap::{Parser, Subcommand};
use cmdblock_core::error::Result;

/// Command-line arguments for the `cbr` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cmdblock_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cbr", "rotate", "beam1", "0", "1"]);
/// assert!(args.settings_path.is_none());
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "cbr", term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the settings file YAML.
    ///
    /// If not provided, defaults to `~/.cmdblock/settings.yml`.
    #[arg(long, short = 'c', global = true)]
    pub settings_path: Option<String>,

    #[command(subcommand)]
    pub operation: Operation,
}

#[derive(Subcommand, Debug)]
pub enum Operation {
    /// Rewrite an existing command. Reads stdin, one command per line, when
    /// no command is given.
    Rewrite(RewriteArgs),
    /// Generate a block display beam.
    Beam(GeneratorArgs),
    /// Generate a laser beam snapped to the block grid.
    Laser(GeneratorArgs),
    /// Generate the three commands that place a laser by hand.
    LaserSetup(GeneratorArgs),
    /// Generate an end crystal and the command that removes it.
    Crystal(GeneratorArgs),
    /// Generate a rotation follow-up for tagged entities.
    Rotate(GeneratorArgs),
    /// Show or change the saved settings.
    Settings(SettingsArgs),
}

#[derive(clap::Args, Debug, Default)]
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct RewriteArgs {
    /// The command to rewrite.
    pub command: Option<String>,

    /// Field values in the format key=value.
    ///
    /// Keys: x, y, z, target_x, target_y, target_z, center_x, center_y,
    /// center_z, trans_x, trans_y, trans_z, length, tag, block.
    ///
    /// # Examples
    /// ```bash
    /// cbr rewrite "/setblock 1 2 3 stone" -p block=minecraft__glass
    /// ```
    #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
    pub parameters: Vec<String>,

    /// Replace numbers instead of adding to them.
    #[arg(long = "set", short = 's', action)]
    pub use_set: bool,

    /// Start from a named preset (`laser` or `lightbeam`).
    #[arg(long)]
    pub preset: Option<String>,

    /// Whole position as `x y z`, `x,y,z` or `x, y, z`.
    #[arg(long, allow_hyphen_values = true)]
    pub position: Option<String>,

    /// Whole beam target as `x y z`.
    #[arg(long, allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Whole centering offset as `x y z`.
    #[arg(long, allow_hyphen_values = true)]
    pub center: Option<String>,

    /// Aim rebuilt end crystals at their own origin instead of origin plus
    /// target offset.
    #[arg(long, action)]
    pub keep_origin: bool,

    /// Print only the rewritten command.
    #[arg(long, short = 'q', action)]
    pub quiet: bool,
}

#[derive(clap::Args, Debug, Default)]
pub struct GeneratorArgs {
    /// Field values in the format key=value.
    ///
    /// Cannot be mixed with positional values.
    #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
    pub parameters: Vec<String>,

    /// Field values in field order.
    ///
    /// Cannot be mixed with named values.
    #[arg(trailing_var_arg = true, allow_negative_numbers = true)]
    pub positional_arguments: Vec<String>,
}

impl Provider for GeneratorArgs {
    /// Determines the argument style based on the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if both named and positional arguments are provided,
    /// as this is not allowed.
    fn get_style(&self) -> Result<Style> {
        determine(&self.parameters, &self.positional_arguments)
    }
}

#[derive(clap::Args, Debug, Default)]
pub struct SettingsArgs {
    /// Save a new key bind.
    #[arg(long)]
    pub key_bind: Option<String>,

    /// Save the always-on-top flag.
    #[arg(long)]
    pub always_on_top: Option<bool>,
}

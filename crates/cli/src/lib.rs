//! cmdblock CLI Library
//!
//! This crate provides the command-line front end for cmdblock: it turns
//! arguments into modification requests and generator values, runs them
//! through `cmdblock-core`, and prints the results.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`arguments`]: Named and positional field values, and request building
//! - [`generators`]: The command generator subcommands
//! - [`report`]: Coloured rewrite reports
//!
//! # Examples
//!
//! The CLI binary (`cbr`) can be used in several ways:
//!
//! ```bash
//! # Move a kill selector one block up
//! cbr rewrite "/kill @e[x=1,y=2,z=3]" -p y=1
//!
//! # Rewrite every command in a file with a preset
//! cbr rewrite --preset laser < commands.txt
//!
//! # Generate a beam with positional values
//! cbr beam 10 64 -3 minecraft__red_concrete beam2
//!
//! # Generate an end crystal pair with named values
//! cbr crystal -p x=0 -p y=64 -p z=0 -p target_x=0 -p target_y=80 -p target_z=0
//! ```

pub mod arguments;
pub mod cli_args;
pub mod generators;
pub mod report;

//! cmdblock Core Library
//!
//! This crate provides the core functionality for cmdblock, a tool that
//! rewrites Minecraft command-block commands: it recognizes the shape of a
//! pasted command, pulls out its coordinates, tag, block and beam fields, and
//! writes requested values back without touching anything else.
//!
//! # Key Features
//!
//! - **Shape Classification**: block displays, end crystals (including
//!   malformed summons), setblock, kill selectors and execute/tp commands
//! - **Field Rewriting**: set or offset positions and beam targets, rename
//!   tags, replace blocks, overwrite translation and scale
//! - **Generators**: block display beams, lasers, end crystal spawn/despawn
//!   pairs and rotation follow-ups
//! - **Settings**: persisted key bind, window flag and generator defaults
//!
//! # Examples
//!
//! Moving a kill selector by one block on every axis:
//!
//! ```
//! use cmdblock_core::request::{AxisInput, ModificationRequest, RewriteInput};
//! use cmdblock_core::rewrite::rewrite;
//!
//! let request = ModificationRequest {
//!     modify_position: true,
//!     position: AxisInput::new("1", "1", "1"),
//!     ..ModificationRequest::default()
//! };
//! let result = rewrite(&RewriteInput::new("kill @e[type=armor_stand,x=5,y=6,z=7]", request))?;
//! assert_eq!(result.text, "kill @e[type=armor_stand,x=6,y=7,z=8]");
//! # Ok::<(), cmdblock_core::error::Error>(())
//! ```

pub mod command;
pub mod config;
pub mod coords;
pub mod error;
pub mod extract;
pub mod file_handling;
pub mod generate;
pub mod interpolation;
pub mod presets;
pub mod report;
pub mod request;
pub mod rewrite;
pub mod shape;

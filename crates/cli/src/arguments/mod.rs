//! Argument processing and validation for the cmdblock CLI.
//!
//! Field values can be given in two ways:
//! - **Named arguments**: Using `-p key=value` format
//! - **Positional arguments**: Trailing values filled in field order
//!
//! The two styles cannot be mixed. Fields left out fall back to the saved
//! defaults (generators) or stay untouched (rewrites).

pub mod processing;
pub mod request;
pub mod style;
pub mod validation;

pub use processing::process_command_line;
pub use request::build_request;
pub use style::determine;
pub use style::Provider;
pub use style::Style;

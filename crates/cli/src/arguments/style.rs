//! How a generator's field values were typed on the command line.

use cmdblock_core::error::Error::MixedParameterMode;
use cmdblock_core::error::Result;

/// Field values arrive either all named or all positional, never both.
#[derive(PartialEq, Clone, Debug)]
pub enum Style {
    /// No arguments provided, every field comes from the saved defaults
    None,
    /// Named arguments provided with -p/--param flags (key=value format)
    Named(Vec<String>),
    /// Positional arguments provided as trailing arguments
    Positional(Vec<String>),
}

/// Argument structs that carry both `-p` values and trailing values.
pub trait Provider {
    ///
    /// # Errors
    ///
    /// Returns an error if named and positional arguments are mixed.
    fn get_style(&self) -> Result<Style>;
}

/// Picks the [`Style`] from the `-p` values and the trailing values.
///
/// # Errors
///
/// Returns [`MixedParameterMode`] when both are present.
///
/// # Examples
///
/// ```rust
/// use cmdblock_cli::arguments::{determine, Style};
///
/// // Named arguments only
/// let style = determine(&["tag=beam1".to_string()], &[]).unwrap();
/// assert!(matches!(style, Style::Named(_)));
///
/// // Positional arguments only
/// let style = determine(&[], &["beam1".to_string(), "0".to_string()]).unwrap();
/// assert!(matches!(style, Style::Positional(_)));
///
/// // No arguments
/// assert_eq!(determine(&[], &[]).unwrap(), Style::None);
/// ```
pub fn determine(named_args: &[String], positional_args: &[String]) -> Result<Style> {
    let using_named = !named_args.is_empty();
    let using_positional = !positional_args.is_empty();

    match (using_named, using_positional) {
        (true, true) => Err(MixedParameterMode),
        (true, false) => Ok(Style::Named(named_args.to_vec())),
        (false, true) => Ok(Style::Positional(positional_args.to_vec())),
        (false, false) => Ok(Style::None),
    }
}

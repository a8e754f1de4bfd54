use crate::arguments::style::Style;
use crate::arguments::validation::validate_field;
use cmdblock_core::error::Error::{ParameterCountMismatch, ParameterFormat};
use cmdblock_core::error::Result;
use indexmap::IndexMap;

/// Collects field values from the command line, keyed by field name in the
/// order given by `fields`.
///
/// Fields the user left out are simply absent; callers fill them from the
/// saved defaults.
///
/// # Errors
///
/// Returns an error if:
/// - A named value is not in `key=value` form
/// - A named value uses a key that is not in `fields`
/// - More positional values are given than there are fields
pub fn process_command_line(argument_style: Style, fields: &[&str]) -> Result<IndexMap<String, String>> {
    let mut values = IndexMap::new();

    match argument_style {
        Style::None => {}
        Style::Named(named_params) => {
            process_named_parameters(&named_params, fields, &mut values)?;
        }
        Style::Positional(positional_params) => {
            process_positional_parameters(&positional_params, fields, &mut values)?;
        }
    }

    Ok(values)
}

/// Splits `key=value`. The value may be empty but the key may not.
///
/// # Errors
///
/// Returns [`ParameterFormat`] when there is no `=` or the key is blank.
pub fn split_assignment(param_str: &str) -> Result<(&str, &str)> {
    match param_str.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(ParameterFormat(param_str.to_string())),
    }
}

/// Process named parameters in the format key=value
fn process_named_parameters(
    named_params: &[String],
    fields: &[&str],
    values: &mut IndexMap<String, String>,
) -> Result<()> {
    for param_str in named_params {
        let (key, value) = split_assignment(param_str)?;
        validate_field(key, fields)?;
        values.insert(key.to_string(), value.to_string());
    }

    // Present values in field order regardless of how they were typed
    values.sort_by_cached_key(|key, _| fields.iter().position(|field| *field == key.as_str()));
    Ok(())
}

/// Process positional parameters based on field order
fn process_positional_parameters(
    positional_params: &[String],
    fields: &[&str],
    values: &mut IndexMap<String, String>,
) -> Result<()> {
    if positional_params.len() > fields.len() {
        return Err(ParameterCountMismatch(fields.len(), positional_params.len()));
    }

    for (field, value) in fields.iter().zip(positional_params) {
        values.insert((*field).to_string(), value.clone());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdblock_core::error::Error;

    const FIELDS: [&str; 3] = ["tag", "rot_x", "rot_y"];

    #[test]
    fn test_named_values_are_ordered_by_field() {
        let style = Style::Named(vec!["rot_y=1".to_string(), "tag=beam1".to_string()]);
        let values = process_command_line(style, &FIELDS).unwrap();
        let keys: Vec<&String> = values.keys().collect();
        assert_eq!(keys, vec!["tag", "rot_y"]);
    }

    #[test]
    fn test_named_value_may_be_negative_or_empty() {
        let style = Style::Named(vec!["rot_x=-90".to_string(), "rot_y=".to_string()]);
        let values = process_command_line(style, &FIELDS).unwrap();
        assert_eq!(values["rot_x"], "-90");
        assert_eq!(values["rot_y"], "");
    }

    #[test]
    fn test_named_format_error() {
        let style = Style::Named(vec!["rot_x".to_string()]);
        let result = process_command_line(style, &FIELDS);
        assert!(matches!(result, Err(Error::ParameterFormat(_))));

        let style = Style::Named(vec!["=5".to_string()]);
        assert!(process_command_line(style, &FIELDS).is_err());
    }

    #[test]
    fn test_named_unknown_field() {
        let style = Style::Named(vec!["length=5".to_string()]);
        let result = process_command_line(style, &FIELDS);
        assert!(matches!(result, Err(Error::UnknownField(key)) if key == "length"));
    }

    #[test]
    fn test_positional_fills_leading_fields() {
        let style = Style::Positional(vec!["beam2".to_string(), "45".to_string()]);
        let values = process_command_line(style, &FIELDS).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values["tag"], "beam2");
        assert_eq!(values["rot_x"], "45");
        assert!(!values.contains_key("rot_y"));
    }

    #[test]
    fn test_positional_too_many() {
        let style = Style::Positional(vec!["a", "1", "2", "3"].into_iter().map(String::from).collect());
        let result = process_command_line(style, &FIELDS);
        assert!(matches!(result, Err(Error::ParameterCountMismatch(3, 4))));
    }

    #[test]
    fn test_none_is_empty() {
        assert!(process_command_line(Style::None, &FIELDS).unwrap().is_empty());
    }
}

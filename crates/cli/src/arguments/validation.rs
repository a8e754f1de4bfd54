use cmdblock_core::error::Error::UnknownField;
use cmdblock_core::error::Result;

/// Checks that `key` names one of `fields`.
///
/// # Errors
///
/// Returns [`UnknownField`] otherwise.
pub fn validate_field(key: &str, fields: &[&str]) -> Result<()> {
    if fields.contains(&key) {
        Ok(())
    } else {
        Err(UnknownField(key.to_string()))
    }
}

//! What the caller wants changed in a command.
//!
//! Values stay as the strings the user typed; the rewriter parses them per
//! stage so one bad field only costs that stage.

use crate::command::Triple;
use crate::error::{Error, Result};

/// How numeric position and target values are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Values replace the original numbers.
    Set,
    /// Values are added to the original numbers.
    #[default]
    Offset,
}

impl Mode {
    #[must_use]
    pub fn from_use_set(use_set: bool) -> Self {
        if use_set {
            Mode::Set
        } else {
            Mode::Offset
        }
    }
}

/// Where a malformed end crystal summon aims its beam when no `BeamTarget`
/// can be recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryPolicy {
    /// The origin, moved by the requested target offsets.
    #[default]
    OriginPlusOffset,
    /// The origin itself.
    Origin,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Raw per-axis input. Blank strings count as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisInput {
    pub x: Option<String>,
    pub y: Option<String>,
    pub z: Option<String>,
}

impl AxisInput {
    pub fn new(x: &str, y: &str, z: &str) -> Self {
        Self {
            x: Some(x.to_string()),
            y: Some(y.to_string()),
            z: Some(z.to_string()),
        }
    }

    /// The supplied values, with blanks dropped.
    #[must_use]
    pub fn supplied(&self) -> Triple<Option<&str>> {
        Triple::new(
            non_blank(self.x.as_deref()),
            non_blank(self.y.as_deref()),
            non_blank(self.z.as_deref()),
        )
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        let supplied = self.supplied();
        supplied.x.is_none() && supplied.y.is_none() && supplied.z.is_none()
    }
}

/// One invocation's requested modifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModificationRequest {
    pub mode: Mode,
    pub modify_position: bool,
    pub position: AxisInput,
    pub modify_target: bool,
    pub target: AxisInput,
    pub modify_centering: bool,
    pub centering: AxisInput,
    pub modify_translation: bool,
    pub translation: AxisInput,
    pub modify_scale: bool,
    pub scale_length: Option<String>,
    pub tag: Option<String>,
    pub block: Option<String>,
    pub recovery: RecoveryPolicy,
}

impl ModificationRequest {
    /// Replacement tag, if one was given.
    #[must_use]
    pub fn new_tag(&self) -> Option<&str> {
        non_blank(self.tag.as_deref())
    }

    /// Replacement block id with `__` standing in for `:`.
    #[must_use]
    pub fn new_block(&self) -> Option<String> {
        non_blank(self.block.as_deref()).map(expand_namespace)
    }
}

/// Turns the typing shortcut `minecraft__stone` into `minecraft:stone`.
#[must_use]
pub fn expand_namespace(block: &str) -> String {
    block.replace("__", ":")
}

/// Parses a user supplied decimal such as `0.5` or `-150`.
///
/// # Errors
///
/// Returns [`Error::MissingValue`] for blank input and [`Error::InvalidNumber`]
/// for anything that is not a finite number.
pub fn parse_decimal(field: &str, value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingValue(field.to_string()));
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| Error::invalid_number(field, value))
}

/// Parses a user supplied block coordinate. Whole decimals like `10.0` are
/// accepted.
///
/// # Errors
///
/// Returns [`Error::MissingValue`] for blank input and [`Error::InvalidNumber`]
/// for anything that is not a whole number.
pub fn parse_integer(field: &str, value: &str) -> Result<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingValue(field.to_string()));
    }

    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Ok(parsed);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite() && parsed.fract() == 0.0)
        .filter(|parsed| parsed.abs() < i64::MAX as f64)
        .map(|parsed| parsed as i64)
        .ok_or_else(|| Error::invalid_number(field, value))
}

/// Input to one rewrite pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteInput {
    pub text: String,
    pub request: ModificationRequest,
}

impl RewriteInput {
    pub fn new(text: impl Into<String>, request: ModificationRequest) -> Self {
        Self {
            text: text.into(),
            request,
        }
    }
}

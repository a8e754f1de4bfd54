//! Command text values and the facts extracted from them.
//!
//! Everything here is a plain value: a command is re-read from its text on
//! every invocation and nothing is cached between passes.

use std::fmt::{Display, Formatter};

/// Character every command block command may start with.
pub const COMMAND_PREFIX: char = '/';

/// Fixed X/Y thickness of block display beams.
pub const BEAM_THICKNESS: f64 = 0.1;

/// Block display numbers are always written with six fractional digits.
#[must_use]
pub fn format_decimal(value: f64) -> String {
    format!("{value:.6}")
}

/// Writes an NBT float vector such as `scale:[0.100000f,0.100000f,-150.000000f]`.
#[must_use]
pub fn format_float_vector(name: &str, values: Triple<f64>) -> String {
    format!(
        "{name}:[{}f,{}f,{}f]",
        format_decimal(values.x),
        format_decimal(values.y),
        format_decimal(values.z)
    )
}

/// Three values, one per world axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triple<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Triple<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Triple<U> {
        Triple {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    pub fn as_ref(&self) -> Triple<&T> {
        Triple {
            x: &self.x,
            y: &self.y,
            z: &self.z,
        }
    }

    pub fn zip<U>(self, other: Triple<U>) -> Triple<(T, U)> {
        Triple {
            x: (self.x, other.x),
            y: (self.y, other.y),
            z: (self.z, other.z),
        }
    }

    pub fn into_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Display> Display for Triple<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

/// Optional components of an NBT float vector such as `translation:[…]`.
pub type Components = Triple<Option<f64>>;

/// Position of a command, typed by how the command writes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinates {
    /// Block displays place entities at fractional positions.
    Decimal(Triple<f64>),
    /// Setblock, end crystal and kill commands use block positions.
    Integer(Triple<i64>),
}

impl Display for Coordinates {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Coordinates::Decimal(triple) => write!(
                formatter,
                "[{:.6}, {:.6}, {:.6}]",
                triple.x, triple.y, triple.z
            ),
            Coordinates::Integer(triple) => write!(formatter, "{triple}"),
        }
    }
}

/// Whether an end crystal summon matched the strict grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formation {
    WellFormed,
    Malformed,
}

/// Structural category of a command text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandShape {
    SummonBlockDisplay,
    SummonEndCrystal(Formation),
    SetBlock,
    KillSelector,
    ExecuteOrTeleport,
    Unrecognized,
}

impl CommandShape {
    /// Block display commands write every number with six fractional digits.
    #[must_use]
    pub fn is_decimal(&self) -> bool {
        matches!(self, CommandShape::SummonBlockDisplay)
    }
}

impl Display for CommandShape {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CommandShape::SummonBlockDisplay => "summon block_display",
            CommandShape::SummonEndCrystal(Formation::WellFormed) => "summon end_crystal",
            CommandShape::SummonEndCrystal(Formation::Malformed) => "summon (malformed)",
            CommandShape::SetBlock => "setblock",
            CommandShape::KillSelector => "kill selector",
            CommandShape::ExecuteOrTeleport => "execute/tp",
            CommandShape::Unrecognized => "unrecognized",
        };
        formatter.write_str(name)
    }
}

/// Facts found in a command. A `None` field is not present in the command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    pub position: Option<Coordinates>,
    pub target: Option<Triple<i64>>,
    pub block: Option<String>,
    pub tag: Option<String>,
    pub translation: Option<Components>,
    pub scale: Option<Components>,
}

impl FieldSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == FieldSet::default()
    }
}

/// Command text with its prefix made explicit.
///
/// Parsing always sees a leading `/`; [`Normalized::restore`] gives the
/// rewritten text back the prefix style of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub had_prefix: bool,
}

impl Normalized {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with(COMMAND_PREFIX) {
            Self {
                text: trimmed.to_string(),
                had_prefix: true,
            }
        } else {
            Self {
                text: format!("{COMMAND_PREFIX}{trimmed}"),
                had_prefix: false,
            }
        }
    }

    #[must_use]
    pub fn restore(&self, rewritten: String) -> String {
        if self.had_prefix {
            return rewritten;
        }

        match rewritten.strip_prefix(COMMAND_PREFIX) {
            Some(stripped) => stripped.to_string(),
            None => rewritten,
        }
    }
}

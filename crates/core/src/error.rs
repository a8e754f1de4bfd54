use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Error parsing command template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering command template: {}", .0)]
    Render(#[from] RenderError),

    #[error("Invalid number for `{}`: \"{}\"", .field, .value)]
    InvalidNumber { field: String, value: String },

    #[error("No value given for `{}`", .0)]
    MissingValue(String),

    #[error("Invalid field assignment `{}`, expected key=value", .0)]
    ParameterFormat(String),

    #[error("Unknown field `{}`", .0)]
    UnknownField(String),

    #[error("Named and positional values cannot be mixed.")]
    MixedParameterMode,

    #[error("Expected {} positional values, got {}", .0, .1)]
    ParameterCountMismatch(usize, usize),

    #[error("Unknown preset `{}`", .0)]
    UnknownPreset(String),

    #[error("Could not read a coordinate triple from \"{}\"", .0)]
    InvalidTriple(String),

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn invalid_number(field: &str, value: &str) -> Self {
        Self::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

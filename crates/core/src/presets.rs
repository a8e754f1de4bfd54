//! Ready-made block display requests.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;
use crate::request::{AxisInput, Mode, ModificationRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Thin green beam on the block's centre line.
    Laser,
    /// Shorter light blue beam without translation.
    Lightbeam,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Laser, Preset::Lightbeam];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Laser => "laser",
            Preset::Lightbeam => "lightbeam",
        }
    }

    /// The request this preset stands for. Positions are absolute.
    #[must_use]
    pub fn request(&self) -> ModificationRequest {
        let (translation, length, tag, block) = match self {
            Preset::Laser => (
                AxisInput::new("0.5", "0.0", "0.0"),
                "-150.0",
                "beam1",
                "minecraft:lime_concrete",
            ),
            Preset::Lightbeam => (
                AxisInput::new("0.0", "0.0", "0.0"),
                "-75.0",
                "lightbeam1",
                "minecraft:light_blue_concrete",
            ),
        };

        ModificationRequest {
            mode: Mode::Set,
            modify_position: true,
            position: AxisInput::new("0.0", "0.5", "0.999999"),
            modify_centering: true,
            centering: AxisInput::new("0.0", "0.0", "0.0"),
            modify_translation: true,
            translation,
            modify_scale: true,
            scale_length: Some(length.to_string()),
            tag: Some(tag.to_string()),
            block: Some(block.to_string()),
            ..ModificationRequest::default()
        }
    }
}

impl Display for Preset {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| Error::UnknownPreset(name.to_string()))
    }
}

//! The `beam`, `laser`, `laser-setup`, `crystal` and `rotate` subcommands.

use cmdblock_core::command::Triple;
use cmdblock_core::config::FieldDefaults;
use cmdblock_core::error::Result;
use cmdblock_core::generate::{
    beam_display, end_crystal_pair, laser, laser_setup, rotation, BeamSpec, EndCrystalSpec,
    LaserSpec, RotationSpec,
};
use indexmap::IndexMap;
use log::debug;

use crate::arguments::{process_command_line, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Beam,
    Laser,
    LaserSetup,
    Crystal,
    Rotate,
}

impl Generator {
    /// Field names in positional order.
    #[must_use]
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Generator::Beam => &[
                "x", "y", "z", "block", "tag", "trans_x", "trans_y", "trans_z", "length",
            ],
            Generator::Laser | Generator::LaserSetup => &["x", "y", "z", "block", "tag", "length"],
            Generator::Crystal => &["x", "y", "z", "target_x", "target_y", "target_z"],
            Generator::Rotate => &["tag", "rot_x", "rot_y"],
        }
    }

    fn defaults(&self, defaults: &FieldDefaults) -> Vec<(&'static str, String)> {
        let [trans_x, trans_y, trans_z] = defaults.translation;
        let [rot_x, rot_y] = defaults.rotation;
        let block = ("block", defaults.block.clone());
        let tag = ("tag", defaults.tag.clone());

        match self {
            Generator::Beam => vec![
                block,
                tag,
                ("trans_x", trans_x.to_string()),
                ("trans_y", trans_y.to_string()),
                ("trans_z", trans_z.to_string()),
                ("length", defaults.beam_length.to_string()),
            ],
            Generator::Laser | Generator::LaserSetup => {
                vec![block, tag, ("length", defaults.laser_length.to_string())]
            }
            Generator::Crystal => vec![],
            Generator::Rotate => vec![
                tag,
                ("rot_x", rot_x.to_string()),
                ("rot_y", rot_y.to_string()),
            ],
        }
    }

    /// Collects the field values from the command line, filling gaps from
    /// `defaults`.
    ///
    /// # Errors
    ///
    /// Returns an error when the command line values cannot be matched to
    /// this generator's fields.
    pub fn values(&self, style: Style, defaults: &FieldDefaults) -> Result<IndexMap<String, String>> {
        let mut values = process_command_line(style, self.fields())?;
        for (key, value) in self.defaults(defaults) {
            values.entry(key.to_string()).or_insert(value);
        }
        debug!("{self:?} values: {values:?}");
        Ok(values)
    }

    /// Renders the generator's commands, one per line of output.
    ///
    /// # Errors
    ///
    /// Returns an error for bad command line values or values that are
    /// missing or not numbers where numbers are needed.
    pub fn run(&self, style: Style, defaults: &FieldDefaults) -> Result<Vec<String>> {
        let values = self.values(style, defaults)?;
        let get = |key: &str| values.get(key).cloned().unwrap_or_default();
        let triple = |prefix: &str| {
            Triple::new(
                get(&format!("{prefix}x")),
                get(&format!("{prefix}y")),
                get(&format!("{prefix}z")),
            )
        };

        let lines = match self {
            Generator::Beam => vec![beam_display(&BeamSpec {
                position: triple(""),
                block: get("block"),
                tag: get("tag"),
                translation: triple("trans_"),
                length: get("length"),
            })?],
            Generator::Laser | Generator::LaserSetup => {
                let spec = LaserSpec {
                    position: triple(""),
                    block: get("block"),
                    tag: get("tag"),
                    length: get("length"),
                };
                if *self == Generator::Laser {
                    vec![laser(&spec)?]
                } else {
                    laser_setup(&spec)?
                        .commands()
                        .iter()
                        .map(ToString::to_string)
                        .collect()
                }
            }
            Generator::Crystal => {
                let pair = end_crystal_pair(&EndCrystalSpec {
                    origin: triple(""),
                    target: triple("target_"),
                })?;
                vec![pair.spawn, pair.despawn]
            }
            Generator::Rotate => vec![rotation(&RotationSpec {
                tag: get("tag"),
                rot_x: get("rot_x"),
                rot_y: get("rot_y"),
            })?],
        };

        Ok(lines)
    }
}

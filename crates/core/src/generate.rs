//! Command generators.
//!
//! Each generator renders one or more complete commands from field values
//! alone. Values arrive as the strings the user typed; a blank or
//! non-numeric value is an error and nothing is rendered.

use log::debug;

use crate::command::{format_decimal, format_float_vector, Triple, BEAM_THICKNESS};
use crate::error::{Error, Result};
use crate::interpolation::{build_context, interpolate_command};
use crate::request::{expand_namespace, parse_decimal, parse_integer};

pub const DEFAULT_BLOCK: &str = "minecraft:lime_concrete";
pub const DEFAULT_TAG: &str = "beam1";
/// Tag given to end crystals when none can be recovered.
pub const END_CRYSTAL_TAG: &str = "laser";
/// Full sky and block light.
pub const FULL_BRIGHTNESS: u32 = 15_728_880;

const BEAM_TEMPLATE: &str = r#"/summon minecraft:block_display {x} {y} {z} \{block_state:\{Name:"{block}"\},transformation:\{{translation},{scale},left_rotation:[0.0f,0.0f,0.0f,1.0f],right_rotation:[0.0f,0.0f,0.0f,1.0f]\},brightness:{brightness},shadow:false,billboard:"fixed",Tags:["{tag}"]\}"#;
const END_CRYSTAL_SPAWN_TEMPLATE: &str = r#"summon end_crystal {x} {y} {z} \{ShowBottom:0b,Invulnerable:1b,Tags:["{tag}"],BeamTarget:\{X:{target_x},Y:{target_y},Z:{target_z}\}\}"#;
const END_CRYSTAL_DESPAWN_TEMPLATE: &str =
    "kill @e[type=end_crystal,tag={tag},distance=..2,x={x},y={y},z={z}]";
const ROTATION_TEMPLATE: &str = "/execute as @e[tag={tag}] at @s run tp @s ~ ~ ~ ~{rot_x} ~{rot_y}";
const TRANSLATION_FIX_TEMPLATE: &str = "/execute as @e[tag={tag}] at @s run data modify entity @s transformation.translation set value [0.5f,0f,-0f]";
const PLACEMENT_TEMPLATE: &str = "/tp @e[tag={tag},sort=nearest,limit=1] {x} {y} {z}";

/// Translation that moves a laser beam onto the centre line of its block.
const LASER_TRANSLATION: Triple<f64> = Triple {
    x: 0.5,
    y: 0.0,
    z: 0.0,
};
const PLACEMENT_LIFT: f64 = 0.5;
const PLACEMENT_PUSH: f64 = 0.999_999;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeamSpec {
    pub position: Triple<String>,
    pub block: String,
    pub tag: String,
    pub translation: Triple<String>,
    pub length: String,
}

/// Input for the laser generators. Lasers always use the fixed
/// [`LASER_TRANSLATION`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaserSpec {
    pub position: Triple<String>,
    pub block: String,
    pub tag: String,
    pub length: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndCrystalSpec {
    pub origin: Triple<String>,
    pub target: Triple<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotationSpec {
    pub tag: String,
    pub rot_x: String,
    pub rot_y: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndCrystalPair {
    pub spawn: String,
    pub despawn: String,
}

/// The three commands that place a laser beam by hand: summon it, fix its
/// translation, then move it into position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaserSetup {
    pub summon: String,
    pub translation_fix: String,
    pub placement: String,
}

impl LaserSetup {
    #[must_use]
    pub fn commands(&self) -> [&str; 3] {
        [&self.summon, &self.translation_fix, &self.placement]
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingValue(field.to_string()));
    }

    Ok(trimmed)
}

fn decimals(prefix: &str, values: &Triple<String>) -> Result<Triple<f64>> {
    Ok(Triple::new(
        parse_decimal(&format!("{prefix}x"), &values.x)?,
        parse_decimal(&format!("{prefix}y"), &values.y)?,
        parse_decimal(&format!("{prefix}z"), &values.z)?,
    ))
}

fn integers(prefix: &str, values: &Triple<String>) -> Result<Triple<i64>> {
    Ok(Triple::new(
        parse_integer(&format!("{prefix}x"), &values.x)?,
        parse_integer(&format!("{prefix}y"), &values.y)?,
        parse_integer(&format!("{prefix}z"), &values.z)?,
    ))
}

/// Moves a value onto the block grid, keeping the integer part and writing
/// `fraction` after it on the same side of zero.
fn snap(value: f64, fraction: f64) -> f64 {
    let whole = value.trunc();
    if whole < 0.0 {
        whole - fraction
    } else {
        whole + fraction
    }
}

pub(crate) fn escape_block(block: &str) -> String {
    block.replace('"', "\\\"")
}

pub(crate) fn render_beam(
    position: Triple<f64>,
    block: &str,
    tag: &str,
    translation: Triple<f64>,
    length: f64,
) -> Result<String> {
    let context = build_context([
        ("x", format_decimal(position.x)),
        ("y", format_decimal(position.y)),
        ("z", format_decimal(position.z)),
        ("block", escape_block(block)),
        ("tag", tag.to_string()),
        ("translation", format_float_vector("translation", translation)),
        (
            "scale",
            format_float_vector("scale", Triple::new(BEAM_THICKNESS, BEAM_THICKNESS, length)),
        ),
        ("brightness", FULL_BRIGHTNESS.to_string()),
    ]);

    interpolate_command(BEAM_TEMPLATE, &context)
}

pub(crate) fn render_end_crystal(
    origin: Triple<i64>,
    target: Triple<i64>,
    tag: &str,
) -> Result<String> {
    let context = build_context([
        ("x", origin.x.to_string()),
        ("y", origin.y.to_string()),
        ("z", origin.z.to_string()),
        ("target_x", target.x.to_string()),
        ("target_y", target.y.to_string()),
        ("target_z", target.z.to_string()),
        ("tag", tag.to_string()),
    ]);

    interpolate_command(END_CRYSTAL_SPAWN_TEMPLATE, &context)
}

/// Renders a `summon minecraft:block_display` beam.
///
/// # Errors
///
/// Returns [`Error::MissingValue`] or [`Error::InvalidNumber`] for blank or
/// non-numeric position, translation or length values.
pub fn beam_display(spec: &BeamSpec) -> Result<String> {
    let position = decimals("", &spec.position)?;
    let translation = decimals("trans_", &spec.translation)?;
    let length = parse_decimal("length", &spec.length)?;
    let block = expand_namespace(required("block", &spec.block)?);
    let tag = required("tag", &spec.tag)?;

    let command = render_beam(position, &block, tag, translation, length)?;
    debug!("Generated beam: {}", command);
    Ok(command)
}

/// Renders a laser beam: a block display snapped to `x.000000 y.500000
/// z.000001` with the beam moved to the block's centre line.
///
/// # Errors
///
/// Returns [`Error::MissingValue`] or [`Error::InvalidNumber`] for blank or
/// non-numeric position or length values.
pub fn laser(spec: &LaserSpec) -> Result<String> {
    let raw = decimals("", &spec.position)?;
    let position = Triple::new(snap(raw.x, 0.0), snap(raw.y, 0.5), snap(raw.z, 0.000_001));
    let length = parse_decimal("length", &spec.length)?;
    let block = expand_namespace(required("block", &spec.block)?);
    let tag = required("tag", &spec.tag)?;

    let command = render_beam(position, &block, tag, LASER_TRANSLATION, length)?;
    debug!("Generated laser: {}", command);
    Ok(command)
}

/// Renders the three step laser placement sequence.
///
/// # Errors
///
/// Returns [`Error::MissingValue`] or [`Error::InvalidNumber`] for blank or
/// non-numeric position or length values.
pub fn laser_setup(spec: &LaserSpec) -> Result<LaserSetup> {
    let position = decimals("", &spec.position)?;
    let length = parse_decimal("length", &spec.length)?;
    let block = expand_namespace(required("block", &spec.block)?);
    let tag = required("tag", &spec.tag)?;

    let summon = render_beam(position, &block, tag, Triple::new(0.0, 0.0, 0.0), length)?;
    let translation_fix =
        interpolate_command(TRANSLATION_FIX_TEMPLATE, &build_context([("tag", tag.to_string())]))?;
    let placement = interpolate_command(
        PLACEMENT_TEMPLATE,
        &build_context([
            ("tag", tag.to_string()),
            ("x", format_decimal(position.x)),
            ("y", format_decimal(position.y + PLACEMENT_LIFT)),
            ("z", format_decimal(position.z + PLACEMENT_PUSH)),
        ]),
    )?;

    Ok(LaserSetup {
        summon,
        translation_fix,
        placement,
    })
}

/// Renders an end crystal aimed at `target` and the `kill` that removes it
/// again.
///
/// # Errors
///
/// Returns [`Error::MissingValue`] or [`Error::InvalidNumber`] for blank or
/// non-integer coordinates.
pub fn end_crystal_pair(spec: &EndCrystalSpec) -> Result<EndCrystalPair> {
    let origin = integers("", &spec.origin)?;
    let target = integers("target_", &spec.target)?;

    let spawn = render_end_crystal(origin, target, END_CRYSTAL_TAG)?;
    let despawn = interpolate_command(
        END_CRYSTAL_DESPAWN_TEMPLATE,
        &build_context([
            ("tag", END_CRYSTAL_TAG.to_string()),
            ("x", origin.x.to_string()),
            ("y", origin.y.to_string()),
            ("z", origin.z.to_string()),
        ]),
    )?;

    debug!("Generated end crystal pair: {} / {}", spawn, despawn);
    Ok(EndCrystalPair { spawn, despawn })
}

/// Renders the follow-up that turns every entity carrying `tag`.
///
/// # Errors
///
/// Returns [`Error::MissingValue`] or [`Error::InvalidNumber`] for a blank tag
/// or non-numeric rotation.
pub fn rotation(spec: &RotationSpec) -> Result<String> {
    let tag = required("tag", &spec.tag)?;
    let rot_x = parse_decimal("rot_x", &spec.rot_x)?;
    let rot_y = parse_decimal("rot_y", &spec.rot_y)?;

    interpolate_command(
        ROTATION_TEMPLATE,
        &build_context([
            ("tag", tag.to_string()),
            ("rot_x", rot_x.to_string()),
            ("rot_y", rot_y.to_string()),
        ]),
    )
}

use std::str::FromStr;

use crate::arguments::processing::split_assignment;
use crate::arguments::validation::validate_field;
use crate::cli_args::RewriteArgs;
use cmdblock_core::command::Triple;
use cmdblock_core::coords::parse_triple;
use cmdblock_core::error::Result;
use cmdblock_core::presets::Preset;
use cmdblock_core::request::{AxisInput, Mode, ModificationRequest, RecoveryPolicy};
use log::debug;

/// Keys accepted by `rewrite -p key=value`.
pub const REWRITE_FIELDS: [&str; 15] = [
    "x", "y", "z", "target_x", "target_y", "target_z", "center_x", "center_y", "center_z",
    "trans_x", "trans_y", "trans_z", "length", "tag", "block",
];

fn set_axis(axes: &mut AxisInput, axis: char, value: &str) {
    let slot = match axis {
        'x' => &mut axes.x,
        'y' => &mut axes.y,
        _ => &mut axes.z,
    };
    *slot = Some(value.to_string());
}

fn set_triple(axes: &mut AxisInput, triple: Triple<String>) {
    *axes = AxisInput {
        x: Some(triple.x),
        y: Some(triple.y),
        z: Some(triple.z),
    };
}

/// Applies one `key=value` pair and switches on the matching toggle.
///
/// # Errors
///
/// Returns [`cmdblock_core::error::Error::UnknownField`] for keys outside
/// [`REWRITE_FIELDS`].
pub fn apply_field(request: &mut ModificationRequest, key: &str, value: &str) -> Result<()> {
    validate_field(key, &REWRITE_FIELDS)?;

    let axis = key.chars().last().unwrap_or('x');
    match key {
        "x" | "y" | "z" => {
            request.modify_position = true;
            set_axis(&mut request.position, axis, value);
        }
        "target_x" | "target_y" | "target_z" => {
            request.modify_target = true;
            set_axis(&mut request.target, axis, value);
        }
        "center_x" | "center_y" | "center_z" => {
            request.modify_centering = true;
            set_axis(&mut request.centering, axis, value);
        }
        "trans_x" | "trans_y" | "trans_z" => {
            request.modify_translation = true;
            set_axis(&mut request.translation, axis, value);
        }
        "length" => {
            request.modify_scale = true;
            request.scale_length = Some(value.to_string());
        }
        "tag" => request.tag = Some(value.to_string()),
        _ => request.block = Some(value.to_string()),
    }

    Ok(())
}

/// Builds the modification request for `rewrite`.
///
/// The preset (if any) comes first, then the mode and recovery flags, then
/// whole triples, then individual `-p` fields, so later sources win.
///
/// # Errors
///
/// Returns an error for an unknown preset, a triple that cannot be read, or
/// a malformed or unknown `-p` field.
pub fn build_request(args: &RewriteArgs) -> Result<ModificationRequest> {
    let mut request = match &args.preset {
        Some(name) => {
            let preset = Preset::from_str(name)?;
            debug!("Starting from preset `{preset}`");
            preset.request()
        }
        None => ModificationRequest::default(),
    };

    if args.use_set {
        request.mode = Mode::Set;
    }
    if args.keep_origin {
        request.recovery = RecoveryPolicy::Origin;
    }

    if let Some(position) = &args.position {
        request.modify_position = true;
        set_triple(&mut request.position, parse_triple(position)?);
    }
    if let Some(target) = &args.target {
        request.modify_target = true;
        set_triple(&mut request.target, parse_triple(target)?);
    }
    if let Some(center) = &args.center {
        request.modify_centering = true;
        set_triple(&mut request.centering, parse_triple(center)?);
    }

    for param_str in &args.parameters {
        let (key, value) = split_assignment(param_str)?;
        apply_field(&mut request, key, value)?;
    }

    Ok(request)
}

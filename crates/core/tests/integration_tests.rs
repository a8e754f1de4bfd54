//! Integration tests for cmdblock-core
//!
//! These tests verify that the core functionality works together correctly
//! by testing complete workflows end-to-end.

use cmdblock_core::{
    command::{CommandShape, Coordinates, Formation, Triple},
    config::{get_settings_path, Settings},
    coords::parse_triple,
    file_handling::{load_settings, save_settings},
    generate::{
        beam_display, end_crystal_pair, laser, laser_setup, rotation, BeamSpec, EndCrystalSpec,
        LaserSpec, RotationSpec,
    },
    presets::Preset,
    request::{AxisInput, Mode, ModificationRequest, RewriteInput},
    rewrite::{rewrite, Rewrite},
    shape::classify,
};
use tempfile::NamedTempFile;

fn run(text: &str, request: ModificationRequest) -> Rewrite {
    rewrite(&RewriteInput::new(text, request)).unwrap()
}

fn strings(x: &str, y: &str, z: &str) -> Triple<String> {
    Triple::new(x.to_string(), y.to_string(), z.to_string())
}

fn shape_of(text: &str) -> CommandShape {
    let normalized = if text.starts_with('/') {
        text.to_string()
    } else {
        format!("/{text}")
    };
    classify(&normalized).shape()
}

/// Block replacement on a setblock leaves the coordinates alone
#[test]
fn test_setblock_block_replacement_workflow() {
    let request = ModificationRequest {
        block: Some("minecraft:glass".to_string()),
        ..ModificationRequest::default()
    };
    let result = run("/setblock 10 20 30 minecraft:stone", request);

    assert_eq!(result.text, "/setblock 10 20 30 minecraft:glass");
    assert_eq!(result.shape, CommandShape::SetBlock);
}

/// Tag rename on a block display touches only the tag
#[test]
fn test_block_display_tag_rename_workflow() {
    let input = r#"/summon minecraft:block_display 1.000000 2.000000 3.000000 {block_state:{Name:"minecraft:stone"},Tags:["beam1"]}"#;
    let request = ModificationRequest {
        tag: Some("beam2".to_string()),
        ..ModificationRequest::default()
    };
    let result = run(input, request);

    assert_eq!(
        result.text,
        r#"/summon minecraft:block_display 1.000000 2.000000 3.000000 {block_state:{Name:"minecraft:stone"},Tags:["beam2"]}"#
    );
    assert_eq!(result.original.tag.as_deref(), Some("beam1"));
}

/// Offsetting a kill selector keeps the input's missing slash
#[test]
fn test_kill_selector_offset_workflow() {
    let request = ModificationRequest {
        modify_position: true,
        position: AxisInput::new("1", "1", "1"),
        ..ModificationRequest::default()
    };
    let result = run("kill @e[type=armor_stand,x=5,y=6,z=7]", request);

    assert_eq!(result.text, "kill @e[type=armor_stand,x=6,y=7,z=8]");
}

/// End crystal generator output re-classifies with the generating values
#[test]
fn test_end_crystal_generator_workflow() {
    let pair = end_crystal_pair(&EndCrystalSpec {
        origin: strings("0", "0", "0"),
        target: strings("10", "5", "10"),
    })
    .unwrap();

    assert!(pair.spawn.contains("BeamTarget:{X:10,Y:5,Z:10}"));
    assert!(pair.despawn.contains("x=0,y=0,z=0"));

    let spawn = classify(&format!("/{}", pair.spawn));
    assert_eq!(
        spawn.shape(),
        CommandShape::SummonEndCrystal(Formation::WellFormed)
    );
    let fields = spawn.fields();
    assert_eq!(fields.position, Some(Coordinates::Integer(Triple::new(0, 0, 0))));
    assert_eq!(fields.target, Some(Triple::new(10, 5, 10)));

    let despawn = classify(&format!("/{}", pair.despawn)).fields();
    assert_eq!(despawn.position, Some(Coordinates::Integer(Triple::new(0, 0, 0))));
    assert_eq!(despawn.tag.as_deref(), Some("laser"));
}

/// A malformed summon is rebuilt with its target at origin plus offset
#[test]
fn test_malformed_summon_reconstruction_workflow() {
    let request = ModificationRequest {
        modify_target: true,
        target: AxisInput::new("0", "10", "0"),
        ..ModificationRequest::default()
    };
    let result = run("summon end_crystal 3, 64, -2", request);

    assert_eq!(
        result.text,
        r#"summon end_crystal 3 64 -2 {ShowBottom:0b,Invulnerable:1b,Tags:["laser"],BeamTarget:{X:3,Y:74,Z:-2}}"#
    );
    assert_eq!(
        shape_of(&result.text),
        CommandShape::SummonEndCrystal(Formation::WellFormed)
    );
}

/// Unrecognized commands come back byte for byte
#[test]
fn test_unrecognized_identity_workflow() {
    let request = Preset::Laser.request();
    for input in ["/say hi", "give @p minecraft:diamond 64", "/tp @s 1 2 3", ""] {
        let result = run(input, request.clone());
        assert_eq!(result.text, input);
        assert_eq!(result.shape, CommandShape::Unrecognized);
    }
}

/// Rewriting twice with the same Set request is stable
#[test]
fn test_set_mode_is_idempotent() {
    let input = r#"/summon end_crystal 0 64 0 {ShowBottom:0b,Invulnerable:1b,Tags:["laser"],BeamTarget:{X:10,Y:5,Z:10}}"#;
    let request = ModificationRequest {
        mode: Mode::Set,
        modify_position: true,
        position: AxisInput::new("7", "", "9"),
        modify_target: true,
        target: AxisInput::new("", "", "-3"),
        ..ModificationRequest::default()
    };

    let once = run(input, request.clone());
    let twice = run(&once.text, request);
    assert_eq!(once.text, twice.text);
    assert!(!twice.changed());
}

/// Fields whose toggle is off survive every other stage unchanged
#[test]
fn test_untouched_fields_are_preserved() {
    let input = r#"/summon minecraft:block_display 4.250000 64.000000 -8.125000 {block_state:{Name:"minecraft:stone"},transformation:{translation:[0.5f,0.0f,0.0f],scale:[0.1f,0.1f,-150.0f]},Tags:["beam1"]}"#;
    let request = ModificationRequest {
        modify_scale: true,
        scale_length: Some("-20".to_string()),
        ..ModificationRequest::default()
    };
    let result = run(input, request);

    assert_eq!(result.original.position, result.updated.position);
    assert_eq!(result.original.translation, result.updated.translation);
    assert_eq!(result.original.tag, result.updated.tag);
    assert_eq!(result.original.block, result.updated.block);
    assert_ne!(result.original.scale, result.updated.scale);
    assert!(result.text.contains("translation:[0.5f,0.0f,0.0f]"));
}

/// Block display outputs use six fractional digits, integer shapes bare integers
#[test]
fn test_output_number_formats() {
    let request = ModificationRequest {
        modify_position: true,
        position: AxisInput::new("1", "0", "0"),
        ..ModificationRequest::default()
    };

    let display = run(
        r#"/summon minecraft:block_display 1 2 3 {block_state:{Name:"minecraft:stone"}}"#,
        request.clone(),
    );
    assert!(display.text.starts_with("/summon minecraft:block_display 2.000000 2.000000 3.000000 "));

    let setblock = run("/setblock 1 2 3 minecraft:stone", request);
    assert_eq!(setblock.text, "/setblock 2 2 3 minecraft:stone");
}

/// Generated beams round-trip through the classifier and start their scale with 0.1
#[test]
fn test_beam_generator_round_trip() {
    let command = beam_display(&BeamSpec {
        position: strings("10.5", "64", "-3.25"),
        block: "minecraft__red_concrete".to_string(),
        tag: "beam3".to_string(),
        translation: strings("0.5", "0", "0"),
        length: "-150".to_string(),
    })
    .unwrap();

    let classified = classify(&command);
    assert_eq!(classified.shape(), CommandShape::SummonBlockDisplay);

    let fields = classified.fields();
    assert_eq!(
        fields.position,
        Some(Coordinates::Decimal(Triple::new(10.5, 64.0, -3.25)))
    );
    assert_eq!(fields.block.as_deref(), Some("minecraft:red_concrete"));
    assert_eq!(fields.tag.as_deref(), Some("beam3"));
    assert_eq!(fields.translation, Some(Triple::new(Some(0.5), Some(0.0), Some(0.0))));
    assert_eq!(fields.scale, Some(Triple::new(Some(0.1), Some(0.1), Some(-150.0))));
}

/// Laser commands classify as block displays, the setup steps as execute/tp
#[test]
fn test_laser_generators_workflow() {
    let spec = LaserSpec {
        position: strings("3", "70", "8"),
        block: "minecraft:lime_concrete".to_string(),
        tag: "beam1".to_string(),
        length: "-100".to_string(),
    };

    let command = laser(&spec).unwrap();
    assert_eq!(shape_of(&command), CommandShape::SummonBlockDisplay);
    assert!(command.contains(" 3.000000 70.500000 8.000001 "));

    let setup = laser_setup(&spec).unwrap();
    assert_eq!(shape_of(&setup.summon), CommandShape::SummonBlockDisplay);
    assert_eq!(shape_of(&setup.translation_fix), CommandShape::ExecuteOrTeleport);
    assert_eq!(shape_of(&setup.placement), CommandShape::ExecuteOrTeleport);

    let rotate = rotation(&RotationSpec {
        tag: "beam1".to_string(),
        rot_x: "0".to_string(),
        rot_y: "1".to_string(),
    })
    .unwrap();
    assert_eq!(classify(&rotate).fields().tag.as_deref(), Some("beam1"));
}

/// A pasted triple feeds straight into a position request
#[test]
fn test_coordinate_autofill_workflow() {
    let pasted = parse_triple("100, 65, -20").unwrap();
    let request = ModificationRequest {
        mode: Mode::Set,
        modify_position: true,
        position: AxisInput::new(&pasted.x, &pasted.y, &pasted.z),
        ..ModificationRequest::default()
    };

    let result = run("/setblock 0 0 0 minecraft:beacon", request);
    assert_eq!(result.text, "/setblock 100 65 -20 minecraft:beacon");
}

/// Settings survive a save and load, and a missing file gives defaults
#[test]
fn test_settings_persistence_workflow() {
    let temp_file = NamedTempFile::new().unwrap();
    let temp_path = get_settings_path(&Some(temp_file.path().to_str().unwrap().to_string()));

    let mut settings = load_settings(&temp_path).unwrap();
    assert_eq!(settings, Settings::default());

    settings.key_bind = "F8".to_string();
    settings.defaults.block = "minecraft:glass".to_string();
    save_settings(&temp_path, &settings).unwrap();

    let reloaded = load_settings(&temp_path).unwrap();
    assert_eq!(reloaded.key_bind, "F8");
    assert_eq!(reloaded.defaults.block, "minecraft:glass");
    assert!(!reloaded.always_on_top);
}

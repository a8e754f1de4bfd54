use std::io::{self, stderr, stdin, stdout, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use cmdblock_core::config::{self, Settings};
use cmdblock_core::error::Result;
use cmdblock_core::file_handling;
use cmdblock_core::request::{ModificationRequest, RewriteInput};
use cmdblock_core::rewrite::rewrite;
use itertools::Itertools;
use log::debug;

use cmdblock_cli::arguments::{build_request, Provider};
use cmdblock_cli::cli_args::{Args, GeneratorArgs, Operation, RewriteArgs, SettingsArgs};
use cmdblock_cli::generators::Generator;
use cmdblock_cli::report::print_report;

fn rewrite_line(line: &str, request: &ModificationRequest, quiet: bool) -> Result<String> {
    let result = rewrite(&RewriteInput::new(line, request.clone()))?;
    if !quiet {
        print_report(&result.report(), &mut stderr())?;
    }

    Ok(result.text)
}

fn run_rewrite(args: &RewriteArgs) -> Result<()> {
    let request = build_request(args)?;
    debug!("Request: {request:?}");

    let mut out = stdout();
    match &args.command {
        Some(command) => {
            writeln!(out, "{}", rewrite_line(command, &request, args.quiet)?)?;
        }
        None => {
            for line in stdin().lock().lines() {
                writeln!(out, "{}", rewrite_line(&line?, &request, args.quiet)?)?;
            }
        }
    }

    Ok(())
}

fn run_generator(generator: Generator, args: &GeneratorArgs, settings: &Settings) -> Result<()> {
    let lines = generator.run(args.get_style()?, &settings.defaults)?;

    let mut out = stdout();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn print_settings(settings_path: &str, settings: &Settings, out: &mut impl Write) -> io::Result<()> {
    let defaults = &settings.defaults;
    writeln!(out, "Settings file: {settings_path}")?;
    writeln!(out, "key_bind: {}", settings.key_bind)?;
    writeln!(out, "always_on_top: {}", settings.always_on_top)?;
    writeln!(out, "block: {}", defaults.block)?;
    writeln!(out, "tag: {}", defaults.tag)?;
    writeln!(out, "translation: {}", defaults.translation.iter().join(" "))?;
    writeln!(out, "beam_length: {}", defaults.beam_length)?;
    writeln!(out, "laser_length: {}", defaults.laser_length)?;
    writeln!(out, "rotation: {}", defaults.rotation.iter().join(" "))
}

fn run_settings(args: &SettingsArgs, settings_path: &str, mut settings: Settings) -> Result<()> {
    if args.key_bind.is_none() && args.always_on_top.is_none() {
        print_settings(settings_path, &settings, &mut stdout())?;
        return Ok(());
    }

    if let Some(key_bind) = &args.key_bind {
        settings.key_bind.clone_from(key_bind);
    }
    if let Some(always_on_top) = args.always_on_top {
        settings.always_on_top = always_on_top;
    }

    file_handling::save_settings(settings_path, &settings)
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let settings_path = config::get_settings_path(&args.settings_path);
    debug!("Settings path: `{}`", settings_path);
    let settings = file_handling::load_settings(&settings_path)?;

    match &args.operation {
        Operation::Rewrite(rewrite_args) => run_rewrite(rewrite_args),
        Operation::Beam(generator_args) => run_generator(Generator::Beam, generator_args, &settings),
        Operation::Laser(generator_args) => {
            run_generator(Generator::Laser, generator_args, &settings)
        }
        Operation::LaserSetup(generator_args) => {
            run_generator(Generator::LaserSetup, generator_args, &settings)
        }
        Operation::Crystal(generator_args) => {
            run_generator(Generator::Crystal, generator_args, &settings)
        }
        Operation::Rotate(generator_args) => {
            run_generator(Generator::Rotate, generator_args, &settings)
        }
        Operation::Settings(settings_args) => run_settings(settings_args, &settings_path, settings),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

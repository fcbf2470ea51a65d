use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

use spriteforge::commands::{CommandFactory, ForgeCommandFactory};
use spriteforge::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("SpriteForge")
        .version("0.1")
        .about("Prepare LPC sprite sheet assets: diagonal views, recolors, definition updates")
        .arg(
            Arg::new("input")
                .help("Input sprite sheet, or directory of sheets")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file or directory")
                .value_name("PATH")
                .required(false),
        )
        .arg(
            Arg::new("diagonal")
                .short('d')
                .long("diagonal")
                .help("Synthesize a diagonal view row")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("direction")
                .long("direction")
                .help("Diagonal direction to synthesize (ne, nw, se, sw)")
                .value_name("DIR")
                .default_value("ne")
                .required(false),
        )
        .arg(
            Arg::new("all-directions")
                .long("all-directions")
                .help("Produce all 8 direction rows (4 extracted + 4 synthesized)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("combined")
                .long("combined")
                .help("Stack the 8 direction rows into one combined sheet")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("shear")
                .long("shear")
                .help("Horizontal shear amount for diagonal synthesis")
                .value_name("AMOUNT")
                .default_value("0.15")
                .required(false),
        )
        .arg(
            Arg::new("width-squash")
                .long("width-squash")
                .help("Horizontal compression factor applied before the shear (0-1)")
                .value_name("FACTOR")
                .required(false),
        )
        .arg(
            Arg::new("min-sheet-height")
                .long("min-sheet-height")
                .help("Minimum height for a buffer to be treated as a stacked sheet")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("recolor")
                .short('r')
                .long("recolor")
                .help("Recolor sprites by palette substitution")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("old-colors")
                .long("old-colors")
                .help("Colors to replace, semicolon-separated (e.g. '128,128,128;96,96,96')")
                .value_name("COLORS")
                .required(false),
        )
        .arg(
            Arg::new("new-color")
                .long("new-color")
                .help("Replacement color (e.g. '0,255,0')")
                .value_name("COLOR")
                .required(false),
        )
        .arg(
            Arg::new("palette")
                .long("palette")
                .help("TOML palette file to apply")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("palette-name")
                .long("palette-name")
                .help("Built-in palette to apply (e.g. steel-to-gold)")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("inject")
                .long("inject")
                .help("Register missing sprite sheets in the JSON definitions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("definitions")
                .long("definitions")
                .help("Directory of per-category JSON definition files")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("backup-dir")
                .long("backup-dir")
                .help("Directory for pre-modification definition backups")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Preview definition changes without modifying files")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    let logger = match Logger::new("spriteforge.log", verbose) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("spriteforge-global.log", verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = ForgeCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}

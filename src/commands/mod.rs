//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod diagonal_command;
pub mod recolor_command;
pub mod inject_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use diagonal_command::DiagonalCommand;
pub use recolor_command::RecolorCommand;
pub use inject_command::InjectCommand;

use clap::ArgMatches;

use crate::sheet::errors::{ForgeError, ForgeResult};
use crate::sheet::layout::SheetLayout;
use crate::transform::ShearParams;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct ForgeCommandFactory;

impl ForgeCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ForgeCommandFactory
    }
}

impl Default for ForgeCommandFactory {
    fn default() -> Self {
        ForgeCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for ForgeCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        logger: &'a Logger,
    ) -> ForgeResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("diagonal") || args.get_flag("all-directions") {
            Ok(Box::new(DiagonalCommand::new(args, logger)?))
        } else if args.get_flag("recolor") {
            Ok(Box::new(RecolorCommand::new(args, logger)?))
        } else if args.get_flag("inject") {
            Ok(Box::new(InjectCommand::new(args, logger)?))
        } else {
            // Default to analyze command
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}

/// Parse the shear tuning flags shared by the transform commands
///
/// # Arguments
/// * `args` - CLI argument matches from clap
pub(crate) fn shear_params_from_args(args: &ArgMatches) -> ForgeResult<ShearParams> {
    let mut params = ShearParams::default();

    if let Some(amount_str) = args.get_one::<String>("shear") {
        params.amount = amount_str.parse::<f64>().map_err(|_| {
            ForgeError::GenericError(format!("Invalid shear amount: {}", amount_str))
        })?;
    }

    if let Some(squash_str) = args.get_one::<String>("width-squash") {
        let squash = squash_str.parse::<f64>().map_err(|_| {
            ForgeError::GenericError(format!("Invalid width squash: {}", squash_str))
        })?;
        params.width_squash = Some(squash);
    }

    params.validate()?;
    Ok(params)
}

/// Parse the sheet layout flags
///
/// # Arguments
/// * `args` - CLI argument matches from clap
pub(crate) fn sheet_layout_from_args(args: &ArgMatches) -> ForgeResult<SheetLayout> {
    match args.get_one::<String>("min-sheet-height") {
        Some(height_str) => {
            let min_height = height_str.parse::<u32>().map_err(|_| {
                ForgeError::GenericError(format!(
                    "Invalid minimum sheet height: {}",
                    height_str
                ))
            })?;
            Ok(SheetLayout::with_min_height(min_height))
        }
        None => Ok(SheetLayout::default()),
    }
}

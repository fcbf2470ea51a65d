//! Sprite sheet structure analysis command
//!
//! The default CLI action: loads a sheet and reports whether it follows the
//! 4-row LPC layout, its row height and its estimated frame count.

use std::path::Path;

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::sheet::errors::{ForgeError, ForgeResult};
use crate::sheet::layout::{SheetLayout, SHEET_ROWS};
use crate::sheet::Direction;
use crate::utils::image_io;
use crate::utils::logger::Logger;

/// Command for analyzing sprite sheet structure
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Minimum sheet height used by the layout heuristic
    layout: SheetLayout,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ForgeResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| ForgeError::GenericError("Missing input file".to_string()))?
            .clone();

        let layout = super::sheet_layout_from_args(args)?;

        Ok(AnalyzeCommand {
            input_file,
            layout,
            logger,
        })
    }

    /// Build the human-readable analysis report
    fn build_report(&self) -> ForgeResult<String> {
        let image = image_io::load_rgba(Path::new(&self.input_file))?;
        let width = image.width();
        let height = image.height();
        let conforms = self.layout.conforms(width, height);

        let mut report = String::from("Sprite Sheet Analysis Results:\n");
        report.push_str(&format!("  File: {}\n", self.input_file));
        report.push_str(&format!("  Dimensions: {}x{}\n", width, height));
        report.push_str(&format!(
            "  4-row sheet layout: {}\n",
            if conforms { "yes" } else { "no" }
        ));

        if height % SHEET_ROWS == 0 {
            let row_height = height / SHEET_ROWS;
            report.push_str(&format!("  Row height: {}\n", row_height));
            for direction in Direction::CARDINALS {
                if let Some(row) = direction.row_index() {
                    report.push_str(&format!(
                        "  Row {}: {} (y {}..{})\n",
                        row,
                        direction,
                        row * row_height,
                        (row + 1) * row_height
                    ));
                }
            }
            if row_height > 0 && width % row_height == 0 {
                report.push_str(&format!(
                    "  Frames per row (square frames): {}\n",
                    width / row_height
                ));
            }
        } else {
            report.push_str(&format!(
                "  Height {} is not divisible by {}, rows are misaligned\n",
                height, SHEET_ROWS
            ));
        }

        Ok(report)
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> ForgeResult<()> {
        info!("Analyzing {}", self.input_file);

        let report = self.build_report()?;
        self.logger.log_line(&report)?;
        println!("{}", report);

        Ok(())
    }
}

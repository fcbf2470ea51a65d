//! Diagonal view generation command
//!
//! Synthesizes diagonal-facing rows from 4-row sprite sheets, either one
//! direction at a time or as a full 8-direction export. Accepts a single
//! sheet or a directory tree of sheets.

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use image::RgbaImage;
use log::{error, info};

use crate::commands::command_traits::Command;
use crate::sheet::errors::{ForgeError, ForgeResult};
use crate::sheet::layout::SheetLayout;
use crate::sheet::Direction;
use crate::transform::{
    generate_all_directions, generate_diagonal_with_layout, ShearParams,
};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use crate::utils::{image_io, paths};

/// Command for generating diagonal sprite rows
pub struct DiagonalCommand<'a> {
    /// Path to the input sheet or directory
    input: String,
    /// Path of the output file or directory
    output: String,
    /// Target diagonal direction for single-direction runs
    direction: Direction,
    /// Whether to produce all 8 directions instead of one diagonal
    all_directions: bool,
    /// Whether the 8-direction output is stacked into one combined sheet
    combined: bool,
    /// Shear tuning
    params: ShearParams,
    /// Layout convention for the sheet check
    layout: SheetLayout,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DiagonalCommand<'a> {
    /// Create a new diagonal command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new DiagonalCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ForgeResult<Self> {
        let input = args
            .get_one::<String>("input")
            .ok_or_else(|| ForgeError::GenericError("Missing input path".to_string()))?
            .clone();

        let output = args
            .get_one::<String>("output")
            .ok_or_else(|| {
                ForgeError::GenericError(
                    "Missing output path for diagonal generation".to_string(),
                )
            })?
            .clone();

        let direction = match args.get_one::<String>("direction") {
            Some(token) => {
                let direction = Direction::parse(token)?;
                if !direction.is_diagonal() {
                    return Err(ForgeError::GenericError(format!(
                        "{} is not a diagonal direction (expected ne, nw, se or sw)",
                        direction
                    )));
                }
                direction
            }
            None => Direction::NorthEast,
        };

        let all_directions = args.get_flag("all-directions");
        let combined = args.get_flag("combined");
        let params = super::shear_params_from_args(args)?;
        let layout = super::sheet_layout_from_args(args)?;

        info!(
            "Diagonal generation: direction={}, all={}, combined={}, shear={}",
            direction, all_directions, combined, params.amount
        );

        Ok(DiagonalCommand {
            input,
            output,
            direction,
            all_directions,
            combined,
            params,
            layout,
            logger,
        })
    }

    /// Process one sheet into the requested outputs
    fn process_sheet(&self, sheet: &RgbaImage, output: &Path) -> ForgeResult<()> {
        if self.all_directions {
            let set = generate_all_directions(sheet, &self.params, &self.layout)?;
            if self.combined {
                let combined = set.into_combined_sheet()?;
                image_io::save_png(&combined, output)?;
            } else {
                for (direction, row) in set.iter() {
                    let path = paths::with_stem_suffix(output, &format!("_{}", direction));
                    image_io::save_png(row, &path)?;
                }
            }
        } else {
            let row =
                generate_diagonal_with_layout(sheet, self.direction, &self.params, &self.layout)?;
            image_io::save_png(&row, output)?;
        }
        Ok(())
    }

    /// Run the generation over a single sheet file
    fn run_single(&self, input: &Path, output: &Path) -> ForgeResult<()> {
        let sheet = image_io::load_rgba(input)?;
        self.process_sheet(&sheet, output)
    }

    /// Run the generation over every sheet under a directory
    fn run_batch(&self, source_root: &Path, output_root: &Path) -> ForgeResult<()> {
        let files = paths::collect_png_files(source_root)?;
        if files.is_empty() {
            return Err(ForgeError::GenericError(format!(
                "No PNG files found in {}",
                source_root.display()
            )));
        }

        let progress = ProgressTracker::new(files.len() as u64, "Generating diagonals");
        let mut succeeded = 0usize;
        let mut failed = 0usize;

        for file in &files {
            let result = paths::mirrored_output_path(source_root, file, output_root)
                .and_then(|output| self.run_single(file, &output));

            match result {
                Ok(()) => succeeded += 1,
                Err(e) => {
                    // One bad sheet must not stop the rest of the batch
                    error!("Failed to process {}: {}", file.display(), e);
                    failed += 1;
                }
            }
            progress.tick_file(&file.file_name().unwrap_or_default().to_string_lossy());
        }

        progress.finish_with_counts(succeeded, failed);
        self.logger.log_line(&format!(
            "Diagonal batch complete: {} succeeded, {} failed",
            succeeded, failed
        ))?;

        if succeeded == 0 {
            return Err(ForgeError::GenericError(
                "All files in the batch failed".to_string(),
            ));
        }
        Ok(())
    }
}

impl<'a> Command for DiagonalCommand<'a> {
    fn execute(&self) -> ForgeResult<()> {
        let input = PathBuf::from(&self.input);
        let output = PathBuf::from(&self.output);

        if input.is_dir() {
            self.run_batch(&input, &output)
        } else {
            self.run_single(&input, &output)
        }
    }
}

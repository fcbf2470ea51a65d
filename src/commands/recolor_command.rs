//! Palette recolor command
//!
//! Produces recolored sprite variants by palette substitution, over a
//! single sheet or a whole directory tree. The palette comes from explicit
//! colors, a TOML palette file or the built-in registry.

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{error, info};

use crate::commands::command_traits::Command;
use crate::recolor::{apply_palette_swap, load_palette_file, named_palette, palette_names, Palette};
use crate::sheet::errors::{ForgeError, ForgeResult};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use crate::utils::{image_io, paths};

/// Command for recoloring sprites via palette substitution
pub struct RecolorCommand<'a> {
    /// Path to the input sheet or directory
    input: String,
    /// Path of the output file or directory
    output: String,
    /// The palette to apply
    palette: Palette,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> RecolorCommand<'a> {
    /// Create a new recolor command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new RecolorCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ForgeResult<Self> {
        let input = args
            .get_one::<String>("input")
            .ok_or_else(|| ForgeError::GenericError("Missing input path".to_string()))?
            .clone();

        let output = args
            .get_one::<String>("output")
            .ok_or_else(|| {
                ForgeError::GenericError("Missing output path for recoloring".to_string())
            })?
            .clone();

        let palette = Self::resolve_palette(args)?;
        info!(
            "Recolor: {} source color(s) -> {}",
            palette.sources.len(),
            palette.replacement
        );

        Ok(RecolorCommand {
            input,
            output,
            palette,
            logger,
        })
    }

    /// Resolve the palette from the CLI arguments
    ///
    /// Precedence: built-in registry name, then palette file, then explicit
    /// color lists.
    fn resolve_palette(args: &ArgMatches) -> ForgeResult<Palette> {
        if let Some(name) = args.get_one::<String>("palette-name") {
            return named_palette(name).ok_or_else(|| {
                ForgeError::GenericError(format!(
                    "Unknown palette '{}'. Available: {}",
                    name,
                    palette_names().join(", ")
                ))
            });
        }

        if let Some(path) = args.get_one::<String>("palette") {
            return load_palette_file(Path::new(path));
        }

        let old_colors = args.get_one::<String>("old-colors").ok_or_else(|| {
            ForgeError::GenericError(
                "Recoloring needs --palette-name, --palette or --old-colors/--new-color"
                    .to_string(),
            )
        })?;
        let new_color = args.get_one::<String>("new-color").ok_or_else(|| {
            ForgeError::GenericError("Missing --new-color for recoloring".to_string())
        })?;

        let sources: Vec<String> = old_colors
            .split(';')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Palette::from_strings(&sources, new_color)
    }

    /// Recolor a single sheet file
    fn run_single(&self, input: &Path, output: &Path) -> ForgeResult<()> {
        let sheet = image_io::load_rgba(input)?;
        let recolored = apply_palette_swap(&sheet, &self.palette);
        image_io::save_png(&recolored, output)
    }

    /// Recolor every sheet under a directory into a mirrored tree
    fn run_batch(&self, source_root: &Path, output_root: &Path) -> ForgeResult<()> {
        let files = paths::collect_png_files(source_root)?;
        if files.is_empty() {
            return Err(ForgeError::GenericError(format!(
                "No PNG files found in {}",
                source_root.display()
            )));
        }

        let progress = ProgressTracker::new(files.len() as u64, "Recoloring sprites");
        let mut succeeded = 0usize;
        let mut failed = 0usize;

        for file in &files {
            let result = paths::mirrored_output_path(source_root, file, output_root)
                .and_then(|output| self.run_single(file, &output));

            match result {
                Ok(()) => succeeded += 1,
                Err(e) => {
                    error!("Failed to recolor {}: {}", file.display(), e);
                    failed += 1;
                }
            }
            progress.tick_file(&file.file_name().unwrap_or_default().to_string_lossy());
        }

        progress.finish_with_counts(succeeded, failed);
        self.logger.log_line(&format!(
            "Recolor batch complete: {} succeeded, {} failed",
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

impl<'a> Command for RecolorCommand<'a> {
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

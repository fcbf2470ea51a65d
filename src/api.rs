use std::path::Path;

use log::info;

use crate::definitions::{inject_missing_entries, InjectionReport, DEFAULT_BACKUP_DIR};
use crate::recolor::{apply_palette_swap, Palette};
use crate::sheet::errors::ForgeResult;
use crate::sheet::layout::{SheetLayout, SHEET_ROWS};
use crate::sheet::Direction;
use crate::transform::{generate_all_directions, generate_diagonal_with_layout, ShearParams};
use crate::utils::image_io;
use crate::utils::logger::Logger;
use crate::utils::paths;

/// Main interface to the spriteforge library
pub struct SpriteForge {
    logger: Logger,
    layout: SheetLayout,
}

impl SpriteForge {
    /// Create a new SpriteForge instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "spriteforge.log"
    ///
    /// # Returns
    /// A SpriteForge instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> ForgeResult<Self> {
        let log_path = log_file.unwrap_or("spriteforge.log");
        let logger = Logger::new(log_path, false)?;
        Ok(SpriteForge {
            logger,
            layout: SheetLayout::default(),
        })
    }

    /// Use a custom minimum sheet height for the layout heuristic
    pub fn with_layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Analyze a sprite sheet and return information about its structure
    ///
    /// # Arguments
    /// * `input_path` - Path to the sheet to analyze
    ///
    /// # Returns
    /// String containing analysis information or an error
    pub fn analyze(&self, input_path: &str) -> ForgeResult<String> {
        let image = image_io::load_rgba(Path::new(input_path))?;
        let width = image.width();
        let height = image.height();

        let mut result = String::from("Sprite Sheet Analysis Results:\n");
        result.push_str(&format!("  Dimensions: {}x{}\n", width, height));
        result.push_str(&format!(
            "  4-row sheet layout: {}\n",
            if self.layout.conforms(width, height) {
                "yes"
            } else {
                "no"
            }
        ));
        if height % SHEET_ROWS == 0 {
            result.push_str(&format!("  Row height: {}\n", height / SHEET_ROWS));
        }

        self.logger.log_line(&result)?;
        Ok(result)
    }

    /// Synthesize one diagonal row from a sheet file
    ///
    /// # Arguments
    /// * `input_path` - Path to the source sheet
    /// * `output_path` - Where to save the synthesized row
    /// * `direction` - Diagonal direction token ("ne", "nw", "se", "sw")
    /// * `params` - Shear amount and optional width squash
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn generate_diagonal(
        &self,
        input_path: &str,
        output_path: &str,
        direction: &str,
        params: &ShearParams,
    ) -> ForgeResult<()> {
        let direction = Direction::parse(direction)?;
        let sheet = image_io::load_rgba(Path::new(input_path))?;

        info!("Generating {} diagonal for {}", direction, input_path);
        let row = generate_diagonal_with_layout(&sheet, direction, params, &self.layout)?;
        image_io::save_png(&row, Path::new(output_path))
    }

    /// Produce all eight direction rows for a sheet file
    ///
    /// With `combined` set the rows are stacked into a single 8-row sheet
    /// at the output path; otherwise each row is written separately with a
    /// direction suffix on the file stem.
    ///
    /// # Arguments
    /// * `input_path` - Path to the source sheet
    /// * `output_path` - Output file (combined) or file stem (separate)
    /// * `params` - Shear amount and optional width squash
    /// * `combined` - Whether to stack all rows into one sheet
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn generate_all_directions(
        &self,
        input_path: &str,
        output_path: &str,
        params: &ShearParams,
        combined: bool,
    ) -> ForgeResult<()> {
        let sheet = image_io::load_rgba(Path::new(input_path))?;

        info!("Generating all 8 directions for {}", input_path);
        let set = generate_all_directions(&sheet, params, &self.layout)?;

        if combined {
            let stacked = set.into_combined_sheet()?;
            image_io::save_png(&stacked, Path::new(output_path))
        } else {
            let output = Path::new(output_path);
            for (direction, row) in set.iter() {
                let path = paths::with_stem_suffix(output, &format!("_{}", direction));
                image_io::save_png(row, &path)?;
            }
            Ok(())
        }
    }

    /// Recolor a sheet file via palette substitution
    ///
    /// # Arguments
    /// * `input_path` - Path to the source sheet
    /// * `output_path` - Where to save the recolored sheet
    /// * `palette` - Source colors and their replacement
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn recolor(
        &self,
        input_path: &str,
        output_path: &str,
        palette: &Palette,
    ) -> ForgeResult<()> {
        let sheet = image_io::load_rgba(Path::new(input_path))?;
        let recolored = apply_palette_swap(&sheet, palette);
        image_io::save_png(&recolored, Path::new(output_path))
    }

    /// Register missing sprite sheets in the JSON definition files
    ///
    /// # Arguments
    /// * `spritesheet_dir` - Root of the spritesheet tree
    /// * `definitions_dir` - Directory of per-category JSON files
    /// * `dry_run` - Report the diff without writing anything
    ///
    /// # Returns
    /// A report of what was found and what was written
    pub fn inject_definitions(
        &self,
        spritesheet_dir: &str,
        definitions_dir: &str,
        dry_run: bool,
    ) -> ForgeResult<InjectionReport> {
        inject_missing_entries(
            Path::new(spritesheet_dir),
            Path::new(definitions_dir),
            Path::new(DEFAULT_BACKUP_DIR),
            dry_run,
        )
    }
}

//! Diagonal view synthesis orchestration
//!
//! Composes row extraction with the shear transform to approximate the four
//! diagonal facings missing from 4-direction LPC source art. NE/NW lean the
//! North row, SE/SW lean the South row.

use image::{imageops, RgbaImage};
use log::{debug, info, warn};

use crate::sheet::direction::Direction;
use crate::sheet::errors::{ForgeError, ForgeResult};
use crate::sheet::layout::SheetLayout;
use crate::sheet::validation;
use crate::transform::extract::extract_row;
use crate::transform::shear::{apply_shear, ShearParams};

/// The four synthesized diagonal rows
#[derive(Debug)]
pub struct DiagonalSet {
    pub ne: RgbaImage,
    pub nw: RgbaImage,
    pub se: RgbaImage,
    pub sw: RgbaImage,
}

impl DiagonalSet {
    /// Get the row for a diagonal direction
    ///
    /// # Returns
    /// The synthesized buffer, or None for cardinal directions
    pub fn get(&self, direction: Direction) -> Option<&RgbaImage> {
        match direction {
            Direction::NorthEast => Some(&self.ne),
            Direction::NorthWest => Some(&self.nw),
            Direction::SouthEast => Some(&self.se),
            Direction::SouthWest => Some(&self.sw),
            _ => None,
        }
    }
}

/// All eight direction rows for a sheet
///
/// Cardinal rows are pure extractions from the source; diagonal rows are
/// synthesized. Every buffer is independent of the others.
#[derive(Debug)]
pub struct DirectionSet {
    pub s: RgbaImage,
    pub w: RgbaImage,
    pub n: RgbaImage,
    pub e: RgbaImage,
    pub se: RgbaImage,
    pub sw: RgbaImage,
    pub ne: RgbaImage,
    pub nw: RgbaImage,
}

impl DirectionSet {
    /// Get the row for a direction
    pub fn get(&self, direction: Direction) -> &RgbaImage {
        match direction {
            Direction::South => &self.s,
            Direction::West => &self.w,
            Direction::North => &self.n,
            Direction::East => &self.e,
            Direction::SouthEast => &self.se,
            Direction::SouthWest => &self.sw,
            Direction::NorthEast => &self.ne,
            Direction::NorthWest => &self.nw,
        }
    }

    /// Iterate rows in the combined-sheet order (s, w, n, e, se, sw, ne, nw)
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &RgbaImage)> {
        Direction::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Stack all eight rows into a single export sheet
    ///
    /// Rows are stacked top to bottom in the order s, w, n, e, se, sw, ne,
    /// nw, extending the 4-row source convention.
    ///
    /// # Returns
    /// A sheet of size (row width, row height * 8), or an error when the
    /// rows disagree on dimensions
    pub fn into_combined_sheet(self) -> ForgeResult<RgbaImage> {
        let width = self.s.width();
        let row_height = self.s.height();

        for (direction, row) in self.iter() {
            if row.width() != width || row.height() != row_height {
                return Err(ForgeError::GenericError(format!(
                    "Row {} is {}x{}, expected {}x{}",
                    direction,
                    row.width(),
                    row.height(),
                    width,
                    row_height
                )));
            }
        }

        let mut combined = RgbaImage::new(width, row_height * 8);
        for (i, (_, row)) in self.iter().enumerate() {
            imageops::replace(&mut combined, row, 0, (i as u32 * row_height) as i64);
        }
        Ok(combined)
    }
}

/// Synthesize a single diagonal row from a 4-row sheet
///
/// Buffers that do not follow the stacked sheet layout are not rejected:
/// the shear is applied to the whole buffer instead, so pre-cut single
/// rows still produce usable output. That degraded path is reported
/// through a warning, never an error.
///
/// # Arguments
/// * `sheet` - The source sheet (or a single pre-cut row)
/// * `direction` - Target diagonal (ne, nw, se, sw)
/// * `params` - Shear amount and optional width squash
/// * `layout` - Layout convention used for the sheet check
///
/// # Returns
/// The synthesized row, or the sheared whole buffer on the fallback path
pub fn generate_diagonal_with_layout(
    sheet: &RgbaImage,
    direction: Direction,
    params: &ShearParams,
    layout: &SheetLayout,
) -> ForgeResult<RgbaImage> {
    validation::validate_buffer(sheet)?;

    let source_row = direction.source_row().ok_or_else(|| {
        ForgeError::GenericError(format!("{} is not a diagonal direction", direction))
    })?;

    if !layout.conforms(sheet.width(), sheet.height()) {
        warn!(
            "Buffer {}x{} does not follow the 4-row sheet layout, shearing it whole",
            sheet.width(),
            sheet.height()
        );
        return apply_shear(sheet, direction, params);
    }

    debug!(
        "Synthesizing {} from row {} (shear {})",
        direction, source_row, params.amount
    );
    let base_row = extract_row(sheet, source_row)?;
    apply_shear(&base_row, direction, params)
}

/// Synthesize a single diagonal row using the default layout convention
///
/// # Arguments
/// * `sheet` - The source sheet
/// * `direction` - Target diagonal (ne, nw, se, sw)
/// * `params` - Shear amount and optional width squash
pub fn generate_diagonal(
    sheet: &RgbaImage,
    direction: Direction,
    params: &ShearParams,
) -> ForgeResult<RgbaImage> {
    generate_diagonal_with_layout(sheet, direction, params, &SheetLayout::default())
}

/// Synthesize all four diagonal rows
///
/// Conforming sheets extract each source row once and lean it both ways;
/// non-conforming buffers fall back to whole-buffer shears, mirroring
/// `generate_diagonal`.
///
/// # Arguments
/// * `sheet` - The source sheet
/// * `params` - Shear amount and optional width squash
/// * `layout` - Layout convention used for the sheet check
pub fn generate_all_diagonals(
    sheet: &RgbaImage,
    params: &ShearParams,
    layout: &SheetLayout,
) -> ForgeResult<DiagonalSet> {
    validation::validate_buffer(sheet)?;

    if !layout.conforms(sheet.width(), sheet.height()) {
        warn!(
            "Buffer {}x{} does not follow the 4-row sheet layout, shearing it whole",
            sheet.width(),
            sheet.height()
        );
        return Ok(DiagonalSet {
            ne: apply_shear(sheet, Direction::NorthEast, params)?,
            nw: apply_shear(sheet, Direction::NorthWest, params)?,
            se: apply_shear(sheet, Direction::SouthEast, params)?,
            sw: apply_shear(sheet, Direction::SouthWest, params)?,
        });
    }

    let north = extract_row(sheet, 2)?;
    let south = extract_row(sheet, 0)?;

    Ok(DiagonalSet {
        ne: apply_shear(&north, Direction::NorthEast, params)?,
        nw: apply_shear(&north, Direction::NorthWest, params)?,
        se: apply_shear(&south, Direction::SouthEast, params)?,
        sw: apply_shear(&south, Direction::SouthWest, params)?,
    })
}

/// Produce all eight direction rows for a sheet
///
/// The four cardinal rows are extracted as-is and the four diagonals are
/// synthesized from them. The sheet height must divide evenly into 4 rows;
/// a sheet below the layout's minimum height is accepted with a warning
/// since its rows are still addressable.
///
/// # Arguments
/// * `sheet` - The source sheet
/// * `params` - Shear amount and optional width squash
/// * `layout` - Layout convention used for the height heuristic
pub fn generate_all_directions(
    sheet: &RgbaImage,
    params: &ShearParams,
    layout: &SheetLayout,
) -> ForgeResult<DirectionSet> {
    validation::validate_buffer(sheet)?;

    if sheet.height() % crate::sheet::layout::SHEET_ROWS != 0 {
        return Err(ForgeError::InvalidSheetDimensions(
            sheet.width(),
            sheet.height(),
        ));
    }
    if sheet.height() < layout.min_sheet_height {
        warn!(
            "Sheet height {} below the usual minimum of {}, proceeding anyway",
            sheet.height(),
            layout.min_sheet_height
        );
    }

    info!(
        "Generating all 8 directions for {}x{} sheet",
        sheet.width(),
        sheet.height()
    );

    let s = extract_row(sheet, 0)?;
    let w = extract_row(sheet, 1)?;
    let n = extract_row(sheet, 2)?;
    let e = extract_row(sheet, 3)?;

    let se = apply_shear(&s, Direction::SouthEast, params)?;
    let sw = apply_shear(&s, Direction::SouthWest, params)?;
    let ne = apply_shear(&n, Direction::NorthEast, params)?;
    let nw = apply_shear(&n, Direction::NorthWest, params)?;

    Ok(DirectionSet {
        s,
        w,
        n,
        e,
        se,
        sw,
        ne,
        nw,
    })
}

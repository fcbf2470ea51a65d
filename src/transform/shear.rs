//! Horizontal shear transform for diagonal view synthesis
//!
//! A diagonal facing is approximated by leaning a cardinal row sideways:
//! every pixel is displaced horizontally in proportion to its vertical
//! position. Sampling is nearest-neighbor so pixel edges stay hard, and
//! anything that maps outside the source becomes fully transparent.

use image::{Rgba, RgbaImage};

use crate::sheet::direction::Direction;
use crate::sheet::errors::{ForgeError, ForgeResult};
use crate::sheet::validation;

/// Default horizontal shear for diagonal rows
///
/// 0.15 keeps layered paper-doll assets aligned while reading clearly as a
/// diagonal at LPC frame sizes.
pub const DEFAULT_SHEAR_AMOUNT: f64 = 0.15;

/// Tunable parameters for the shear transform
#[derive(Debug, Clone, Copy)]
pub struct ShearParams {
    /// Horizontal displacement per vertical pixel, as a fraction
    pub amount: f64,

    /// Optional horizontal compression applied before the shear.
    /// None leaves the canvas width unchanged.
    pub width_squash: Option<f64>,
}

impl Default for ShearParams {
    fn default() -> Self {
        ShearParams {
            amount: DEFAULT_SHEAR_AMOUNT,
            width_squash: None,
        }
    }
}

impl ShearParams {
    /// Create parameters with the given shear amount and no squash
    pub fn with_amount(amount: f64) -> Self {
        ShearParams {
            amount,
            width_squash: None,
        }
    }

    /// Validate parameter ranges
    ///
    /// # Returns
    /// Ok when the shear amount is in [0, 1] and the squash factor, if
    /// present, is in (0, 1]
    pub fn validate(&self) -> ForgeResult<()> {
        if !self.amount.is_finite() || !(0.0..=1.0).contains(&self.amount) {
            return Err(ForgeError::GenericError(format!(
                "Shear amount {} out of range (expected 0.0-1.0)",
                self.amount
            )));
        }
        if let Some(squash) = self.width_squash {
            if !squash.is_finite() || squash <= 0.0 || squash > 1.0 {
                return Err(ForgeError::GenericError(format!(
                    "Width squash {} out of range (expected 0.0-1.0)",
                    squash
                )));
            }
        }
        Ok(())
    }
}

/// Apply a horizontal shear to a buffer
///
/// Output pixels sample the source through the inverse affine map
/// `x_src = x + sign * amount * y` evaluated at pixel centers, where the
/// sign comes from the direction: rightward for `ne`/`se`, leftward for
/// `nw`/`sw`. Leftward shears add a compensating offset of
/// `width * amount` so the leaned content is not pushed off the left edge
/// of the canvas. Cardinal directions have zero shear and reproduce the
/// input.
///
/// When a width squash is set, the canvas shrinks to
/// `round(width * squash)` and the compression composes into the same
/// inverse map, so the buffer is resampled exactly once.
///
/// # Arguments
/// * `source` - The buffer to lean (a single row, or a whole sheet on the
///   orchestrator's fallback path)
/// * `direction` - Target direction, determines the shear sign
/// * `params` - Shear amount and optional width squash
///
/// # Returns
/// A freshly allocated buffer; same height as the source, same width
/// unless squashed
pub fn apply_shear(
    source: &RgbaImage,
    direction: Direction,
    params: &ShearParams,
) -> ForgeResult<RgbaImage> {
    validation::validate_buffer(source)?;
    params.validate()?;

    let squash = params.width_squash.unwrap_or(1.0);
    let src_width = source.width();
    let out_width = ((src_width as f64 * squash).round() as u32).max(1);
    let out_height = source.height();

    let shear = direction.shear_sign() * params.amount;
    let offset = if shear < 0.0 {
        out_width as f64 * params.amount
    } else {
        0.0
    };

    let mut output = RgbaImage::new(out_width, out_height);
    for y in 0..out_height {
        let y_center = y as f64 + 0.5;
        for x in 0..out_width {
            let x_center = x as f64 + 0.5;
            let x_src = ((x_center + shear * y_center + offset) / squash).floor();

            if x_src < 0.0 || x_src >= src_width as f64 {
                output.put_pixel(x, y, Rgba([0, 0, 0, 0]));
            } else {
                output.put_pixel(x, y, *source.get_pixel(x_src as u32, y));
            }
        }
    }

    Ok(output)
}

//! Geometric transforms over sprite sheet buffers
//!
//! Row extraction (a pure crop), the horizontal shear used for diagonal
//! synthesis, and the orchestration that combines them.

mod region;
mod extract;
mod shear;
mod diagonal;

#[cfg(test)]
mod tests;

pub use region::Region;
pub use extract::{extract_region, extract_row};
pub use shear::{apply_shear, ShearParams, DEFAULT_SHEAR_AMOUNT};
pub use diagonal::{
    generate_all_diagonals, generate_all_directions, generate_diagonal,
    generate_diagonal_with_layout, DiagonalSet, DirectionSet,
};

// During a sweep, a cell may only read neighbors the current pass has already visited.
// In ascending scan order (z, then y, then x) those are exactly the 13 offsets
// (dx, dy, dz) of the 3×3×3 box with
//
//     dz < 0,  or  dz == 0 && dy < 0,  or  dz == 0 && dy == 0 && dx < 0,
//
// ie. the half of the 26 non-zero neighbors that strictly precedes the center in scan
// order. The backward pass negates the offsets, which yields the other half.
// Enumeration order matters: offsets are generated z-major, so the first 9 all have
// dz == -1, the next 3 have dz == 0, dy == -1, and the last is (dx, dy, dz) = (-1, 0, 0).
// That grouping is what lets `skip()` drop whole groups of boundary-crossing directions
// at the pass's start corner with a single lower index. It is a fast path, not a safety
// guarantee: on flat grids offsets alias across strides, so the sweep still bounds-checks
// each read.

use super::grid::GridInfo;
use crate::Angstrom;
use nalgebra::Vector3;

/// Number of scan-order predecessors in a 3×3×3 neighborhood.
pub const STENCIL_SIZE: usize = 13;

/// Precomputed sweep stencil for one grid shape.
///
/// `offsets` are linear-index deltas (using the grid's strides), `lengths` the Euclidean
/// lengths of the corresponding cell offsets _in cell units_. The lengths are only used to
/// order candidate owners before the exact distance is re-evaluated, so they are not
/// scaled by the grid spacing.
#[derive(Debug, Clone)]
pub struct Stencil {
    pub(crate) offsets: [isize; STENCIL_SIZE],
    pub(crate) lengths: [Angstrom; STENCIL_SIZE],
}

impl Stencil {
    /// Build the stencil for `info`. Depends only on the grid shape, not on seed data.
    pub fn new(info: &GridInfo) -> Self {
        let mut offsets = [0isize; STENCIL_SIZE];
        let mut lengths = [0.0; STENCIL_SIZE];

        let mut k = 0;
        for dz in -1i64..=1 {
            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    if dz < 0 || (dz == 0 && dy < 0) || (dz == 0 && dy == 0 && dx < 0) {
                        offsets[k] = info.flatten_offset([dx, dy, dz]);
                        lengths[k] =
                            Vector3::new(dx as Angstrom, dy as Angstrom, dz as Angstrom).norm();
                        k += 1;
                    }
                }
            }
        }
        debug_assert_eq!(k, STENCIL_SIZE);

        Self { offsets, lengths }
    }

    /// First usable stencil index for a cell at the given lower-boundary flags.
    ///
    /// The grouping by enumeration order makes this a plain sum: at `z == 0` the 9
    /// `dz == -1` offsets would cross the boundary, at `y == 0` the 3 `dz == 0, dy == -1`
    /// offsets, at `x == 0` the final `dx == -1` offset. During the backward pass the same
    /// flags apply to the mirrored loop coordinates, ie. the grid's upper corner.
    #[inline]
    pub fn skip(&self, x0: bool, y0: bool, z0: bool) -> usize {
        (z0 as usize) * 9 + (y0 as usize) * 3 + (x0 as usize)
    }
}

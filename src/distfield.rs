#[allow(dead_code)]
pub mod grid;
#[allow(dead_code)]
pub mod stencil;
#[allow(dead_code)]
pub mod sweep;

use crate::{Angstrom, Seed};
pub use grid::{Aabb, GridInfo};
use nalgebra::{distance, Point3};
pub use stencil::{Stencil, STENCIL_SIZE};
pub use sweep::UNOWNED;

/// Discrete signed distance field with nearest-seed assignment.
///
/// Built once by [`DistanceField::new`] and immutable afterwards; there is no incremental
/// update, a changed seed set means rebuilding from scratch. The two result arrays are
/// positionally aligned with the grid's linear index (see [`GridInfo::flat_index`]).
#[derive(Debug, Clone)]
pub struct DistanceField {
    info: GridInfo,
    /// Distance from each cell's world position to the surface of its owner's sphere,
    /// negative inside. Infinite for cells no seed ever influenced.
    distances: Vec<Angstrom>,
    /// Index of the closest known seed per cell, [`UNOWNED`] if none.
    owners: Vec<i32>,
}

impl DistanceField {
    /// Build the field for `info` from seed positions and radii.
    ///
    /// `radii` either holds a single shared radius broadcast to every seed, or one radius
    /// per seed. The distance stored for a cell owned by seed `p` is
    /// `‖seed − cell_pos‖ − radius(p)`, ie. the signed distance to that seed's sphere
    /// surface as propagated by the sweep (an upper bound on the true minimum; see the
    /// crate docs).
    ///
    /// # Panics
    /// Panics if `radii.len()` is neither `1` nor the seed count. Grid preconditions are
    /// enforced by [`GridInfo::new`].
    pub fn new<S, I>(info: GridInfo, seeds: I, radii: &[Angstrom]) -> Self
    where
        S: Seed,
        I: IntoIterator<Item = S>,
    {
        let points: Vec<Point3<Angstrom>> = seeds
            .into_iter()
            .map(|seed| Point3::from(seed.coords()))
            .collect();

        assert!(
            radii.len() == 1 || radii.len() == points.len(),
            "radii length ({}) must be 1 (shared) or the seed count ({})",
            radii.len(),
            points.len()
        );

        // broadcast mask: all seeds read radii[0] when the radius is shared
        let rmask = if radii.len() == 1 { 0 } else { usize::MAX };
        let eval = |p: i32, pos: &Point3<Angstrom>| {
            let p = p as usize;
            distance(&points[p], pos) - radii[p & rmask]
        };

        let mut distances = vec![Angstrom::INFINITY; info.len()];
        let mut owners = vec![UNOWNED; info.len()];

        sweep::seed_cells(&info, &points, &mut distances, &mut owners, &eval);
        sweep::sweep(&info, &mut distances, &mut owners, &eval);

        Self {
            info,
            distances,
            owners,
        }
    }

    pub fn info(&self) -> &GridInfo {
        &self.info
    }

    /// Signed distance per cell, aligned with the grid's linear index.
    pub fn distances(&self) -> &[Angstrom] {
        &self.distances
    }

    /// Nearest-seed index per cell ([`UNOWNED`] where no seed ever propagated), aligned
    /// with the grid's linear index.
    pub fn owners(&self) -> &[i32] {
        &self.owners
    }

    /// Distance and owner of the cell at `(x, y, z)`, or `None` out of bounds.
    pub fn at(&self, cell: [usize; 3]) -> Option<(Angstrom, i32)> {
        let [xdim, ydim, zdim] = self.info.shape();
        if cell[0] >= xdim || cell[1] >= ydim || cell[2] >= zdim {
            return None;
        }

        let index = self.info.flat_index(cell);
        Some((self.distances[index], self.owners[index]))
    }
}

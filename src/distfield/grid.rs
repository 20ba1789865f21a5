use crate::{Angstrom, Seed};
use nalgebra::{Point3, Vector3};
use std::borrow::Borrow;

/// Axis-aligned bounding box of a point cloud.
///
/// Mostly a stepping stone towards [`GridInfo::covering`]: callers that derive their grid
/// from molecular data compute the box of all atom positions first and size the grid from
/// its extent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Aabb {
    inf: Point3<Angstrom>,
    sup: Point3<Angstrom>,
}

impl Aabb {
    pub fn from_points<S: Seed>(mut points: impl Iterator<Item = impl Borrow<S>>) -> Self {
        let init = points
            .next()
            .map(|p| p.borrow().coords())
            .unwrap_or([0.0; 3]);
        let init = Point3::from(init);

        let (inf, sup) = points.fold((init, init), |(i, s), point| {
            let point = Point3::from(point.borrow().coords());
            (i.inf(&point), s.sup(&point))
        });

        Self { inf, sup }
    }

    pub fn inf(&self) -> [Angstrom; 3] {
        self.inf.into()
    }

    pub fn sup(&self) -> [Angstrom; 3] {
        self.sup.into()
    }

    pub fn extent(&self) -> [Angstrom; 3] {
        (self.sup - self.inf).into()
    }
}

/// Shape, spacing, and placement of a regular grid.
///
/// Cells are addressed by integer coordinates `(x, y, z)` in
/// `[0, xdim) × [0, ydim) × [0, zdim)` and mapped to a linear index by
/// `(z * ydim + y) * xdim + x`. The world position of cell `(x, y, z)` is
/// `origin + (x, y, z) * spacing`, ie. `origin` is the world position of cell `(0, 0, 0)`,
/// not the lower corner of that cell's volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridInfo {
    shape: [usize; 3],
    spacing: Angstrom,
    origin: Point3<Angstrom>,
}

impl GridInfo {
    /// Describe a `shape[0] × shape[1] × shape[2]` grid with isotropic cell `spacing`,
    /// placing cell `(0, 0, 0)` at `origin`.
    ///
    /// # Panics
    /// Panics if any dimension is zero or `spacing` is not strictly positive.
    pub fn new(shape: [usize; 3], spacing: Angstrom, origin: [Angstrom; 3]) -> Self {
        assert!(
            shape.iter().all(|&dim| dim >= 1),
            "grid shape ({:?}) must be at least 1 in every dimension",
            shape
        );
        assert!(
            spacing > 0.0,
            "grid spacing ({:?}) must be strictly positive",
            spacing
        );

        Self {
            shape,
            spacing,
            origin: Point3::from(origin),
        }
    }

    /// Derive a grid that covers `aabb` with cell `spacing`, placing the origin at the
    /// box's lower corner. Each dimension becomes `⌊extent / spacing⌋ + 1`.
    ///
    /// Points within half a spacing of the box's upper face may still round to a cell one
    /// past the grid; such seeds are dropped during seeding, which is accepted behavior
    /// for boundary rounding.
    pub fn covering(aabb: &Aabb, spacing: Angstrom) -> Self {
        assert!(
            spacing > 0.0,
            "grid spacing ({:?}) must be strictly positive",
            spacing
        );

        let extent = aabb.extent();
        let shape = extent.map(|len| (len / spacing) as usize + 1);

        Self::new(shape, spacing, aabb.inf())
    }

    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    pub fn spacing(&self) -> Angstrom {
        self.spacing
    }

    pub fn origin(&self) -> [Angstrom; 3] {
        self.origin.into()
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        // shape is asserted to be ≥ 1 per dimension
        false
    }

    /// Map cell coordinates to the linear index `(z * ydim + y) * xdim + x`.
    ///
    /// Coordinates are not bounds-checked; out-of-range coordinates alias other cells.
    #[inline]
    pub fn flat_index(&self, cell: [usize; 3]) -> usize {
        let [x, y, z] = cell;
        let [xdim, ydim, _] = self.shape;
        (z * ydim + y) * xdim + x
    }

    /// Map a _relative_ cell offset to a (signed) linear offset using the same strides as
    /// [`Self::flat_index`].
    #[inline]
    pub fn flatten_offset(&self, offset: [i64; 3]) -> isize {
        let [dx, dy, dz] = offset;
        let [xdim, ydim, _] = self.shape;
        ((dz * ydim as i64 + dy) * xdim as i64 + dx) as isize
    }

    /// Integer coordinates of the cell nearest to `point`, rounding half up
    /// (`⌊c + 0.5⌋` per component). May lie outside the grid; see [`Self::contains`].
    #[inline]
    pub fn nearest_cell(&self, point: &Point3<Angstrom>) -> [i64; 3] {
        let scaled = (point - self.origin) / self.spacing;
        [
            (scaled.x + 0.5).floor() as i64,
            (scaled.y + 0.5).floor() as i64,
            (scaled.z + 0.5).floor() as i64,
        ]
    }

    #[inline]
    pub fn contains(&self, cell: [i64; 3]) -> bool {
        cell.iter()
            .zip(self.shape.iter())
            .all(|(&c, &dim)| c >= 0 && c < dim as i64)
    }

    /// World position of cell `(x, y, z)`.
    #[inline]
    pub fn world_pos(&self, cell: [usize; 3]) -> Point3<Angstrom> {
        let [x, y, z] = cell;
        self.origin + Vector3::new(x as Angstrom, y as Angstrom, z as Angstrom) * self.spacing
    }

    /// World position of the last cell `(xdim - 1, ydim - 1, zdim - 1)`; the backward
    /// sweep walks cell positions starting from here.
    #[inline]
    pub fn far_corner(&self) -> Point3<Angstrom> {
        let [xdim, ydim, zdim] = self.shape;
        self.world_pos([xdim - 1, ydim - 1, zdim - 1])
    }
}

/// Generate 3-dimensional seed arrays for testing purposes in the following fashion:
/// in a grid of the given `shape` with cells of length `spacing`, only cells with even
/// coordinate sum contain a seed (chessboard pattern), placed at the cell's center.
pub fn generate_seeds(
    shape: [usize; 3],
    spacing: Angstrom,
    origin: [Angstrom; 3],
) -> Vec<[Angstrom; 3]> {
    let mut seeds = Vec::with_capacity((shape.iter().product::<usize>() + 1) / 2);

    for z in 0..shape[2] {
        for y in 0..shape[1] {
            for x in 0..shape[0] {
                if (x + y + z) % 2 == 0 {
                    seeds.push([
                        spacing.mul_add(x as Angstrom + 0.5, origin[0]),
                        spacing.mul_add(y as Angstrom + 0.5, origin[1]),
                        spacing.mul_add(z as Angstrom + 0.5, origin[2]),
                    ]);
                }
            }
        }
    }

    seeds
}

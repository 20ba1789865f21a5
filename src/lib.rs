//! `koppel`[^etymology] builds discrete __signed distance fields__ on regular 3D grids.
//!
//! Given a set of weighted points (__seeds__, eg. atom centers with van-der-Waals radii),
//! it computes for every cell of a regular grid the distance to the nearest seed's sphere
//! surface and the index of that seed (a discrete Voronoi assignment).\
//! Evaluating every cell against every seed would be of time complexity _`O(cells · seeds)`_.
//! Instead, a __dead reckoning__ distance transform seeds the grid once and then relaxes it
//! with one forward and one backward sweep over a 13-neighbor stencil, which is _`O(cells)`_.
//!
//! # Caveats
//!
//! `koppel` is motivated by molecular surface extraction but is not restricted to that.\
//! A few things are worth knowing up front:
//!
//! - the field is an _approximation_: distances propagate along stencil directions, so a
//!   cell may end up owned by a seed that is not its true Euclidean nearest. The distance
//!   stored for a cell is always the _exact_ distance to its recorded owner, hence an
//!   upper bound on the true minimum
//! - the sweep is sequential by design; the backward pass reads what the forward pass
//!   wrote, and within a pass every cell reads already-visited neighbors in scan order
//! - seeds whose nearest cell falls outside the grid are silently dropped; size the grid
//!   to cover the seed extent (see [`GridInfo::covering`])
//! - malformed dimensions, spacing, or radii lengths are programming errors and panic
//!
//! # Usage
//!
//! 1. describe the grid with a [`GridInfo`] (or derive one from an [`Aabb`])
//! 2. build a [`DistanceField`] from seed positions and radii
//! 3. read back `distances()` and `owners()`, or extract a surface with
//!    [`surface::solvent_accessible`]
//!
//! # Examples
//! ```
//! use koppel::{DistanceField, GridInfo};
//!
//! let seeds = vec![[1.5, 1.5, 1.5], [2.5, 1.0, 2.0]];
//! let info = GridInfo::new([4, 4, 4], 1.0, [0.0, 0.0, 0.0]);
//! let field = DistanceField::new(info, seeds.iter().copied(), &[0.5]);
//!
//! let (_distance, owner) = field.at([2, 2, 2]).unwrap();
//! assert!(owner >= 0);
//! ```
//!
//! [^etymology]: abbrv. from German _Koppelnavigation_ /ˈkɔpl̩navigaˌt͡si̯oːn/, for dead reckoning.
#[allow(dead_code)]
pub mod distfield;
pub mod surface;

// inlined re-exports
#[doc(inline)]
pub use crate::distfield::DistanceField;
#[doc(inline)]
pub use crate::distfield::grid::{Aabb, GridInfo};

/// Scalar type used for coordinates and distances (in `Å = 10⁻¹⁰m` for molecular data,
/// though nothing in the math cares about the unit).
pub type Angstrom = f64;

/// Seed data trait.
///
/// This trait is required for types used with [`DistanceField`] which needs to know how to
/// get coordinate data. Only [`Copy`] types can be used.
///
/// A blanket implementation for `Into<[Angstrom; 3]> + Copy` types is provided, so
/// fixed-size float arrays, [`nalgebra::Point3`]/[`nalgebra::SVector`], or types that can
/// be converted into the former can be used directly. Radii are deliberately not part of
/// this trait: whether radii are shared or per-seed is a construction-time choice of the
/// field, not a property of the seed type.
///
/// # Examples
/// ```
/// # use koppel::{Angstrom, Seed};
/// #[derive(Clone, Copy)]
/// struct Atom {
///     coords: [Angstrom; 3],
/// }
/// impl Seed for Atom {
///     #[inline]
///     fn coords(&self) -> [Angstrom; 3] {
///         self.coords
///     }
/// }
/// ```
pub trait Seed<T = [Angstrom; 3]>: Copy {
    /// Return a copy of this seed's coordinates
    fn coords(&self) -> T;
}

impl<S, T> Seed<T> for S
where
    S: Into<T> + Copy,
{
    #[inline]
    fn coords(&self) -> T {
        <S as Into<T>>::into(*self)
    }
}

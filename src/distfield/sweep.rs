//! Seeding and bidirectional relaxation of the distance/owner grids.
//!
//! Both phases are written against a caller-supplied exact distance function
//! `eval(owner, world_pos)`, so the sweep itself is agnostic of how seeds are weighted
//! (points, spheres, or other primitives with a radial distance).

use super::grid::GridInfo;
use super::stencil::{Stencil, STENCIL_SIZE};
use crate::Angstrom;
use nalgebra::{Point3, Vector3};

/// Owner value for cells no seed has influenced yet.
pub const UNOWNED: i32 = -1;

/// Write each seed into its nearest grid cell.
///
/// The stored distance is `eval` at the _cell's_ world position, not at the seed itself;
/// when two seeds round to the same cell the smaller distance wins. Seeds whose nearest
/// cell lies outside the grid are silently dropped: the grid only represents a bounded
/// region and callers size it to cover their seed extent.
pub(crate) fn seed_cells(
    info: &GridInfo,
    points: &[Point3<Angstrom>],
    distances: &mut [Angstrom],
    owners: &mut [i32],
    eval: impl Fn(i32, &Point3<Angstrom>) -> Angstrom,
) {
    for (p, point) in points.iter().enumerate() {
        let cell = info.nearest_cell(point);
        if !info.contains(cell) {
            continue;
        }

        let index = info.flat_index([cell[0] as usize, cell[1] as usize, cell[2] as usize]);
        let pos = info.world_pos([cell[0] as usize, cell[1] as usize, cell[2] as usize]);
        let new_d = eval(p as i32, &pos);

        if owners[index] == UNOWNED || new_d < distances[index] {
            owners[index] = p as i32;
            distances[index] = new_d;
        }
    }
}

/// Relax the grids with one forward and one backward pass.
///
/// The forward pass visits cells in ascending linear order and pulls from the 13
/// scan-order predecessors; the backward pass visits in descending order with the offsets
/// negated, reading forward-pass results plus whatever it has already written itself.
/// For every candidate neighbor, `neighbor_distance + offset_length` is used as a cheap
/// ordering bound; adoption recomputes the exact distance of the neighbor's owner at the
/// current cell's world position, so stored distances always match their stored owner.
/// Comparison is strict, equal candidates do not overwrite. A cell without an owner
/// adopts its first in-bounds, owned neighbor unconditionally.
pub(crate) fn sweep(
    info: &GridInfo,
    distances: &mut [Angstrom],
    owners: &mut [i32],
    eval: impl Fn(i32, &Point3<Angstrom>) -> Angstrom,
) {
    let stencil = Stencil::new(info);
    let [xdim, ydim, zdim] = info.shape();
    let size = info.len() as isize;

    for pass in 0..2 {
        let (start, mul): (isize, isize) = if pass == 0 { (0, 1) } else { (size - 1, -1) };
        // the backward pass walks world positions down from the far corner
        let corner = if pass == 0 {
            Point3::from(info.origin())
        } else {
            info.far_corner()
        };
        let step = info.spacing() * mul as Angstrom;

        let mut index = start;
        for z in 0..zdim {
            for y in 0..ydim {
                for x in 0..xdim {
                    let mut dist = distances[index as usize];
                    let mut owner = owners[index as usize];

                    // Offsets whose axis would cross the grid at the pass's start corner
                    // are skipped wholesale; the rest are bounds-checked below, since on
                    // a flat grid (some dim == 1) an offset along the flat axis can still
                    // escape the array, eg. (-1, -1, 0) flattening to -xdim - 1 when
                    // ydim == 1.
                    let min_k = stencil.skip(x == 0, y == 0, z == 0);
                    let pos = corner
                        + Vector3::new(x as Angstrom, y as Angstrom, z as Angstrom) * step;

                    for k in min_k..STENCIL_SIZE {
                        let neighbor = index + stencil.offsets[k] * mul;
                        // directions that do not exist on this grid
                        if !(0..size).contains(&neighbor) {
                            continue;
                        }

                        let candidate = owners[neighbor as usize];
                        if candidate == UNOWNED {
                            continue;
                        }

                        let bound = distances[neighbor as usize] + stencil.lengths[k];
                        if owner == UNOWNED || bound < dist {
                            owner = candidate;
                            dist = eval(owner, &pos);
                        }
                    }

                    distances[index as usize] = dist;
                    owners[index as usize] = owner;
                    index += mul;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::distance;

    fn eval_for(points: Vec<Point3<Angstrom>>) -> impl Fn(i32, &Point3<Angstrom>) -> Angstrom {
        move |p, pos| distance(&points[p as usize], pos)
    }

    #[test]
    fn test_seeding_keeps_closer_occupant() {
        let info = GridInfo::new([3, 1, 1], 1.0, [0.0; 3]);
        // both round to cell (1, 0, 0); the second is closer to that cell's position
        let points = vec![Point3::new(1.4, 0.0, 0.0), Point3::new(0.9, 0.0, 0.0)];

        let mut distances = vec![Angstrom::INFINITY; info.len()];
        let mut owners = vec![UNOWNED; info.len()];
        seed_cells(&info, &points, &mut distances, &mut owners, eval_for(points.clone()));

        assert_eq!(owners, vec![UNOWNED, 1, UNOWNED]);
        assert!((distances[1] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_seeding_drops_out_of_range() {
        let info = GridInfo::new([2, 2, 2], 1.0, [0.0; 3]);
        let points = vec![Point3::new(7.0, 7.0, 7.0)];

        let mut distances = vec![Angstrom::INFINITY; info.len()];
        let mut owners = vec![UNOWNED; info.len()];
        seed_cells(&info, &points, &mut distances, &mut owners, eval_for(points.clone()));

        assert!(owners.iter().all(|&o| o == UNOWNED));
        assert!(distances.iter().all(|&d| d.is_infinite()));
    }

    #[test]
    fn test_sweep_fills_every_cell_from_one_seed() {
        let info = GridInfo::new([5, 5, 5], 1.0, [0.0; 3]);
        let points = vec![Point3::new(2.0, 2.0, 2.0)];

        let mut distances = vec![Angstrom::INFINITY; info.len()];
        let mut owners = vec![UNOWNED; info.len()];
        let eval = eval_for(points.clone());
        seed_cells(&info, &points, &mut distances, &mut owners, &eval);
        sweep(&info, &mut distances, &mut owners, &eval);

        assert!(
            owners.iter().all(|&o| o == 0),
            "one forward and one backward pass reach the full grid from an interior seed"
        );
        assert!(distances.iter().all(|&d| d.is_finite()));
    }

    #[test]
    fn test_sweep_stays_in_bounds_on_flat_grids() {
        // with ydim == 1 the dy = -1 offsets alias into the z stride and can point
        // outside the array; the sweep must skip those instead of reading them
        for shape in [[2, 1, 2], [4, 1, 3], [1, 1, 5], [3, 2, 1]] {
            let info = GridInfo::new(shape, 1.0, [0.0; 3]);
            let points = vec![Point3::new(0.2, 0.1, 0.0)];

            let mut distances = vec![Angstrom::INFINITY; info.len()];
            let mut owners = vec![UNOWNED; info.len()];
            let eval = eval_for(points.clone());
            seed_cells(&info, &points, &mut distances, &mut owners, &eval);
            sweep(&info, &mut distances, &mut owners, &eval);

            assert!(
                owners.iter().all(|&o| o == 0),
                "flat grid {:?} was not fully covered",
                shape
            );
            for (i, &d) in distances.iter().enumerate() {
                let cell = [i % shape[0], (i / shape[0]) % shape[1], i / (shape[0] * shape[1])];
                let exact = distance(&points[0], &info.world_pos(cell));
                assert!(
                    (d - exact).abs() < 1e-12,
                    "flat grid {:?}, cell {:?}: got {}, exact {}",
                    shape,
                    cell,
                    d,
                    exact
                );
            }
        }
    }

    #[test]
    fn test_sweep_without_seeds_is_a_no_op() {
        let info = GridInfo::new([3, 3, 3], 1.0, [0.0; 3]);
        let points: Vec<Point3<Angstrom>> = Vec::new();

        let mut distances = vec![Angstrom::INFINITY; info.len()];
        let mut owners = vec![UNOWNED; info.len()];
        sweep(&info, &mut distances, &mut owners, eval_for(points));

        assert!(owners.iter().all(|&o| o == UNOWNED));
        assert!(distances.iter().all(|&d| d.is_infinite()));
    }
}

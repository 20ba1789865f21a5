//! Extracting solvent-accessible surface points from a [`DistanceField`].
//!
//! The field's zero level set is where a probe point touches the seed spheres. Scanning
//! the three forward axis-aligned edges of every cell and interpolating where the signed
//! distance changes sign yields one surface sample per crossing edge, which is all a point
//! cloud renderer needs. Meshing (eg. marching cubes) is deliberately out of scope.

use crate::distfield::DistanceField;
use crate::Angstrom;

/// Collect one sample point per sign-crossing grid edge.
///
/// For an edge between cells with distances `d0` and `d1`, the sample sits at
/// `t = spacing + d0 / (d0 − d1)` along the edge axis from the first cell's world
/// position. No owner check is needed: after the sweep either every cell is owned or
/// none is (unowned cells only remain when no seed landed in the grid at all), and a
/// uniformly infinite field produces no sign change.
pub fn solvent_accessible(field: &DistanceField) -> Vec<[Angstrom; 3]> {
    let info = field.info();
    let [xdim, ydim, zdim] = info.shape();
    let spacing = info.spacing();
    let distances = field.distances();

    // strides of the linear index
    let dx = 1;
    let dy = xdim;
    let dz = xdim * ydim;

    let mut points = Vec::new();
    for z in 0..zdim {
        for y in 0..ydim {
            for x in 0..xdim {
                let i = info.flat_index([x, y, z]);
                let d000 = distances[i];
                let pos = info.world_pos([x, y, z]);

                if x + 1 < xdim && d000 * distances[i + dx] < 0.0 {
                    let t = spacing + d000 / (d000 - distances[i + dx]);
                    points.push([pos.x + t, pos.y, pos.z]);
                }
                if y + 1 < ydim && d000 * distances[i + dy] < 0.0 {
                    let t = spacing + d000 / (d000 - distances[i + dy]);
                    points.push([pos.x, pos.y + t, pos.z]);
                }
                if z + 1 < zdim && d000 * distances[i + dz] < 0.0 {
                    let t = spacing + d000 / (d000 - distances[i + dz]);
                    points.push([pos.x, pos.y, pos.z + t]);
                }
            }
        }
    }

    points
}

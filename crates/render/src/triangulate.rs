//! Splitting polygons into triangles.

use common::{Point, RasterError, RasterResult};
use ordered_float::OrderedFloat;
use smallvec::{smallvec, SmallVec};
use std::f64::consts::PI;

/// Three vertices in logical coordinates.
pub type Triangle = [Point; 3];

/// The triangles of a polygon. Never more than two.
pub type Triangles = SmallVec<[Triangle; 2]>;

/// Split a polygon of at most four vertices into triangles.
///
/// Up to three points form a single triangle (fewer than three are padded by
/// repeating the last point, so the triangle is degenerate). A quadrilateral
/// is reoriented so that its first vertex carries the largest interior angle
/// and then split along the diagonal from that vertex, which keeps concave
/// quads inside their outline. Five or more points are rejected.
pub fn triangulate(points: &[Point]) -> RasterResult<Triangles> {
    match points {
        [] => Ok(SmallVec::new()),
        [a] => Ok(smallvec![[*a, *a, *a]]),
        [a, b] => Ok(smallvec![[*a, *b, *b]]),
        [a, b, c] => Ok(smallvec![[*a, *b, *c]]),
        [a, b, c, d] => Ok(split_quad([*a, *b, *c, *d])),
        _ => Err(RasterError::UnsupportedPolygon(points.len())),
    }
}

fn split_quad(mut quad: [Point; 4]) -> Triangles {
    let mut angles = quad_angles(&quad);
    if angles.iter().sum::<f64>() > 4.0 * PI {
        quad.reverse();
        angles = quad_angles(&quad);
    }

    let largest = angles
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .unwrap_or_default();
    let first = angles
        .iter()
        .position(|&angle| OrderedFloat(angle) == largest)
        .unwrap_or(0);
    quad.rotate_left(first);

    let [p0, p1, p2, p3] = quad;
    smallvec![[p0, p1, p2], [p0, p2, p3]]
}

/// Angle swept at each vertex from the edge to its predecessor to the edge
/// to its successor, in `[0, 2π)`.
fn quad_angles(quad: &[Point; 4]) -> [f64; 4] {
    let direction = |to: Point, from: Point| (to.y - from.y).atan2(to.x - from.x);
    std::array::from_fn(|k| {
        let vertex = quad[k];
        let previous = quad[(k + 3) % 4];
        let next = quad[(k + 1) % 4];
        let angle = direction(next, vertex) - direction(previous, vertex);
        if angle < 0.0 {
            angle + 2.0 * PI
        } else {
            angle
        }
    })
}

//! Indexed geometry containers and builders.

use crate::math::Vec3;

/// A vertex buffer plus a flat index buffer describing triangles.
///
/// Every three consecutive indices form one triangle, wound clockwise
/// when the triangle faces the viewer. Lists are built before the render
/// loop and borrowed read-only by every draw call.
#[derive(Clone, Debug)]
pub struct IndexedTriangleList<V> {
    pub vertices: Vec<V>,
    pub indices: Vec<usize>,
}

impl<V> IndexedTriangleList<V> {
    /// Panics if the index count is not a multiple of three or any index
    /// is out of range; malformed lists are programmer errors.
    pub fn new(vertices: Vec<V>, indices: Vec<usize>) -> Self {
        assert!(indices.len() % 3 == 0, "index count must be a multiple of 3");
        assert!(
            indices.iter().all(|&i| i < vertices.len()),
            "triangle index out of range"
        );
        Self { vertices, indices }
    }
}

/// A vertex buffer plus a flat index buffer describing line segments,
/// two indices per segment.
#[derive(Clone, Debug)]
pub struct IndexedLineList<V> {
    pub vertices: Vec<V>,
    pub indices: Vec<usize>,
}

impl<V> IndexedLineList<V> {
    pub fn new(vertices: Vec<V>, indices: Vec<usize>) -> Self {
        assert!(indices.len() % 2 == 0, "index count must be a multiple of 2");
        assert!(
            indices.iter().all(|&i| i < vertices.len()),
            "line index out of range"
        );
        Self { vertices, indices }
    }
}

/*  Corner layout shared by the cube builders:
 *
 *         4--------5
 *        /|       /|
 *       / |      / |
 *      0--------1  |
 *      |  7-----|--6
 *      | /      | /
 *      |/       |/
 *      3--------2
 */
const CUBE_CORNERS: [Vec3; 8] = [
    Vec3 { x: -1.0, y: 1.0, z: -1.0 },
    Vec3 { x: 1.0, y: 1.0, z: -1.0 },
    Vec3 { x: 1.0, y: -1.0, z: -1.0 },
    Vec3 { x: -1.0, y: -1.0, z: -1.0 },
    Vec3 { x: -1.0, y: 1.0, z: 1.0 },
    Vec3 { x: 1.0, y: 1.0, z: 1.0 },
    Vec3 { x: 1.0, y: -1.0, z: 1.0 },
    Vec3 { x: -1.0, y: -1.0, z: 1.0 },
];

/// An axis-aligned cube with the given side length, two clockwise-wound
/// triangles per face.
pub fn cube(center: Vec3, side: f32) -> IndexedTriangleList<Vec3> {
    let vertices = CUBE_CORNERS
        .iter()
        .map(|&corner| center + corner * (side / 2.0))
        .collect();
    let indices = vec![
        3, 0, 1, 3, 1, 2, // front
        6, 5, 4, 6, 4, 7, // back
        7, 4, 0, 7, 0, 3, // left
        2, 1, 5, 2, 5, 6, // right
        0, 4, 5, 0, 5, 1, // top
        7, 3, 2, 7, 2, 6, // bottom
    ];
    IndexedTriangleList::new(vertices, indices)
}

/// The twelve edges of the same cube, for wireframe overlays.
pub fn cube_wireframe(center: Vec3, side: f32) -> IndexedLineList<Vec3> {
    let vertices = CUBE_CORNERS
        .iter()
        .map(|&corner| center + corner * (side / 2.0))
        .collect();
    let indices = vec![
        0, 1, 1, 2, 2, 3, 3, 0, // front ring
        4, 5, 5, 6, 6, 7, 7, 4, // back ring
        0, 4, 1, 5, 2, 6, 3, 7, // connecting edges
    ];
    IndexedLineList::new(vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_shared_corners_and_twelve_triangles() {
        let c = cube(Vec3::new(0.0, 0.0, 4.0), 2.0);
        assert_eq!(c.vertices.len(), 8);
        assert_eq!(c.indices.len(), 36);
        // The center stays put: corners average back to it.
        let sum = c.vertices.iter().fold(Vec3::zero(), |acc, &v| acc + v);
        assert!((sum / 8.0 - Vec3::new(0.0, 0.0, 4.0)).magnitude() < 1e-6);
        // Side length is respected along each axis.
        assert_eq!(c.vertices[0], Vec3::new(-1.0, 1.0, 3.0));
        assert_eq!(c.vertices[6], Vec3::new(1.0, -1.0, 5.0));
    }

    #[test]
    fn wireframe_covers_every_edge_once() {
        let w = cube_wireframe(Vec3::zero(), 2.0);
        assert_eq!(w.indices.len(), 24);
        let mut edges: Vec<(usize, usize)> = w
            .indices
            .chunks_exact(2)
            .map(|e| (e[0].min(e[1]), e[0].max(e[1])))
            .collect();
        edges.sort();
        edges.dedup();
        assert_eq!(edges.len(), 12);
    }

    #[test]
    #[should_panic]
    fn out_of_range_indices_are_rejected() {
        let _ = IndexedTriangleList::new(vec![Vec3::zero()], vec![0, 0, 1]);
    }
}

//! Programmable stages consumed by the pipeline.
//!
//! Shaders are fixed at pipeline construction, so the pipeline is generic
//! over both stages and the per-vertex path monomorphizes.

use crate::math::{Mat3, Vec2, Vec3};
use crate::vertex::TexVertex;

/// Transforms one object-space vertex into view space.
pub trait VertexShader {
    fn process(&self, vertex: Vec3) -> Vec3;
}

/// Produces a full textured vertex per corner of an assembled triangle.
///
/// `index` is the triangle's ordinal in the index buffer, counting culled
/// triangles, which lets a shader assign per-face attributes to an
/// indexed mesh whose vertices are shared between faces.
pub trait GeometryShader {
    fn process(&self, triangle: [Vec3; 3], index: usize) -> [TexVertex; 3];
}

/// Passes vertices through untouched.
#[derive(Copy, Clone, Debug, Default)]
pub struct Identity;

impl VertexShader for Identity {
    #[inline(always)]
    fn process(&self, vertex: Vec3) -> Vec3 {
        vertex
    }
}

/// Rotates vertices around a pivot point.
///
/// The host updates the rotation between frames; the pivot stays fixed so
/// a mesh spins in place rather than orbiting the origin.
#[derive(Copy, Clone, Debug)]
pub struct Rotator {
    rotation: Mat3,
    center: Vec3,
}

impl Rotator {
    pub fn new(rotation: Mat3, center: Vec3) -> Self {
        Self { rotation, center }
    }

    pub fn set_rotation(&mut self, rotation: Mat3) {
        self.rotation = rotation;
    }
}

impl VertexShader for Rotator {
    #[inline(always)]
    fn process(&self, vertex: Vec3) -> Vec3 {
        self.rotation * (vertex - self.center) + self.center
    }
}

const UPPER_TRIANGLE_UVS: [Vec2; 3] = [
    Vec2 { x: 0.0, y: 1.0 },
    Vec2 { x: 0.0, y: 0.0 },
    Vec2 { x: 1.0, y: 0.0 },
];

const LOWER_TRIANGLE_UVS: [Vec2; 3] = [
    Vec2 { x: 0.0, y: 1.0 },
    Vec2 { x: 1.0, y: 0.0 },
    Vec2 { x: 1.0, y: 1.0 },
];

/// Assigns texture coordinates to the faces of an indexed cube.
///
/// A cube face is two triangles; consecutive even/odd triangle indices
/// get complementary halves of the texture so each face shows the whole
/// image. Deferring uv assignment to assembly time is what lets the cube
/// keep its 8 shared vertices even though every corner participates in
/// three faces with three different uv values.
#[derive(Copy, Clone, Debug, Default)]
pub struct CubeShader;

impl GeometryShader for CubeShader {
    #[inline(always)]
    fn process(&self, triangle: [Vec3; 3], index: usize) -> [TexVertex; 3] {
        let uvs = if index % 2 == 0 {
            UPPER_TRIANGLE_UVS
        } else {
            LOWER_TRIANGLE_UVS
        };
        [
            TexVertex::new(triangle[0], uvs[0]),
            TexVertex::new(triangle[1], uvs[1]),
            TexVertex::new(triangle[2], uvs[2]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::rotation_z;

    #[test]
    fn rotator_spins_about_its_pivot() {
        let center = Vec3::new(1.0, 1.0, 4.0);
        let shader = Rotator::new(rotation_z(std::f32::consts::PI), center);
        // The pivot itself never moves.
        assert!((shader.process(center) - center).magnitude() < 1e-6);
        // A point offset +x from the pivot lands offset -x.
        let out = shader.process(center + Vec3::unit_x());
        assert!((out - (center - Vec3::unit_x())).magnitude() < 1e-6);
    }

    #[test]
    fn cube_shader_alternates_uv_triples_by_parity() {
        let tri = [Vec3::zero(), Vec3::unit_x(), Vec3::unit_y()];
        let even = CubeShader.process(tri, 4);
        let odd = CubeShader.process(tri, 7);
        assert_eq!(even.map(|v| v.uv), UPPER_TRIANGLE_UVS);
        assert_eq!(odd.map(|v| v.uv), LOWER_TRIANGLE_UVS);
        // Positions pass through unchanged.
        assert_eq!(even.map(|v| v.pos), tri);
    }
}

//! Vector and matrix primitives used throughout the pipeline.
//!
//! These are thin f32 aliases over [`vek`]'s small-struct types, which keep
//! all of the arithmetic allocation-free and inlinable. The rotation
//! constructors are written out explicitly so the handedness convention
//! lives here rather than in a dependency.

pub use vek::Lerp;

pub type Vec2 = vek::Vec2<f32>;
pub type Vec3 = vek::Vec3<f32>;
pub type Mat3 = vek::Mat3<f32>;

/// Standard right-handed rotation about the X axis.
pub fn rotation_x(theta: f32) -> Mat3 {
    let (s, c) = theta.sin_cos();
    Mat3::from_row_arrays([
        [1.0, 0.0, 0.0],
        [0.0, c, -s],
        [0.0, s, c],
    ])
}

/// Standard right-handed rotation about the Y axis.
pub fn rotation_y(theta: f32) -> Mat3 {
    let (s, c) = theta.sin_cos();
    Mat3::from_row_arrays([
        [c, 0.0, s],
        [0.0, 1.0, 0.0],
        [-s, 0.0, c],
    ])
}

/// Standard right-handed rotation about the Z axis.
pub fn rotation_z(theta: f32) -> Mat3 {
    let (s, c) = theta.sin_cos();
    Mat3::from_row_arrays([
        [c, -s, 0.0],
        [s, c, 0.0],
        [0.0, 0.0, 1.0],
    ])
}

/// Projects `v` onto the plane `z = d`, preserving the original depth.
///
/// The pipeline performs its perspective divide inline; this is for
/// callers (the wireframe path among them) that want the classic divide.
pub fn project(v: Vec3, d: f32) -> Vec3 {
    Vec3::new(v.x * d / v.z, v.y * d / v.z, v.z)
}

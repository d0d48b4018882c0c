//! The compound vertex stepped by the rasterizer.

use derive_more::{Add, Mul, Sub};

use crate::math::{Vec2, Vec3};

/// A vertex position paired with its texture coordinates.
///
/// All arithmetic applies componentwise to both fields, so a single
/// stepping variable carries position, depth and texture coordinates
/// through the rasterizer's inner loops. After the perspective divide,
/// `pos.z` holds reciprocal view-space depth and `uv` is pre-divided by
/// depth, which is what makes linear screen-space stepping of this type
/// perspective-correct.
#[derive(Copy, Clone, Debug, PartialEq, Add, Sub, Mul)]
pub struct TexVertex {
    pub pos: Vec3,
    pub uv: Vec2,
}

impl TexVertex {
    pub fn new(pos: Vec3, uv: Vec2) -> Self {
        Self { pos, uv }
    }

    /// Interpolates towards `other` by `alpha`, both fields together.
    pub fn lerp(self, other: Self, alpha: f32) -> Self {
        self + (other - self) * alpha
    }
}

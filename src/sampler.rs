//! Texture samplers.
//!
//! A sampler turns an interpolated vertex into a color. The per-pixel
//! [`Sampler::shade`] call is the hottest call in the crate, so the
//! rasterizer and pipeline are generic over the sampler type and
//! monomorphize one inner loop per sampler.

use vek::Rgba;

use crate::texture::Texture;
use crate::vertex::TexVertex;

/// Maps an interpolated vertex to an RGBA color.
///
/// Samplers are pure: shading the same vertex twice yields the same color
/// and mutates nothing.
pub trait Sampler {
    fn shade(&self, v: TexVertex) -> Rgba<u8>;
}

impl<S: Sampler + ?Sized> Sampler for &S {
    #[inline(always)]
    fn shade(&self, v: TexVertex) -> Rgba<u8> {
        (**self).shade(v)
    }
}

/// Nearest-texel sampling with out-of-range coordinates clamped to the
/// texture's edge.
pub struct Clamped<T> {
    texture: T,
    scale: f32,
}

impl<T: Texture> Clamped<T> {
    /// `scale` tiles or zooms the texture: below 1 enlarges, above 1
    /// repeats the clamped edge sooner. Must be positive.
    pub fn new(texture: T, scale: f32) -> Self {
        assert!(scale > 0.0, "sampler scale must be positive");
        Self { texture, scale }
    }
}

impl<T: Texture> Sampler for Clamped<T> {
    #[inline(always)]
    fn shade(&self, v: TexVertex) -> Rgba<u8> {
        let (w, h) = self.texture.dimensions();
        let sx = (v.uv.x * w as f32 / self.scale).floor().max(0.0).min((w - 1) as f32);
        let sy = (v.uv.y * h as f32 / self.scale).floor().max(0.0).min((h - 1) as f32);
        self.texture.at(sx as usize, sy as usize)
    }
}

/// Nearest-texel sampling with out-of-range coordinates wrapped around
/// the texture, tiling it across the surface.
pub struct Wrapped<T> {
    texture: T,
    scale: f32,
}

impl<T: Texture> Wrapped<T> {
    pub fn new(texture: T, scale: f32) -> Self {
        assert!(scale > 0.0, "sampler scale must be positive");
        Self { texture, scale }
    }
}

impl<T: Texture> Sampler for Wrapped<T> {
    #[inline(always)]
    fn shade(&self, v: TexVertex) -> Rgba<u8> {
        let (w, h) = self.texture.dimensions();
        // rem_euclid keeps the residue in [0, len), negative uv included.
        let sx = ((v.uv.x * w as f32 / self.scale).floor() as i64).rem_euclid(w as i64);
        let sy = ((v.uv.y * h as f32 / self.scale).floor() as i64).rem_euclid(h as i64);
        self.texture.at(sx as usize, sy as usize)
    }
}

/// A constant-color sampler, for flat-shaded geometry.
#[derive(Copy, Clone, Debug)]
pub struct Solid(pub Rgba<u8>);

impl Sampler for Solid {
    #[inline(always)]
    fn shade(&self, _: TexVertex) -> Rgba<u8> {
        self.0
    }
}

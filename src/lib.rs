//! A software 3D rasterizer core.
//!
//! `scanline` turns indexed, textured triangle lists into shaded RGBA
//! pixels on the CPU: a programmable vertex stage, backface culling, a
//! geometry stage for per-face attributes, a perspective divide, and a
//! scan-line triangle filler with the top-left fill rule,
//! perspective-correct attribute interpolation and Z-buffered writes.
//!
//! The crate owns no window, no event loop and no image decoding. A host
//! hands it pre-decoded textures, drives [`Pipeline::draw`] once per
//! frame and blits [`Framebuffer::buffer`] wherever it likes; see
//! `demos/spinning_cube.rs` for a minimal `minifb` host.
//!
//! ```
//! use scanline::{cube, CubeShader, Framebuffer, Pipeline, Rotator, Solid};
//! use scanline::math::{rotation_y, Vec3};
//!
//! let center = Vec3::new(0.0, 0.0, 4.0);
//! let mut pipeline = Pipeline::new(
//!     Framebuffer::new(160, 120),
//!     Rotator::new(rotation_y(0.4), center),
//!     CubeShader,
//! );
//! pipeline.framebuffer_mut().clear();
//! pipeline.draw(&cube(center, 2.0), &Solid(vek::Rgba::new(255, 0, 0, 255)));
//! let rgba_bytes = pipeline.framebuffer().buffer();
//! # assert!(rgba_bytes.iter().any(|&b| b == 255));
//! ```

pub mod framebuffer;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod rasterizer;
pub mod sampler;
pub mod shader;
pub mod texture;
pub mod vertex;

pub use framebuffer::Framebuffer;
pub use mesh::{cube, cube_wireframe, IndexedLineList, IndexedTriangleList};
pub use pipeline::Pipeline;
pub use sampler::{Clamped, Sampler, Solid, Wrapped};
pub use shader::{CubeShader, GeometryShader, Identity, Rotator, VertexShader};
pub use texture::{Texture, Texture2d};
pub use vertex::TexVertex;

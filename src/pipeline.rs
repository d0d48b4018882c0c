//! The pipeline driver: from indexed object-space triangles to pixels.

use vek::Rgba;

use crate::framebuffer::Framebuffer;
use crate::math::{project, Vec2, Vec3};
use crate::mesh::{IndexedLineList, IndexedTriangleList};
use crate::rasterizer::{draw_line, fill_triangle};
use crate::sampler::Sampler;
use crate::shader::{GeometryShader, VertexShader};
use crate::vertex::TexVertex;

/// Owns the framebuffer and the two shader stages, and runs the full
/// transform chain per draw call:
///
/// vertex shader → triangle assembly with backface culling → geometry
/// shader → perspective divide → viewport map → scan-line rasterization.
///
/// Both shader types are generic parameters so the per-vertex and
/// per-triangle calls compile down to direct, inlinable code.
pub struct Pipeline<V, G> {
    framebuffer: Framebuffer,
    vertex_shader: V,
    geometry_shader: G,
}

impl<V: VertexShader, G: GeometryShader> Pipeline<V, G> {
    pub fn new(framebuffer: Framebuffer, vertex_shader: V, geometry_shader: G) -> Self {
        Self {
            framebuffer,
            vertex_shader,
            geometry_shader,
        }
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    /// The host mutates shader state between frames through this, e.g. to
    /// advance a [`crate::shader::Rotator`]'s angle.
    pub fn vertex_shader_mut(&mut self) -> &mut V {
        &mut self.vertex_shader
    }

    /// Renders an indexed triangle list with the given sampler.
    ///
    /// There is no near-plane clip: every vertex must still satisfy
    /// `z > 0` after vertex shading, or the perspective divide will fling
    /// its triangle across the screen.
    pub fn draw<S: Sampler>(&mut self, triangles: &IndexedTriangleList<Vec3>, sampler: &S) {
        let shaded: Vec<Vec3> = triangles
            .vertices
            .iter()
            .map(|&v| self.vertex_shader.process(v))
            .collect();

        for (index, tri) in triangles.indices.chunks_exact(3).enumerate() {
            let (v0, v1, v2) = (shaded[tri[0]], shaded[tri[1]], shaded[tri[2]]);

            // With clockwise winding, a normal pointing along the view
            // vector means we are looking at the triangle's back.
            let normal = (v1 - v0).cross(v2 - v0);
            if normal.dot(v0) > 0.0 {
                continue;
            }

            let corners = self.geometry_shader.process([v0, v1, v2], index);
            let [a, b, c] = corners.map(|t| self.to_screen(t));
            fill_triangle(&mut self.framebuffer, a, b, c, sampler);
        }
    }

    /// Renders an indexed line list as a wireframe overlay.
    ///
    /// Lines are vertex-shaded and projected like triangles but are
    /// neither culled nor depth-tested.
    pub fn draw_wireframe(&mut self, lines: &IndexedLineList<Vec3>, color: Rgba<u8>) {
        let (w, h) = self.framebuffer.dimensions();
        let (half_w, half_h) = (w as f32 / 2.0, h as f32 / 2.0);

        let shaded: Vec<Vec2> = lines
            .vertices
            .iter()
            .map(|&v| {
                let p = project(self.vertex_shader.process(v), 1.0);
                Vec2::new((1.0 + p.x) * half_w, (1.0 - p.y) * half_h)
            })
            .collect();

        for segment in lines.indices.chunks_exact(2) {
            draw_line(&mut self.framebuffer, shaded[segment[0]], shaded[segment[1]], color);
        }
    }

    /// Perspective divide plus viewport map.
    ///
    /// The whole vertex is scaled by `1/z`, pre-dividing the texture
    /// coordinates, and `pos.z` is overwritten with `1/z` itself so that
    /// screen-space linear interpolation of every field stays valid. The
    /// viewport map takes NDC with +y up to pixels with +y down.
    fn to_screen(&self, t: TexVertex) -> TexVertex {
        let (w, h) = self.framebuffer.dimensions();
        let z_inv = 1.0 / t.pos.z;
        let mut t = t * z_inv;
        t.pos.z = z_inv;
        t.pos.x = (1.0 + t.pos.x) * (w as f32 / 2.0);
        t.pos.y = (1.0 - t.pos.y) * (h as f32 / 2.0);
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::Solid;
    use crate::shader::{CubeShader, Identity};
    use std::cell::RefCell;

    const RED: Rgba<u8> = Rgba { r: 255, g: 0, b: 0, a: 255 };
    const BLUE: Rgba<u8> = Rgba { r: 0, g: 0, b: 255, a: 255 };

    /// A full-viewport quad at view depth `z`, wound to face the viewer.
    fn quad_at(z: f32) -> IndexedTriangleList<Vec3> {
        IndexedTriangleList::new(
            vec![
                Vec3::new(-z, z, z),  // top-left
                Vec3::new(z, z, z),   // top-right
                Vec3::new(-z, -z, z), // bottom-left
                Vec3::new(z, -z, z),  // bottom-right
            ],
            vec![0, 1, 2, 1, 3, 2],
        )
    }

    fn every_pixel_is(fb: &Framebuffer, color: Rgba<u8>) -> bool {
        fb.buffer()
            .chunks_exact(4)
            .all(|px| px == [color.r, color.g, color.b, color.a])
    }

    #[test]
    fn nearer_surface_occludes_regardless_of_order() {
        let mut pipeline = Pipeline::new(Framebuffer::new(32, 24), Identity, CubeShader);
        pipeline.framebuffer_mut().clear();
        pipeline.draw(&quad_at(5.0), &Solid(BLUE));
        pipeline.draw(&quad_at(2.0), &Solid(RED));
        assert!(every_pixel_is(pipeline.framebuffer(), RED));
    }

    #[test]
    fn back_facing_triangles_are_culled() {
        let mut pipeline = Pipeline::new(Framebuffer::new(16, 16), Identity, CubeShader);
        pipeline.framebuffer_mut().clear();
        // The front-facing quad's triangles with their winding reversed.
        let reversed = IndexedTriangleList::new(
            vec![
                Vec3::new(-2.0, 2.0, 2.0),
                Vec3::new(2.0, 2.0, 2.0),
                Vec3::new(-2.0, -2.0, 2.0),
                Vec3::new(2.0, -2.0, 2.0),
            ],
            vec![2, 1, 0, 2, 3, 1],
        );
        pipeline.draw(&reversed, &Solid(RED));
        assert!(every_pixel_is(
            pipeline.framebuffer(),
            Rgba::new(0, 0, 0, 255)
        ));
    }

    struct RecordingShader {
        seen: RefCell<Vec<usize>>,
    }

    impl GeometryShader for RecordingShader {
        fn process(&self, triangle: [Vec3; 3], index: usize) -> [TexVertex; 3] {
            self.seen.borrow_mut().push(index);
            CubeShader.process(triangle, index)
        }
    }

    #[test]
    fn geometry_shader_sees_original_triangle_ordinals() {
        // Triangle 0 faces away, triangle 1 faces the viewer; the shader
        // must still see ordinal 1, not a renumbered 0.
        let list = IndexedTriangleList::new(
            vec![
                Vec3::new(-2.0, 2.0, 2.0),
                Vec3::new(2.0, 2.0, 2.0),
                Vec3::new(-2.0, -2.0, 2.0),
            ],
            vec![2, 1, 0, 0, 1, 2],
        );
        let mut pipeline = Pipeline::new(
            Framebuffer::new(8, 8),
            Identity,
            RecordingShader { seen: RefCell::new(Vec::new()) },
        );
        pipeline.framebuffer_mut().clear();
        pipeline.draw(&list, &Solid(RED));
        assert_eq!(*pipeline.geometry_shader.seen.borrow(), vec![1]);
    }

    #[test]
    fn wireframe_paints_projected_corners_without_depth() {
        let mut pipeline = Pipeline::new(Framebuffer::new(20, 20), Identity, CubeShader);
        pipeline.framebuffer_mut().clear();
        let square = IndexedLineList::new(
            vec![
                Vec3::new(-0.5, 0.5, 1.0),
                Vec3::new(0.5, 0.5, 1.0),
                Vec3::new(0.5, -0.5, 1.0),
                Vec3::new(-0.5, -0.5, 1.0),
            ],
            vec![0, 1, 1, 2, 2, 3, 3, 0],
        );
        pipeline.draw_wireframe(&square, RED);

        let pixel = |x: usize, y: usize| {
            let i = (y * 20 + x) * 4;
            let b = pipeline.framebuffer().buffer();
            Rgba::new(b[i], b[i + 1], b[i + 2], b[i + 3])
        };
        // NDC (-0.5, 0.5) maps to pixel (5, 5); (0.5, -0.5) to (15, 15).
        assert_eq!(pixel(5, 5), RED);
        assert_eq!(pixel(15, 15), RED);
        assert_eq!(pixel(15, 5), RED);
        // Interior stays untouched.
        assert_eq!(pixel(10, 10), Rgba::new(0, 0, 0, 255));
    }
}

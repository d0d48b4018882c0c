//! Scan-line triangle filling and DDA line drawing.
//!
//! Triangles arrive in screen space with `pos.z` holding reciprocal
//! view-space depth and `uv` pre-divided by depth (see
//! [`crate::pipeline`]). The filler steps a whole [`TexVertex`] down each
//! edge and across each row, so position, depth and texture coordinates
//! move in lockstep with no per-pixel allocation.

use std::mem;

use vek::Rgba;

use crate::framebuffer::Framebuffer;
use crate::math::Vec2;
use crate::sampler::Sampler;
use crate::vertex::TexVertex;

/// Round to the nearest integer with ties going down.
///
/// Scan bounds computed this way implement the top-left fill rule: an
/// edge lying exactly on a pixel boundary belongs to the triangle above
/// or to the left of it, so adjacent triangles sharing the edge never
/// both claim its pixels.
#[inline(always)]
fn round_half_down(x: f32) -> f32 {
    (x - 0.5).ceil()
}

/// Fills the triangle `a b c` with colors from `sampler`, depth-testing
/// every pixel against `fb`.
///
/// The triangle is sorted by Y and split through its middle vertex into a
/// flat-bottom and a flat-top half, each filled by the common scan-line
/// core. Degenerate triangles produce no pixels.
pub fn fill_triangle<S: Sampler>(
    fb: &mut Framebuffer,
    mut a: TexVertex,
    mut b: TexVertex,
    mut c: TexVertex,
    sampler: &S,
) {
    if b.pos.y < a.pos.y {
        mem::swap(&mut a, &mut b);
    }
    if c.pos.y < a.pos.y {
        mem::swap(&mut a, &mut c);
    }
    if c.pos.y < b.pos.y {
        mem::swap(&mut b, &mut c);
    }

    if a.pos.y == c.pos.y {
        // Zero height, nothing to scan.
        return;
    }

    if a.pos.y == b.pos.y {
        // Flat top: both edges run down to c.
        let (l, r) = if b.pos.x < a.pos.x { (b, a) } else { (a, b) };
        fill_flat(fb, l, c, r, c, sampler);
    } else if b.pos.y == c.pos.y {
        // Flat bottom: both edges start at the apex a.
        let (l, r) = if c.pos.x < b.pos.x { (c, b) } else { (b, c) };
        fill_flat(fb, a, l, a, r, sampler);
    } else {
        // General case: cut horizontally through b. The cut must be
        // exactly horizontal or the two halves disagree about their
        // shared row, so pin the interpolated y to b's.
        let alpha = (b.pos.y - a.pos.y) / (c.pos.y - a.pos.y);
        let mut split = a.lerp(c, alpha);
        split.pos.y = b.pos.y;
        let (l, r) = if split.pos.x < b.pos.x { (split, b) } else { (b, split) };
        fill_flat(fb, a, l, a, r, sampler);
        fill_flat(fb, l, c, r, c, sampler);
    }
}

/// Scan-line core for a flat-topped or flat-bottomed triangle.
///
/// The left edge runs `l0` to `l1` and the right edge `r0` to `r1`, with
/// `l0.pos.y == r0.pos.y` and `l1.pos.y == r1.pos.y`. Each edge is
/// advanced from its own start vertex to the centerline of the first
/// pixel row, then stepped one row at a time.
fn fill_flat<S: Sampler>(
    fb: &mut Framebuffer,
    l0: TexVertex,
    l1: TexVertex,
    r0: TexVertex,
    r1: TexVertex,
    sampler: &S,
) {
    let dy = l1.pos.y - l0.pos.y;
    let step_left = (l1 - l0) * (1.0 / dy);
    let step_right = (r1 - r0) * (1.0 / dy);

    let y_start = round_half_down(l0.pos.y) as i32;
    let y_end = round_half_down(l1.pos.y) as i32;

    let mut scan_left = l0 + step_left * (y_start as f32 + 0.5 - l0.pos.y);
    let mut scan_right = r0 + step_right * (y_start as f32 + 0.5 - r0.pos.y);

    for y in y_start..y_end {
        let x_start = round_half_down(scan_left.pos.x) as i32;
        let x_end = round_half_down(scan_right.pos.x) as i32;

        if x_start < x_end {
            let step_x =
                (scan_right - scan_left) * (1.0 / (scan_right.pos.x - scan_left.pos.x));
            let mut p = scan_left + step_x * (x_start as f32 + 0.5 - scan_left.pos.x);

            for x in x_start..x_end {
                // pos.z holds 1/z; recover view depth for the test, and
                // multiply the vertex back up to undo the divide on uv.
                let z = 1.0 / p.pos.z;
                if fb.test_and_set(x, y, z) {
                    fb.put_pixel(x, y, sampler.shade(p * z));
                }
                p = p + step_x;
            }
        }

        scan_left = scan_left + step_left;
        scan_right = scan_right + step_right;
    }
}

/// Draws a line between two screen-space points without depth testing,
/// for wireframe overlays.
///
/// DDA stepping: walk whole pixels along the major axis and advance the
/// minor axis by the slope.
pub fn draw_line(fb: &mut Framebuffer, p0: Vec2, p1: Vec2, color: Rgba<u8>) {
    let delta = p1 - p0;

    if delta.x.abs() > delta.y.abs() {
        let (from, to) = if p0.x <= p1.x { (p0, p1) } else { (p1, p0) };
        let slope = (to.y - from.y) / (to.x - from.x);
        let mut x = from.x;
        let mut y = from.y;
        while x <= to.x {
            fb.put_pixel(x as i32, y as i32, color);
            x += 1.0;
            y += slope;
        }
    } else if delta.y != 0.0 {
        let (from, to) = if p0.y <= p1.y { (p0, p1) } else { (p1, p0) };
        let slope = (to.x - from.x) / (to.y - from.y);
        let mut x = from.x;
        let mut y = from.y;
        while y <= to.y {
            fb.put_pixel(x as i32, y as i32, color);
            y += 1.0;
            x += slope;
        }
    } else {
        fb.put_pixel(p0.x as i32, p0.y as i32, color);
    }
}

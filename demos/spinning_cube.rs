//! A minimal host: two spinning textured cubes in a minifb window.
//!
//! Keys: Q/W pitch, A/S yaw, 1/2 roll, Escape quits. Pass an image path
//! as the first argument to use it as the texture; without one, a
//! procedural checkerboard is used.

use minifb::{Key, Window, WindowOptions};
use vek::Rgba;

use scanline::math::{rotation_x, rotation_y, rotation_z, Vec3};
use scanline::{
    cube, cube_wireframe, CubeShader, Framebuffer, Pipeline, Rotator, Texture2d, Wrapped,
};

const WIDTH: usize = 400;
const HEIGHT: usize = 400;

fn load_texture() -> Texture2d {
    match std::env::args().nth(1) {
        Some(path) => {
            let image = image::open(&path).expect("failed to decode texture").to_rgba8();
            let (w, h) = image.dimensions();
            let texels = image
                .pixels()
                .map(|p| Rgba::new(p[0], p[1], p[2], p[3]))
                .collect();
            Texture2d::from_texels(w as usize, h as usize, texels)
        }
        None => Texture2d::from_fn(64, 64, |x, y| {
            if (x / 8 + y / 8) % 2 == 0 {
                Rgba::new(235, 235, 235, 255)
            } else {
                Rgba::new(30, 60, 120, 255)
            }
        }),
    }
}

fn main() {
    let mut window = Window::new(
        "scanline - spinning cubes",
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )
    .expect("failed to open window");
    window.set_target_fps(60);

    let pivot = Vec3::new(-0.5, 1.0, 4.0);
    let near = cube(pivot, 2.0);
    let near_wire = cube_wireframe(pivot, 2.0);
    let far = cube(Vec3::new(0.5, 0.0, 5.0), 3.5);
    let sampler = Wrapped::new(load_texture(), 0.25);

    let mut pipeline = Pipeline::new(
        Framebuffer::new(WIDTH, HEIGHT),
        Rotator::new(rotation_z(0.0), pivot),
        CubeShader,
    );

    let (mut theta_x, mut theta_y, mut theta_z) = (0.0f32, 0.0f32, 0.0f32);
    let mut frame = vec![0u32; WIDTH * HEIGHT];

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_down(Key::Q) {
            theta_x += 0.05;
        }
        if window.is_key_down(Key::W) {
            theta_x -= 0.05;
        }
        if window.is_key_down(Key::A) {
            theta_y += 0.05;
        }
        if window.is_key_down(Key::S) {
            theta_y -= 0.05;
        }
        if window.is_key_down(Key::Key1) {
            theta_z += 0.05;
        }
        if window.is_key_down(Key::Key2) {
            theta_z -= 0.05;
        }

        pipeline
            .vertex_shader_mut()
            .set_rotation(rotation_x(theta_x) * rotation_y(theta_y) * rotation_z(theta_z));

        pipeline.framebuffer_mut().clear();
        pipeline.draw(&near, &sampler);
        pipeline.draw(&far, &sampler);
        pipeline.draw_wireframe(&near_wire, Rgba::new(255, 255, 255, 255));

        // minifb wants 0RGB u32s.
        for (dst, px) in frame
            .iter_mut()
            .zip(pipeline.framebuffer().buffer().chunks_exact(4))
        {
            *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
        window
            .update_with_buffer(&frame, WIDTH, HEIGHT)
            .expect("failed to present frame");
    }
}

// End-to-end pipeline tests: camera + cube mesh in, rasterized edge
// pixels out.

use nalgebra::Point3;
use wire3d_core::{Camera, Color, Device, LineStrategy, Mesh};

fn render_cube(strategy: LineStrategy) -> Device {
    let mut device = Device::with_strategy(640, 480, strategy);
    let camera = Camera::new(Point3::new(0.0, 0.0, 10.0), Point3::origin());
    let cube = Mesh::cube();

    device.clear(Color::black());
    device.render(&camera, &[cube]);
    device
}

fn drawn_pixels(device: &Device) -> Vec<(u32, u32)> {
    let cleared = Color::black().to_bytes();
    let mut pixels = Vec::new();
    for y in 0..device.height() {
        for x in 0..device.width() {
            if device.pixel(x, y).unwrap() != cleared {
                pixels.push((x, y));
            }
        }
    }
    pixels
}

#[test]
fn cube_render_produces_edge_pixels() {
    let device = render_cube(LineStrategy::Midpoint);
    let pixels = drawn_pixels(&device);

    assert!(!pixels.is_empty(), "wireframe cube drew no pixels");
    for &(x, y) in &pixels {
        assert!(x < 640 && y < 480);
    }

    // The cube straddles the view axis, so its wireframe must cover
    // pixels on both sides of the surface center.
    assert!(pixels.iter().any(|&(x, _)| x < 320));
    assert!(pixels.iter().any(|&(x, _)| x > 320));
    assert!(pixels.iter().any(|&(_, y)| y < 240));
    assert!(pixels.iter().any(|&(_, y)| y > 240));
}

#[test]
fn cube_render_is_deterministic() {
    let first = render_cube(LineStrategy::Midpoint);
    let second = render_cube(LineStrategy::Midpoint);
    assert_eq!(first.back_buffer(), second.back_buffer());
}

#[test]
fn cube_render_bresenham_produces_edge_pixels() {
    let device = render_cube(LineStrategy::Bresenham);
    assert!(!drawn_pixels(&device).is_empty());
}

#[test]
fn rotated_cube_differs_from_unrotated() {
    let still = render_cube(LineStrategy::Midpoint);

    let mut device = Device::new(640, 480);
    let camera = Camera::new(Point3::new(0.0, 0.0, 10.0), Point3::origin());
    let mut cube = Mesh::cube();
    cube.rotate(0.5, 0.8, 0.0);

    device.clear(Color::black());
    device.render(&camera, &[cube]);

    assert_ne!(still.back_buffer(), device.back_buffer());
}

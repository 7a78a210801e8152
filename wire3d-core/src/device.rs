/// Render device: pixel buffer ownership and the wireframe pipeline
use nalgebra::{Matrix4, Point3, Vector2};

use crate::color::Color;
use crate::geometry::Mesh;
use crate::projection::{Camera, Projection};
use crate::transform::Transform;

/// Line rasterization backend.
///
/// Both strategies draw a pixel approximation of the segment between
/// two screen-space endpoints, clipped through `draw_point`. Midpoint
/// subdivision is the default; it never draws the two endpoints
/// themselves, only interior points down to a 2-pixel threshold.
/// Bresenham steps integer coordinates and covers both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStrategy {
    Midpoint,
    Bresenham,
}

/// A software render device. Exclusively owns one RGBA back buffer of
/// `width * height * 4` bytes for its whole lifetime.
pub struct Device {
    width: u32,
    height: u32,
    back_buffer: Vec<u8>,
    strategy: LineStrategy,
    projection: Projection,
    stroke: Color,
}

impl Device {
    /// Create a device with the default midpoint line strategy.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_strategy(width, height, LineStrategy::Midpoint)
    }

    pub fn with_strategy(width: u32, height: u32, strategy: LineStrategy) -> Self {
        Self {
            width,
            height,
            back_buffer: vec![0; (width * height * 4) as usize],
            strategy,
            projection: Projection::default(),
            stroke: Color::white(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA back buffer, for the presenting collaborator.
    pub fn back_buffer(&self) -> &[u8] {
        &self.back_buffer
    }

    /// Set the foreground color used for all wireframe pixels.
    pub fn set_stroke(&mut self, color: Color) {
        self.stroke = color;
    }

    /// Read back one pixel, or `None` if (x, y) is off the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((x + y * self.width) * 4) as usize;
        Some([
            self.back_buffer[i],
            self.back_buffer[i + 1],
            self.back_buffer[i + 2],
            self.back_buffer[i + 3],
        ])
    }

    /// Overwrite every pixel of the back buffer with `color`.
    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for pixel in self.back_buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&bytes);
        }
    }

    /// Unchecked byte write. Only ever reached through `draw_point`,
    /// which enforces the surface bounds.
    fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        let i = ((x + y * self.width) * 4) as usize;
        self.back_buffer[i..i + 4].copy_from_slice(&color.to_bytes());
    }

    /// The single clipping boundary: writes the stroke color at the
    /// truncated coordinate iff the point lies on the surface. Anything
    /// off-surface (including NaN coordinates from a degenerate
    /// perspective divide) is silently dropped.
    pub fn draw_point(&mut self, point: Vector2<f32>) {
        if point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width as f32
            && point.y < self.height as f32
        {
            self.put_pixel(point.x as u32, point.y as u32, self.stroke);
        }
    }

    /// Project a 3D point to fractional screen coordinates.
    ///
    /// `transform` is a complete model-view-projection matrix. The
    /// homogeneous transform performs the perspective divide, yielding
    /// NDC in roughly [-1, 1]; those are then mapped to pixel space
    /// with the origin at the top-left and +y pointing down. No
    /// clipping happens here; off-surface results are valid outputs.
    pub fn project(&self, point: &Point3<f32>, transform: &Matrix4<f32>) -> Vector2<f32> {
        let ndc = transform.transform_point(point);

        let x = ndc.x * self.width as f32 + self.width as f32 / 2.0;
        let y = -ndc.y * self.height as f32 + self.height as f32 / 2.0;
        Vector2::new(x, y)
    }

    /// Draw the segment between two screen-space endpoints using the
    /// configured strategy.
    pub fn draw_line(&mut self, p0: Vector2<f32>, p1: Vector2<f32>) {
        match self.strategy {
            LineStrategy::Midpoint => self.draw_line_midpoint(p0, p1),
            LineStrategy::Bresenham => self.draw_line_bresenham(p0, p1),
        }
    }

    /// Recursive midpoint subdivision. Stops once the endpoints are
    /// closer than 2 pixels, so the original endpoints themselves are
    /// never drawn. Depth is bounded by log2 of the segment length.
    fn draw_line_midpoint(&mut self, p0: Vector2<f32>, p1: Vector2<f32>) {
        if (p1 - p0).norm() < 2.0 {
            return;
        }

        let middle = p0 + (p1 - p0) / 2.0;
        self.draw_point(middle);

        self.draw_line_midpoint(p0, middle);
        self.draw_line_midpoint(middle, p1);
    }

    /// Bresenham integer stepping over truncated endpoints, inclusive
    /// of both.
    fn draw_line_bresenham(&mut self, p0: Vector2<f32>, p1: Vector2<f32>) {
        let mut x0 = p0.x as i64;
        let mut y0 = p0.y as i64;
        let x1 = p1.x as i64;
        let y1 = p1.y as i64;

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.draw_point(Vector2::new(x0 as f32, y0 as f32));
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Render one frame of wireframes into the back buffer.
    ///
    /// Meshes are processed in input order, faces independently; an
    /// edge shared by two faces is rasterized twice. No depth sorting
    /// or occlusion.
    pub fn render(&mut self, camera: &Camera, meshes: &[Mesh]) {
        let view = camera.view_matrix();
        let projection = self
            .projection
            .matrix(self.width as f32 / self.height as f32);

        for mesh in meshes {
            let world = Transform::world_matrix(&mesh.rotation, &mesh.position);
            let transform = projection * view * world;

            for face in &mesh.faces {
                let pa = self.project(&mesh.vertices[face.a], &transform);
                let pb = self.project(&mesh.vertices[face.b], &transform);
                let pc = self.project(&mesh.vertices[face.c], &transform);

                self.draw_line(pa, pb);
                self.draw_line(pb, pc);
                self.draw_line(pc, pa);
            }
        }
    }
}

/// Camera and projection configuration
use nalgebra::{Matrix4, Point3, Vector3};

/// A look-at camera: an eye position and a target point. The up vector
/// is the fixed world +Y axis.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
}

impl Camera {
    pub fn new(position: Point3<f32>, target: Point3<f32>) -> Self {
        Self { position, target }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &Vector3::y())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point3::new(0.0, 0.0, 10.0), Point3::origin())
    }
}

/// Perspective projection parameters. The defaults are fixed reference
/// values; change them only when parity with the reference output does
/// not matter.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    /// Create the projection matrix for the given aspect ratio
    pub fn matrix(&self, aspect: f32) -> Matrix4<f32> {
        Matrix4::new_perspective(aspect, self.fov, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov: 0.78,
            near: 0.01,
            far: 1.0,
        }
    }
}

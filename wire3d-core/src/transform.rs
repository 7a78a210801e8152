/// World-transform construction
use nalgebra::{Matrix4, Vector3};

/// Transform builder for mesh world matrices
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from Euler angles, composed
    /// yaw-pitch-roll: roll (Z) is applied first, then pitch (X),
    /// then yaw (Y).
    pub fn rotation_matrix(rotation: &Vector3<f32>) -> Matrix4<f32> {
        let pitch = Matrix4::new_rotation(Vector3::new(rotation.x, 0.0, 0.0));
        let yaw = Matrix4::new_rotation(Vector3::new(0.0, rotation.y, 0.0));
        let roll = Matrix4::new_rotation(Vector3::new(0.0, 0.0, rotation.z));

        yaw * pitch * roll
    }

    /// Create a translation matrix
    pub fn translation_matrix(position: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_translation(position)
    }

    /// Create a mesh's world matrix. Rotation is applied before
    /// translation; swapping the order would rotate around a moved
    /// pivot and is a behavioral regression.
    pub fn world_matrix(rotation: &Vector3<f32>, position: &Vector3<f32>) -> Matrix4<f32> {
        Self::translation_matrix(position) * Self::rotation_matrix(rotation)
    }
}

/// Geometry primitives for wireframe rendering
use nalgebra::{Point3, Vector3};

/// A triangle face defined by three indices into the owning mesh's
/// vertex list. Indices are never validated here; keeping every index
/// below `vertices.len()` is the mesh builder's responsibility.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Face {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }
}

/// A named mesh with index-based faces and a per-frame transform state.
///
/// Vertices are allocated at construction and populated in place by the
/// caller; the list is never resized afterwards. `position` and
/// `rotation` (Euler angles: x = pitch, y = yaw, z = roll) are mutated
/// between frames by whoever drives the render loop.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<Point3<f32>>,
    pub faces: Vec<Face>,
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
}

impl Mesh {
    /// Create a mesh with `vertex_count` zeroed vertices and no faces.
    pub fn new(name: impl Into<String>, vertex_count: usize) -> Self {
        Self {
            name: name.into(),
            vertices: vec![Point3::origin(); vertex_count],
            faces: Vec::new(),
            position: Vector3::zeros(),
            rotation: Vector3::zeros(),
        }
    }

    pub fn add_face(&mut self, a: usize, b: usize, c: usize) {
        self.faces.push(Face::new(a, b, c));
    }

    /// Rotate by delta Euler angles (in radians).
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.rotation.x += dx;
        self.rotation.y += dy;
        self.rotation.z += dz;
    }

    /// Create the canonical 8-vertex, 12-face unit-2 cube for testing
    /// and demos.
    pub fn cube() -> Self {
        let mut mesh = Self::new("cube", 8);

        mesh.vertices[0] = Point3::new(-1.0, 1.0, 1.0);
        mesh.vertices[1] = Point3::new(1.0, 1.0, 1.0);
        mesh.vertices[2] = Point3::new(-1.0, -1.0, 1.0);
        mesh.vertices[3] = Point3::new(1.0, -1.0, 1.0);
        mesh.vertices[4] = Point3::new(-1.0, 1.0, -1.0);
        mesh.vertices[5] = Point3::new(1.0, 1.0, -1.0);
        mesh.vertices[6] = Point3::new(1.0, -1.0, -1.0);
        mesh.vertices[7] = Point3::new(-1.0, -1.0, -1.0);

        mesh.add_face(0, 1, 2);
        mesh.add_face(1, 2, 3);
        mesh.add_face(1, 3, 6);
        mesh.add_face(1, 5, 6);
        mesh.add_face(0, 1, 4);
        mesh.add_face(1, 4, 5);
        mesh.add_face(2, 3, 7);
        mesh.add_face(3, 6, 7);
        mesh.add_face(0, 2, 7);
        mesh.add_face(0, 4, 7);
        mesh.add_face(4, 5, 6);
        mesh.add_face(4, 6, 7);

        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mesh_is_zeroed() {
        let mesh = Mesh::new("empty", 3);
        assert_eq!(mesh.vertices.len(), 3);
        assert!(mesh.vertices.iter().all(|v| *v == Point3::origin()));
        assert!(mesh.faces.is_empty());
        assert_eq!(mesh.position, Vector3::zeros());
        assert_eq!(mesh.rotation, Vector3::zeros());
    }

    #[test]
    fn test_cube_shape() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.faces.len(), 12);
        for v in &cube.vertices {
            assert_eq!(v.x.abs(), 1.0);
            assert_eq!(v.y.abs(), 1.0);
            assert_eq!(v.z.abs(), 1.0);
        }
        for f in &cube.faces {
            assert!(f.a < 8 && f.b < 8 && f.c < 8);
        }
    }

    #[test]
    fn test_rotate_accumulates() {
        let mut mesh = Mesh::new("m", 0);
        mesh.rotate(0.1, 0.2, 0.3);
        mesh.rotate(0.1, 0.0, 0.0);
        assert!((mesh.rotation.x - 0.2).abs() < 1e-6);
        assert!((mesh.rotation.y - 0.2).abs() < 1e-6);
        assert!((mesh.rotation.z - 0.3).abs() < 1e-6);
    }
}

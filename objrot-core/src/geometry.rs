/// Mesh model shared by the OBJ codec and the rotation transform
use nalgebra::{Matrix3, Point3, Vector3};

/// A face as three vertex indices, kept exactly as written in the file
pub type Face = [i64; 3];

/// A single-group mesh with positions, normals and faces in file order
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub group_name: String,
    pub vertices: Vec<Point3<f64>>,
    pub normals: Vec<Vector3<f64>>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            group_name: String::new(),
            vertices: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn with_capacity(vertices: usize, normals: usize, faces: usize) -> Self {
        Self {
            group_name: String::new(),
            vertices: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(normals),
            faces: Vec::with_capacity(faces),
        }
    }

    pub fn add_vertex(&mut self, x: f64, y: f64, z: f64) {
        self.vertices.push(Point3::new(x, y, z));
    }

    pub fn add_normal(&mut self, x: f64, y: f64, z: f64) {
        self.normals.push(Vector3::new(x, y, z));
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Apply `matrix` to every vertex and normal in place.
    ///
    /// Each point `p` becomes `matrix * p`. The matrix is used as a general
    /// linear map, so nothing checks that it is orthogonal. Faces and the
    /// group name are never touched.
    pub fn rotate(&mut self, matrix: &Matrix3<f64>) {
        for vertex in &mut self.vertices {
            *vertex = Point3::from(matrix * vertex.coords);
        }
        for normal in &mut self.normals {
            *normal = matrix * *normal;
        }

        tracing::debug!(
            vertices = self.vertices.len(),
            normals = self.normals.len(),
            "rotated mesh"
        );
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.group_name = "cube".to_string();
        mesh.add_vertex(1.0, 0.0, 0.0);
        mesh.add_normal(1.0, 0.0, 0.0);
        mesh.add_face([1, 2, 3]);
        mesh
    }

    #[test]
    fn test_counts() {
        let mut mesh = cube();
        mesh.add_vertex(0.0, 1.0, 0.0);
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.normal_count(), 1);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_identity_rotation_is_noop() {
        let mut mesh = cube();
        let before = mesh.clone();
        mesh.rotate(&Matrix3::identity());
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_general_linear_map() {
        let mut mesh = cube();
        let scale = Matrix3::from_diagonal(&Vector3::new(2.0, 3.0, 4.0));
        mesh.rotate(&scale);
        assert_eq!(mesh.vertices[0], Point3::new(2.0, 0.0, 0.0));
        assert_eq!(mesh.normals[0], Vector3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_matrix_applies_to_column_vectors() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(1.0, 0.0, 0.0);
        mesh.add_vertex(0.0, 1.0, 0.0);
        mesh.add_normal(0.0, 1.0, 0.0);
        let shear = Matrix3::new(1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);

        mesh.rotate(&shear);

        assert_eq!(mesh.vertices[0], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.vertices[1], Point3::new(1.0, 1.0, 0.0));
        assert_eq!(mesh.normals[0], Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_faces_and_group_untouched() {
        let mut mesh = cube();
        mesh.add_face([-1, 0, 42]);
        let faces = mesh.faces.clone();
        mesh.rotate(&Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0));
        assert_eq!(mesh.faces, faces);
        assert_eq!(mesh.group_name, "cube");
    }

    #[test]
    fn test_mismatched_counts_allowed() {
        let mut mesh = Mesh::with_capacity(0, 2, 0);
        mesh.add_normal(0.0, 0.0, 1.0);
        mesh.add_normal(0.0, 1.0, 0.0);
        mesh.rotate(&Matrix3::identity());
        assert!(mesh.vertices.is_empty());
        assert_eq!(mesh.normal_count(), 2);
    }
}

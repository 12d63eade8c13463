/// Axis-angle rotation matrices and their application to meshes
use nalgebra::{Matrix3, Vector3};

use crate::geometry::Mesh;

/// Build a rotation matrix from an axis and an angle (in radians).
///
/// Uses Rodrigues' formula on the normalized axis:
/// `cos θ·I + (1 − cos θ)·(a aᵀ) + sin θ·[a]×`.
///
/// The axis must be non-zero. A zero axis is not checked for; normalizing it
/// divides by zero and every entry of the result is NaN.
pub fn build_rotation(axis_x: f64, axis_y: f64, axis_z: f64, angle: f64) -> Matrix3<f64> {
    Transform::axis_angle(&Vector3::new(axis_x, axis_y, axis_z), angle)
}

/// Convert an angle in degrees to radians
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Rotate every vertex and normal of `mesh` by `matrix`
pub fn rotate_mesh(mesh: &mut Mesh, matrix: &Matrix3<f64>) {
    mesh.rotate(matrix);
}

/// Transform builder for 3D rotations
pub struct Transform;

impl Transform {
    /// Create a rotation matrix about `axis` by `angle` radians
    pub fn axis_angle(axis: &Vector3<f64>, angle: f64) -> Matrix3<f64> {
        let axis = axis.normalize();
        let (sin, cos) = angle.sin_cos();

        let scaled_identity = Matrix3::identity() * cos;
        let outer = (axis * axis.transpose()) * (1.0 - cos);
        let cross = axis.cross_matrix() * sin;

        scaled_identity + outer + cross
    }

    /// Compose two transforms so that `first` is applied before `second`
    pub fn then(first: &Matrix3<f64>, second: &Matrix3<f64>) -> Matrix3<f64> {
        second * first
    }
}

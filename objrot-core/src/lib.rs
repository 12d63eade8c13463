/// objrot Core Library - OBJ mesh model, codec and rotation logic
///
/// This library provides the stateless core: reading the single-group OBJ
/// subset into a mesh, building axis-angle rotation matrices, rotating mesh
/// vertices and normals, and writing the mesh back out.

pub mod error;
pub mod geometry;
pub mod obj;
pub mod transform;

// Re-export commonly used types
pub use error::{ObjError, ObjResult, ParseErrorKind};
pub use geometry::{Face, Mesh};
pub use obj::{parse_obj, read_obj_file, write_obj, write_obj_file, write_obj_to};
pub use transform::{build_rotation, degrees_to_radians, rotate_mesh, Transform};

use glam::Vec3;

use crate::error::MorphRendererError;

/// One triangular face. Positions and normals are indexed independently, so
/// a corner is a (vertex index, normal index) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
  pub vertices: [u32; 3],
  pub normals: [u32; 3],
}

/// A mesh is one pose: vertex positions, normals and the triangular faces
/// that reference them.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
  pub positions: Vec<Vec3>,
  pub normals: Vec<Vec3>,
  pub faces: Vec<Face>,
}

impl Mesh {
  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  pub fn normal_count(&self) -> usize {
    self.normals.len()
  }

  pub fn face_count(&self) -> usize {
    self.faces.len()
  }

  /// Check that a target pose shares this mesh's topology. The morph buffer
  /// indexes all three poses with the base mesh's faces, so any count
  /// disagreement would read out of bounds.
  /// param name: The name of the pose, used in the error.
  /// param pose: The target pose.
  /// return: Ok when vertex, normal and face counts all match.
  pub fn check_topology(&self, name: &str, pose: &Mesh) -> Result<(), MorphRendererError> {
    let counts = [
      ("vertex", self.vertex_count(), pose.vertex_count()),
      ("normal", self.normal_count(), pose.normal_count()),
      ("face", self.face_count(), pose.face_count()),
    ];
    for (quantity, base_count, pose_count) in counts {
      if base_count != pose_count {
        return Err(MorphRendererError::TopologyMismatch {
          quantity,
          name: name.to_string(),
          base: base_count,
          pose: pose_count,
        });
      }
    }
    Ok(())
  }
}

use glam::Vec3A;
use rayon::prelude::*;

use crate::error::MorphRendererError;
use crate::scene::cpu::mesh::Mesh;
use crate::scene::vertex::MorphVertex;

/// The packed morph buffer: one self-contained record per face corner, in
/// face order, with shared vertices duplicated so the whole buffer draws as
/// an unindexed triangle list. Holds exactly `3 * face_count` records and is
/// immutable once built.
#[derive(Debug)]
pub struct MorphBuffer {
  vertices: Vec<MorphVertex>,
}

/// The implementation of the morph buffer.
impl MorphBuffer {
  /// Build the buffer from the base pose and the two target poses. Pure
  /// over its inputs; the caller owns the transfer to GPU storage.
  /// param base: The base pose.
  /// param pose_a: The first target pose.
  /// param pose_b: The second target pose.
  /// return: The packed buffer, or TopologyMismatch when the poses disagree
  /// on any count the faces index into.
  pub fn build(base: &Mesh, pose_a: &Mesh, pose_b: &Mesh) -> Result<Self, MorphRendererError> {
    base.check_topology("pose_a", pose_a)?;
    base.check_topology("pose_b", pose_b)?;

    // Faces are the same for all three poses, so only the base list is read.
    let vertices = base.faces.par_iter()
      .flat_map_iter(|face| {
        (0..3).map(move |corner| {
          let vi = face.vertices[corner] as usize;
          let ni = face.normals[corner] as usize;
          let position = Vec3A::from(base.positions[vi]);
          let normal = Vec3A::from(base.normals[ni]);
          // Target poses are stored as differences from the base, which
          // drops a subtraction from the per-frame blend.
          MorphVertex {
            position,
            normal,
            pose_a_position: Vec3A::from(pose_a.positions[vi]) - position,
            pose_a_normal: Vec3A::from(pose_a.normals[ni]) - normal,
            pose_b_position: Vec3A::from(pose_b.positions[vi]) - position,
            pose_b_normal: Vec3A::from(pose_b.normals[ni]) - normal,
          }
        })
      })
      .collect::<Vec<_>>();

    log::debug!("A morph buffer with {} corner records built.", vertices.len());
    Ok(Self { vertices })
  }

  pub fn vertices(&self) -> &[MorphVertex] {
    &self.vertices
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  /// The flat delta stream for texture-buffer upload: four texels per
  /// corner, in the order dPosA, dPosB, dNormA, dNormB. Texels are
  /// vec4-padded (w = 0) so the buffer samples cleanly everywhere.
  /// return: The texel stream, `4 * vertex_count` entries.
  pub fn delta_texels(&self) -> Vec<[f32; 4]> {
    let mut texels = Vec::with_capacity(self.vertices.len() * 4);
    for vertex in &self.vertices {
      for delta in [
        vertex.pose_a_position,
        vertex.pose_b_position,
        vertex.pose_a_normal,
        vertex.pose_b_normal,
      ] {
        texels.push([delta.x, delta.y, delta.z, 0.0]);
      }
    }
    texels
  }
}

#[cfg(test)]
mod tests {
  use glam::Vec3;

  use crate::scene::cpu::mesh::Face;
  use super::*;

  fn two_face_mesh(offset: Vec3) -> Mesh {
    let positions = (0..4)
      .map(|i| Vec3::new(i as f32, (i * i) as f32, -(i as f32)) + offset)
      .collect::<Vec<_>>();
    let normals = (0..4)
      .map(|i| (Vec3::Y + Vec3::X * (i as f32 * 0.1) + offset * 0.01).normalize())
      .collect::<Vec<_>>();
    Mesh {
      positions,
      normals,
      faces: vec![
        Face { vertices: [0, 1, 2], normals: [0, 1, 2] },
        Face { vertices: [0, 2, 3], normals: [0, 2, 3] },
      ],
    }
  }

  #[test]
  fn test_record_count_is_three_per_face() {
    let base = two_face_mesh(Vec3::ZERO);
    let pose_a = two_face_mesh(Vec3::X);
    let pose_b = two_face_mesh(Vec3::Z * 2.0);
    let buffer = MorphBuffer::build(&base, &pose_a, &pose_b).unwrap();
    assert_eq!(buffer.vertex_count(), 3 * base.face_count());
  }

  #[test]
  fn test_records_follow_face_order_and_duplicate_shared_vertices() {
    let base = two_face_mesh(Vec3::ZERO);
    let pose_a = two_face_mesh(Vec3::X);
    let pose_b = two_face_mesh(Vec3::Z * 2.0);
    let buffer = MorphBuffer::build(&base, &pose_a, &pose_b).unwrap();

    let corner_order = [0usize, 1, 2, 0, 2, 3];
    for (record, vi) in buffer.vertices().iter().zip(corner_order) {
      assert_eq!(record.position, Vec3A::from(base.positions[vi]));
    }
    // Vertex 0 appears in both faces, so records 0 and 3 are equal copies.
    assert_eq!(buffer.vertices()[0], buffer.vertices()[3]);
  }

  #[test]
  fn test_deltas_round_trip_to_the_target_poses() {
    let base = two_face_mesh(Vec3::ZERO);
    let pose_a = two_face_mesh(Vec3::new(1.0, -2.0, 0.5));
    let pose_b = two_face_mesh(Vec3::new(-3.0, 0.25, 4.0));
    let buffer = MorphBuffer::build(&base, &pose_a, &pose_b).unwrap();

    let corner_order = [0usize, 1, 2, 0, 2, 3];
    for (record, vi) in buffer.vertices().iter().zip(corner_order) {
      let a_pos = record.position + record.pose_a_position;
      let b_pos = record.position + record.pose_b_position;
      assert!((a_pos - Vec3A::from(pose_a.positions[vi])).length() < 1e-6);
      assert!((b_pos - Vec3A::from(pose_b.positions[vi])).length() < 1e-6);

      let a_norm = record.normal + record.pose_a_normal;
      let b_norm = record.normal + record.pose_b_normal;
      assert!((a_norm - Vec3A::from(pose_a.normals[vi])).length() < 1e-6);
      assert!((b_norm - Vec3A::from(pose_b.normals[vi])).length() < 1e-6);
    }
  }

  #[test]
  fn test_full_weight_blend_reaches_pose_a() {
    let base = two_face_mesh(Vec3::ZERO);
    let pose_a = two_face_mesh(Vec3::X);
    let pose_b = two_face_mesh(Vec3::Z);
    let buffer = MorphBuffer::build(&base, &pose_a, &pose_b).unwrap();

    let record = &buffer.vertices()[1];
    let blended = record.blend_position(1.0, 0.0);
    assert!((blended - Vec3A::from(pose_a.positions[1])).length() < 1e-6);
  }

  #[test]
  fn test_topology_mismatch_fails_the_build() {
    let base = two_face_mesh(Vec3::ZERO);
    let pose_a = two_face_mesh(Vec3::X);
    let mut pose_b = two_face_mesh(Vec3::Z);
    pose_b.positions.push(Vec3::ZERO);
    let err = MorphBuffer::build(&base, &pose_a, &pose_b).unwrap_err();
    assert!(matches!(err, MorphRendererError::TopologyMismatch { name, .. } if name == "pose_b"));
  }

  #[test]
  fn test_delta_texels_are_packed_four_per_corner() {
    let base = two_face_mesh(Vec3::ZERO);
    let pose_a = two_face_mesh(Vec3::X);
    let pose_b = two_face_mesh(Vec3::Z * 2.0);
    let buffer = MorphBuffer::build(&base, &pose_a, &pose_b).unwrap();

    let texels = buffer.delta_texels();
    assert_eq!(texels.len(), 4 * buffer.vertex_count());
    // First corner: dPosA, dPosB, dNormA, dNormB, all w = 0.
    let record = &buffer.vertices()[0];
    assert_eq!(texels[0], [record.pose_a_position.x, record.pose_a_position.y, record.pose_a_position.z, 0.0]);
    assert_eq!(texels[1], [record.pose_b_position.x, record.pose_b_position.y, record.pose_b_position.z, 0.0]);
    assert_eq!(texels[2], [record.pose_a_normal.x, record.pose_a_normal.y, record.pose_a_normal.z, 0.0]);
    assert_eq!(texels[3], [record.pose_b_normal.x, record.pose_b_normal.y, record.pose_b_normal.z, 0.0]);
  }
}

use glam::Vec3A;

/// One packed corner record of the morph buffer: the base attributes plus
/// the precomputed deltas to each of the two target poses. Every field is
/// `Vec3A`, so each attribute occupies a full vec4 slot when sampled on the
/// GPU side.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphVertex {
  pub position: Vec3A,
  pub normal: Vec3A,
  pub pose_a_position: Vec3A,
  pub pose_a_normal: Vec3A,
  pub pose_b_position: Vec3A,
  pub pose_b_normal: Vec3A,
}

impl MorphVertex {
  /// Blend the record into a final position for the given weight pair.
  /// param weight1: How much of pose A to apply.
  /// param weight2: How much of pose B to apply.
  /// return: The blended position.
  pub fn blend_position(&self, weight1: f32, weight2: f32) -> Vec3A {
    self.position + self.pose_a_position * weight1 + self.pose_b_position * weight2
  }

  /// Blend the record into a final normal for the given weight pair.
  /// param weight1: How much of pose A to apply.
  /// param weight2: How much of pose B to apply.
  /// return: The blended normal, not renormalized.
  pub fn blend_normal(&self, weight1: f32, weight2: f32) -> Vec3A {
    self.normal + self.pose_a_normal * weight1 + self.pose_b_normal * weight2
  }
}

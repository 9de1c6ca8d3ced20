use glam::Vec3;

/// A point light source in the scene. Intensities are split per shading
/// term to match the fragment shader's light block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
  pub position: Vec3,
  pub ambient: Vec3,
  pub diffuse: Vec3,
  pub specular: Vec3,
}

impl Default for Light {
  fn default() -> Self {
    Self {
      position: Vec3::new(2.0, 20.0, 2.0),
      ambient: Vec3::splat(0.1),
      diffuse: Vec3::splat(1.0),
      specular: Vec3::splat(0.9),
    }
  }
}

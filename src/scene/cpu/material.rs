use glam::Vec3;

/// An ambient/diffuse/specular material for the blended mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
  pub ambient: Vec3,
  pub diffuse: Vec3,
  pub specular: Vec3,
  pub shininess: f32,
}

impl Default for Material {
  fn default() -> Self {
    Self {
      ambient: Vec3::splat(0.1),
      diffuse: Vec3::splat(0.8),
      specular: Vec3::splat(1.0),
      shininess: 1000.0,
    }
  }
}

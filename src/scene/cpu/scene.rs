use std::path::Path;

use glam::Vec3;

use crate::error::MorphRendererError;
use super::camera::Camera;
use super::light::Light;
use super::material::Material;
use super::mesh::Mesh;
use super::super::loader::GltfLoader;

/// A scene is the three poses of one morphing model plus the camera,
/// material and light it is shaded with. The three poses must share
/// topology; that is checked once here, at load time.
pub struct MorphScene {
  pub base: Mesh,
  pub pose_a: Mesh,
  pub pose_b: Mesh,
  pub camera: Camera,
  pub material: Material,
  pub light: Light,
}

/// The Drop implementation of the scene.
impl Drop for MorphScene {
  fn drop(&mut self) {
    log::debug!("A MorphScene dropped.");
  }
}

/// The implementation of the scene.
impl MorphScene {
  /// Create a new scene from three pose files.
  /// param base: The path of the base pose.
  /// param pose_a: The path of the first target pose.
  /// param pose_b: The path of the second target pose.
  /// return: The scene.
  pub fn new<P: AsRef<Path>>(base: P, pose_a: P, pose_b: P) -> Result<Self, MorphRendererError> {
    let base = Self::load_pose(base.as_ref())?;
    let pose_a = Self::load_pose(pose_a.as_ref())?;
    let pose_b = Self::load_pose(pose_b.as_ref())?;
    base.check_topology("pose_a", &pose_a)?;
    base.check_topology("pose_b", &pose_b)?;

    let scene = Self::with_poses(base, pose_a, pose_b);
    log::debug!("A MorphScene created.");
    Ok(scene)
  }

  /// Create a scene from already loaded poses. Topology is not rechecked
  /// here; the morph buffer build does that before indexing.
  /// param base: The base pose.
  /// param pose_a: The first target pose.
  /// param pose_b: The second target pose.
  /// return: The scene.
  pub fn with_poses(base: Mesh, pose_a: Mesh, pose_b: Mesh) -> Self {
    Self {
      base,
      pose_a,
      pose_b,
      camera: Camera::new(Vec3::new(0.0, 10.0, 40.0), Vec3::new(0.0, 10.0, 0.0), Vec3::Y),
      material: Material::default(),
      light: Light::default(),
    }
  }

  /// Load one pose, dispatching on the file extension.
  /// param path: The path of the pose file.
  /// return: The loaded pose mesh.
  pub fn load_pose(path: &Path) -> Result<Mesh, MorphRendererError> {
    let extension = path.extension()
      .ok_or(MorphRendererError::asset(&format!("Get file \"{:?}\" extension failed.", path), None))?;
    match extension.to_str() {
      Some("gltf") | Some("glb") => GltfLoader::load(path),
      _ => Err(MorphRendererError::UnsupportedAsset(path.to_path_buf())),
    }
  }
}

use std::path::{
  Path,
  PathBuf,
};

use serde::{
  Deserialize, Serialize
};

use crate::error::MorphRendererError;

fn default_title() -> String {
  "Morph Mesh Demo".to_string()
}

fn default_width() -> u32 {
  720
}

fn default_height() -> u32 {
  576
}

fn default_base() -> PathBuf {
  PathBuf::from("models/pose_base.gltf")
}

fn default_pose_a() -> PathBuf {
  PathBuf::from("models/pose_a.gltf")
}

fn default_pose_b() -> PathBuf {
  PathBuf::from("models/pose_b.gltf")
}

fn default_yfov() -> f32 {
  45.0
}

fn default_znear() -> f32 {
  0.05
}

fn default_zfar() -> f32 {
  350.0
}

fn default_tick_ms() -> u64 {
  4
}

/// The window settings.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WindowConfig {
  #[serde(default = "default_title")]
  pub title: String,
  #[serde(default = "default_width")]
  pub width: u32,
  #[serde(default = "default_height")]
  pub height: u32,
}

impl Default for WindowConfig {
  fn default() -> Self {
    Self {
      title: default_title(),
      width: default_width(),
      height: default_height(),
    }
  }
}

/// The three pose asset paths.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssetConfig {
  #[serde(default = "default_base")]
  pub base: PathBuf,
  #[serde(default = "default_pose_a")]
  pub pose_a: PathBuf,
  #[serde(default = "default_pose_b")]
  pub pose_b: PathBuf,
}

impl Default for AssetConfig {
  fn default() -> Self {
    Self {
      base: default_base(),
      pose_a: default_pose_a(),
      pose_b: default_pose_b(),
    }
  }
}

/// The camera settings.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CameraConfig {
  #[serde(default = "default_yfov")]
  pub yfov: f32,
  #[serde(default = "default_znear")]
  pub znear: f32,
  #[serde(default = "default_zfar")]
  pub zfar: f32,
}

impl Default for CameraConfig {
  fn default() -> Self {
    Self {
      yfov: default_yfov(),
      znear: default_znear(),
      zfar: default_zfar(),
    }
  }
}

/// The punch timing settings.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PunchConfig {
  /// The punch timer period in milliseconds.
  #[serde(default = "default_tick_ms")]
  pub tick_ms: u64,
}

impl Default for PunchConfig {
  fn default() -> Self {
    Self {
      tick_ms: default_tick_ms(),
    }
  }
}

/// The runtime settings of the demo. Every field is optional in the file;
/// missing ones take the defaults above.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MorphConfig {
  #[serde(default)]
  pub window: WindowConfig,
  #[serde(default)]
  pub assets: AssetConfig,
  #[serde(default)]
  pub camera: CameraConfig,
  #[serde(default)]
  pub punch: PunchConfig,
}

/// The implementation of the settings.
impl MorphConfig {
  /// Load the settings from a JSON file.
  /// param path: The path of the settings file.
  /// return: The settings.
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MorphRendererError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
      .map_err(|err| MorphRendererError::asset(&format!("Read config file \"{:?}\" failed.", path), Some(Box::new(err))))?;
    Ok(serde_json::from_str(&text)?)
  }

  /// The punch timer period as a duration.
  pub fn tick_period(&self) -> std::time::Duration {
    std::time::Duration::from_millis(self.punch.tick_ms)
  }
}

use std::time::{
  Duration,
  Instant,
};

use glam::{
  Mat3,
  Mat4,
  Vec3,
};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::animation::{
  MorphAnimator,
  Side,
};
use crate::config::MorphConfig;
use crate::error::MorphRendererError;
use crate::input::{
  map_key,
  Action,
  WindowCommand,
};
use crate::scene::cpu::camera::CameraOrbit;
use crate::scene::cpu::MorphScene;
use crate::scene::gpu::MorphBuffer;

/// The seam to the external shader system. The names passed here are a
/// bit-for-bit contract with the shader source.
pub trait UniformSink {
  fn set_f32(&mut self, name: &str, value: f32);
  fn set_vec3(&mut self, name: &str, value: Vec3);
  fn set_mat3(&mut self, name: &str, value: Mat3);
  fn set_mat4(&mut self, name: &str, value: Mat4);
}

/// The renderer owns the scene, the packed morph buffer and the animation
/// state, and assembles everything one frame needs: uniform values, overlay
/// text and the current orbit transform. The GPU itself stays on the other
/// side of `UniformSink` and `MorphBuffer`.
pub struct MorphRenderer {
  pub name: String,
  pub width: u32,
  pub height: u32,

  pub scene: MorphScene,
  morph_buffer: MorphBuffer,
  animator: MorphAnimator,
  orbit: CameraOrbit,
  animation: bool,

  // Statistic.
  total_frames: u64,
  window_frames: u64,
  last_stat_time: Instant,
  elapsed_time: Duration,
}

/// The Drop implementation of the renderer.
impl Drop for MorphRenderer {
  fn drop(&mut self) {
    log::debug!("A MorphRenderer \"{}\" is dropped.", self.name);
  }
}

/// The implementation of the renderer.
impl MorphRenderer {
  /// Create a new renderer, loading the three poses named by the config.
  /// param name: The name of the renderer.
  /// param config: The runtime settings.
  /// return: The renderer.
  pub fn new(name: &str, config: &MorphConfig) -> Result<Self, MorphRendererError> {
    let scene = MorphScene::new(&config.assets.base, &config.assets.pose_a, &config.assets.pose_b)?;
    Self::with_scene(name, config, scene)
  }

  /// Create a new renderer around an already constructed scene.
  /// param name: The name of the renderer.
  /// param config: The runtime settings.
  /// param scene: The scene to render.
  /// return: The renderer.
  pub fn with_scene(name: &str, config: &MorphConfig, mut scene: MorphScene) -> Result<Self, MorphRendererError> {
    // The morph buffer is built once here and never rebuilt on animation.
    let morph_buffer = MorphBuffer::build(&scene.base, &scene.pose_a, &scene.pose_b)?;

    let width = config.window.width;
    let height = config.window.height;
    scene.camera.set_shape(
      config.camera.yfov,
      width as f32 / height as f32,
      config.camera.znear,
      config.camera.zfar,
    );

    log::debug!("A MorphRenderer \"{}\"[{} x {}] is created.", name, width, height);
    Ok(Self {
      name: name.to_string(),
      width,
      height,
      scene,
      morph_buffer,
      animator: MorphAnimator::new(config.tick_period()),
      orbit: CameraOrbit::new(),
      animation: true,
      total_frames: 0,
      window_frames: 0,
      last_stat_time: Instant::now(),
      elapsed_time: Duration::from_secs(0),
    })
  }

  pub fn morph_buffer(&self) -> &MorphBuffer {
    &self.morph_buffer
  }

  pub fn animator(&self) -> &MorphAnimator {
    &self.animator
  }

  pub fn is_animating(&self) -> bool {
    self.animation
  }

  /// Resize the viewport and refit the camera.
  /// param width: The new width.
  /// param height: The new height.
  pub fn resize(&mut self, width: u32, height: u32) {
    self.width = width;
    self.height = height;
    let aspect = width as f32 / height as f32;
    let camera = &mut self.scene.camera;
    let (yfov, znear, zfar) = (camera.yfov, camera.znear, camera.zfar);
    camera.set_shape(yfov, aspect, znear, zfar);
  }

  /// Handle one key press.
  /// param key: The pressed key.
  /// return: A window command for the host, when the key maps to one.
  pub fn on_key(&mut self, key: KeyCode) -> Option<WindowCommand> {
    match map_key(key)? {
      Action::Window(command) => return Some(command),
      Action::Adjust(pose, direction) => {
        if !self.animator.adjust(pose, direction) {
          log::debug!("Adjust of {:?} ignored while its punch is active.", pose);
        }
      }
      Action::ToggleAnimation => self.animation = !self.animation,
      Action::Punch(side) => {
        self.animator.punch(side);
      }
    }
    None
  }

  /// Advance one arm's punch cycle; called by the host when that arm's
  /// timer fires.
  /// param side: The arm whose timer fired.
  pub fn on_punch_tick(&mut self, side: Side) {
    self.animator.tick(side);
  }

  pub fn on_mouse_press(&mut self, button: MouseButton, x: f32, y: f32) {
    self.orbit.mouse_press(button, x, y);
  }

  pub fn on_mouse_release(&mut self, button: MouseButton) {
    self.orbit.mouse_release(button);
  }

  pub fn on_mouse_move(&mut self, x: f32, y: f32) {
    self.orbit.mouse_move(x, y);
  }

  pub fn on_mouse_wheel(&mut self, notches: f32) {
    self.orbit.wheel(notches);
  }

  /// Load the per-frame matrices and blend weights into the shader system.
  /// param sink: The shader system seam.
  pub fn load_matrices_to(&self, sink: &mut dyn UniformSink) {
    let mv = self.scene.camera.view_matrix() * self.orbit.global_transform();
    let mvp = self.scene.camera.projection_matrix() * mv;
    let normal_matrix = Mat3::from_mat4(mv).inverse().transpose();

    sink.set_mat4("MVP", mvp);
    sink.set_mat4("MV", mv);
    sink.set_mat3("normalMatrix", normal_matrix);
    sink.set_f32("weight1", self.animator.weight1());
    sink.set_f32("weight2", self.animator.weight2());
  }

  /// Load the static material and light values into the shader system.
  /// Called once after the shader program links.
  /// param sink: The shader system seam.
  pub fn load_lighting_to(&self, sink: &mut dyn UniformSink) {
    let material = &self.scene.material;
    sink.set_vec3("material.Ka", material.ambient);
    sink.set_vec3("material.Kd", material.diffuse);
    sink.set_vec3("material.Ks", material.specular);
    sink.set_f32("material.shininess", material.shininess);

    let light = &self.scene.light;
    sink.set_vec3("light.position", light.position);
    sink.set_vec3("light.La", light.ambient);
    sink.set_vec3("light.Ld", light.diffuse);
    sink.set_vec3("light.Ls", light.specular);
  }

  /// The overlay lines drawn on top of the frame by the external text
  /// renderer.
  /// return: The weight readouts and the key help line.
  pub fn overlay_text(&self) -> [String; 3] {
    [
      format!("Q-W change Pose one weight {}", self.animator.weight1()),
      format!("A-S change Pose two weight {}", self.animator.weight2()),
      "Z trigger Left Punch X trigger Right".to_string(),
    ]
  }

  /// Per-frame bookkeeping. Logs the frame rate once per second.
  /// param _delta_time: The seconds since the previous frame.
  pub fn update(&mut self, _delta_time: f64) {
    self.total_frames += 1;
    self.window_frames += 1;

    let now = Instant::now();
    self.elapsed_time += now - self.last_stat_time;
    self.last_stat_time = now;
    if self.elapsed_time > Duration::from_secs(1) {
      let elapsed_nanos = self.elapsed_time.as_nanos();
      log::info!(
        "FPS: {:.1}, Total Frames: {}",
        self.window_frames as f64 * 1000000000.0 / elapsed_nanos as f64,
        self.total_frames,
      );
      self.window_frames = 0;
      self.elapsed_time = Duration::from_secs(0);
    }
  }
}

#[cfg(test)]
mod tests {
  use glam::Vec3A;

  use crate::scene::cpu::mesh::{
    Face,
    Mesh,
  };
  use super::*;

  #[derive(Debug, Default)]
  struct RecordingSink {
    names: Vec<String>,
    f32s: Vec<(String, f32)>,
  }

  impl UniformSink for RecordingSink {
    fn set_f32(&mut self, name: &str, value: f32) {
      self.names.push(name.to_string());
      self.f32s.push((name.to_string(), value));
    }

    fn set_vec3(&mut self, name: &str, _value: Vec3) {
      self.names.push(name.to_string());
    }

    fn set_mat3(&mut self, name: &str, _value: Mat3) {
      self.names.push(name.to_string());
    }

    fn set_mat4(&mut self, name: &str, _value: Mat4) {
      self.names.push(name.to_string());
    }
  }

  fn tetra(offset: Vec3) -> Mesh {
    let positions = vec![
      Vec3::ZERO + offset,
      Vec3::X + offset,
      Vec3::Y + offset,
      Vec3::Z + offset,
    ];
    let normals = vec![Vec3::Y; 4];
    Mesh {
      positions,
      normals,
      faces: vec![
        Face { vertices: [0, 1, 2], normals: [0, 1, 2] },
        Face { vertices: [0, 2, 3], normals: [0, 2, 3] },
      ],
    }
  }

  fn renderer() -> MorphRenderer {
    let scene = MorphScene::with_poses(tetra(Vec3::ZERO), tetra(Vec3::X), tetra(Vec3::Z));
    MorphRenderer::with_scene("test", &MorphConfig::default(), scene).unwrap()
  }

  #[test]
  fn test_matrix_uniform_names_match_the_shader_contract() {
    let renderer = renderer();
    let mut sink = RecordingSink::default();
    renderer.load_matrices_to(&mut sink);
    assert_eq!(sink.names, vec!["MVP", "MV", "normalMatrix", "weight1", "weight2"]);
  }

  #[test]
  fn test_lighting_uniform_names_match_the_shader_contract() {
    let renderer = renderer();
    let mut sink = RecordingSink::default();
    renderer.load_lighting_to(&mut sink);
    assert_eq!(
      sink.names,
      vec![
        "material.Ka", "material.Kd", "material.Ks", "material.shininess",
        "light.position", "light.La", "light.Ld", "light.Ls",
      ],
    );
  }

  #[test]
  fn test_key_presses_drive_the_weights() {
    let mut renderer = renderer();
    assert_eq!(renderer.on_key(KeyCode::KeyW), None);
    assert_eq!(renderer.on_key(KeyCode::KeyS), None);
    assert_eq!(renderer.on_key(KeyCode::KeyS), None);

    let mut sink = RecordingSink::default();
    renderer.load_matrices_to(&mut sink);
    let weight1 = sink.f32s.iter().find(|(name, _)| name == "weight1").unwrap().1;
    let weight2 = sink.f32s.iter().find(|(name, _)| name == "weight2").unwrap().1;
    assert!((weight1 - 0.1).abs() < 1e-6);
    assert!((weight2 - 0.2).abs() < 1e-6);
  }

  #[test]
  fn test_escape_returns_the_quit_command() {
    let mut renderer = renderer();
    assert_eq!(renderer.on_key(KeyCode::Escape), Some(WindowCommand::Quit));
  }

  #[test]
  fn test_space_toggles_the_idle_animation_flag() {
    let mut renderer = renderer();
    assert!(renderer.is_animating());
    renderer.on_key(KeyCode::Space);
    assert!(!renderer.is_animating());
    renderer.on_key(KeyCode::Space);
    assert!(renderer.is_animating());
  }

  #[test]
  fn test_overlay_reports_current_weights() {
    let mut renderer = renderer();
    renderer.on_key(KeyCode::KeyW);
    let [line1, line2, help] = renderer.overlay_text();
    assert_eq!(line1, "Q-W change Pose one weight 0.1");
    assert_eq!(line2, "A-S change Pose two weight 0");
    assert_eq!(help, "Z trigger Left Punch X trigger Right");
  }

  #[test]
  fn test_morph_buffer_is_built_once_at_construction() {
    let renderer = renderer();
    assert_eq!(renderer.morph_buffer().vertex_count(), 6);
    let first = renderer.morph_buffer().vertices()[0];
    assert_eq!(first.position, Vec3A::ZERO);
    assert_eq!(first.pose_a_position, Vec3A::X);
    assert_eq!(first.pose_b_position, Vec3A::Z);
  }
}

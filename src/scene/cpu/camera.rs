use glam::{
  Mat4,
  Vec3,
};
use winit::event::MouseButton;

/// Degrees of spin per pixel of mouse drag.
const SPIN_STEP: f32 = 0.5;
/// World units of translation per pixel of mouse drag.
const TRANSLATE_STEP: f32 = 0.01;
/// World units of dolly per wheel notch.
const ZOOM_STEP: f32 = 0.5;

/// A perspective camera in the scene.
#[derive(Debug, Clone)]
pub struct Camera {
  pub from: Vec3,
  pub to: Vec3,
  pub up: Vec3,
  pub yfov: f32,
  pub aspect: f32,
  pub znear: f32,
  pub zfar: f32,

  view: Mat4,
  projection: Mat4,
}

/// The implementation of the camera.
impl Camera {
  /// Create a new camera.
  /// param from: The eye position.
  /// param to: The look-at target.
  /// param up: The up direction.
  /// return: The camera, with a unit aspect projection until set_shape is called.
  pub fn new(from: Vec3, to: Vec3, up: Vec3) -> Self {
    let mut camera = Self {
      from,
      to,
      up,
      yfov: 45.0,
      aspect: 1.0,
      znear: 0.05,
      zfar: 350.0,
      view: Mat4::IDENTITY,
      projection: Mat4::IDENTITY,
    };
    camera.set(from, to, up);
    camera.set_shape(45.0, 1.0, 0.05, 350.0);
    camera
  }

  /// Reposition the camera.
  /// param from: The eye position.
  /// param to: The look-at target.
  /// param up: The up direction.
  pub fn set(&mut self, from: Vec3, to: Vec3, up: Vec3) {
    self.from = from;
    self.to = to;
    self.up = up;
    self.view = Mat4::look_at_rh(from, to, up);
  }

  /// Set the projection shape.
  /// param yfov: The vertical field of view in degrees.
  /// param aspect: The width / height ratio.
  /// param znear: The near clipping plane.
  /// param zfar: The far clipping plane.
  pub fn set_shape(&mut self, yfov: f32, aspect: f32, znear: f32, zfar: f32) {
    self.yfov = yfov;
    self.aspect = aspect;
    self.znear = znear;
    self.zfar = zfar;
    self.projection = Mat4::perspective_rh_gl(yfov.to_radians(), aspect, znear, zfar);
  }

  pub fn view_matrix(&self) -> Mat4 {
    self.view
  }

  pub fn projection_matrix(&self) -> Mat4 {
    self.projection
  }
}

/// Mouse-driven orbit state. The host forwards its mouse events verbatim;
/// this only accumulates spin angles and a model translation.
#[derive(Debug, Clone, Default)]
pub struct CameraOrbit {
  pub spin_x: f32,
  pub spin_y: f32,
  pub model_pos: Vec3,

  rotating: bool,
  translating: bool,
  last_x: f32,
  last_y: f32,
}

/// The implementation of the orbit state.
impl CameraOrbit {
  pub fn new() -> Self {
    Self::default()
  }

  /// Begin a drag.
  /// param button: The pressed mouse button.
  /// param x: The cursor x position.
  /// param y: The cursor y position.
  pub fn mouse_press(&mut self, button: MouseButton, x: f32, y: f32) {
    match button {
      MouseButton::Left => self.rotating = true,
      MouseButton::Right => self.translating = true,
      _ => return,
    }
    self.last_x = x;
    self.last_y = y;
  }

  /// End a drag.
  /// param button: The released mouse button.
  pub fn mouse_release(&mut self, button: MouseButton) {
    match button {
      MouseButton::Left => self.rotating = false,
      MouseButton::Right => self.translating = false,
      _ => (),
    }
  }

  /// Apply a cursor move to whichever drag is in progress.
  /// param x: The cursor x position.
  /// param y: The cursor y position.
  pub fn mouse_move(&mut self, x: f32, y: f32) {
    let dx = x - self.last_x;
    let dy = y - self.last_y;
    if self.rotating {
      self.spin_x += SPIN_STEP * dy;
      self.spin_y += SPIN_STEP * dx;
      self.last_x = x;
      self.last_y = y;
    } else if self.translating {
      self.model_pos.x += TRANSLATE_STEP * dx;
      self.model_pos.y -= TRANSLATE_STEP * dy;
      self.last_x = x;
      self.last_y = y;
    }
  }

  /// Dolly along z.
  /// param notches: The wheel delta in notches, positive away from the user.
  pub fn wheel(&mut self, notches: f32) {
    self.model_pos.z += ZOOM_STEP * notches;
  }

  /// The accumulated global transform: translation over yaw over pitch.
  /// return: The model transform fed into the MV matrix each frame.
  pub fn global_transform(&self) -> Mat4 {
    Mat4::from_translation(self.model_pos)
      * Mat4::from_rotation_y(self.spin_y.to_radians())
      * Mat4::from_rotation_x(self.spin_x.to_radians())
  }
}

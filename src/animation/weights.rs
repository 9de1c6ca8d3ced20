/// Which pose a manual adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
  One,
  Two,
}

/// The direction of a manual adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Up,
  Down,
}

/// Weight moved by one manual adjustment.
pub const ADJUST_STEP: f32 = 0.1;

/// The pair of blend weights applied to the two target poses. Both values
/// lie in [0, 1] after every mutation; out-of-range intermediates are
/// silently clamped, never reported.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlendWeights {
  weight1: f32,
  weight2: f32,
}

/// The implementation of the blend weights.
impl BlendWeights {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn weight1(&self) -> f32 {
    self.weight1
  }

  pub fn weight2(&self) -> f32 {
    self.weight2
  }

  /// Nudge one weight by the manual adjustment step.
  /// param pose: The pose whose weight moves.
  /// param direction: Up to add, Down to subtract.
  pub fn adjust(&mut self, pose: Pose, direction: Direction) {
    let step = match direction {
      Direction::Up => ADJUST_STEP,
      Direction::Down => -ADJUST_STEP,
    };
    match pose {
      Pose::One => self.weight1 += step,
      Pose::Two => self.weight2 += step,
    }
    self.clamp();
  }

  /// Overwrite one weight, clamped like every other mutation.
  /// param pose: The pose whose weight is set.
  /// param value: The new value.
  pub fn set(&mut self, pose: Pose, value: f32) {
    match pose {
      Pose::One => self.weight1 = value,
      Pose::Two => self.weight2 = value,
    }
    self.clamp();
  }

  fn clamp(&mut self) {
    self.weight1 = self.weight1.clamp(0.0, 1.0);
    self.weight2 = self.weight2.clamp(0.0, 1.0);
  }
}

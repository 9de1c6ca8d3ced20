use std::time::Duration;

use super::punch::{
  NullTimer,
  PunchController,
  TickTimer,
};
use super::weights::{
  BlendWeights,
  Direction,
  Pose,
};

/// Which punch arm an event addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
  Left,
  Right,
}

impl Side {
  /// The pose weight this arm drives.
  pub fn pose(&self) -> Pose {
    match self {
      Side::Left => Pose::One,
      Side::Right => Pose::Two,
    }
  }
}

/// The animator composes the manually adjusted blend weights with the two
/// punch controllers. While an arm's punch cycle is active, that arm's
/// weight belongs to the controller: manual adjusts on it are rejected and
/// the effective weight follows the controller, overshoot included. The
/// other arm stays freely adjustable.
pub struct MorphAnimator {
  weights: BlendWeights,
  left: PunchController,
  right: PunchController,
}

/// The implementation of the animator.
impl MorphAnimator {
  /// Create an animator whose controllers hold no real timer. Hosts that
  /// poll `is_active` each frame use this.
  /// param period: The punch tick period.
  /// return: The animator.
  pub fn new(period: Duration) -> Self {
    Self::with_timers(period, Box::new(NullTimer), Box::new(NullTimer))
  }

  /// Create an animator with injected timer handles, one per arm.
  /// param period: The punch tick period.
  /// param left_timer: The left arm's timer handle.
  /// param right_timer: The right arm's timer handle.
  /// return: The animator.
  pub fn with_timers(period: Duration, left_timer: Box<dyn TickTimer>, right_timer: Box<dyn TickTimer>) -> Self {
    Self {
      weights: BlendWeights::new(),
      left: PunchController::new(period, left_timer),
      right: PunchController::new(period, right_timer),
    }
  }

  /// The effective weight of pose one.
  pub fn weight1(&self) -> f32 {
    if self.left.is_active() {
      self.left.weight()
    } else {
      self.weights.weight1()
    }
  }

  /// The effective weight of pose two.
  pub fn weight2(&self) -> f32 {
    if self.right.is_active() {
      self.right.weight()
    } else {
      self.weights.weight2()
    }
  }

  /// Manually nudge one pose weight.
  /// param pose: The pose whose weight moves.
  /// param direction: Up or Down.
  /// return: False when the weight is currently owned by an active punch.
  pub fn adjust(&mut self, pose: Pose, direction: Direction) -> bool {
    let owned = match pose {
      Pose::One => self.left.is_active(),
      Pose::Two => self.right.is_active(),
    };
    if owned {
      return false;
    }
    self.weights.adjust(pose, direction);
    true
  }

  /// Trigger a punch on one arm. Idempotent while that arm is active.
  /// param side: The arm to punch with.
  /// return: True when a new cycle started.
  pub fn punch(&mut self, side: Side) -> bool {
    let fired = self.controller_mut(side).trigger();
    if fired {
      // The cycle starts from the floor regardless of any manual value.
      self.weights.set(side.pose(), 0.0);
    }
    fired
  }

  /// Advance one arm's punch cycle by a tick.
  /// param side: The arm whose timer fired.
  pub fn tick(&mut self, side: Side) {
    self.controller_mut(side).tick();
  }

  pub fn is_punching(&self, side: Side) -> bool {
    self.controller(side).is_active()
  }

  pub fn controller(&self, side: Side) -> &PunchController {
    match side {
      Side::Left => &self.left,
      Side::Right => &self.right,
    }
  }

  fn controller_mut(&mut self, side: Side) -> &mut PunchController {
    match side {
      Side::Left => &mut self.left,
      Side::Right => &mut self.right,
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::animation::punch::DEFAULT_TICK_PERIOD;
  use super::*;

  #[test]
  fn test_punch_takes_ownership_of_its_weight() {
    let mut animator = MorphAnimator::new(DEFAULT_TICK_PERIOD);
    animator.adjust(Pose::One, Direction::Up);
    assert!((animator.weight1() - 0.1).abs() < 1e-6);

    assert!(animator.punch(Side::Left));
    assert_eq!(animator.weight1(), 0.0);
    assert!(!animator.adjust(Pose::One, Direction::Up));
    assert_eq!(animator.weight1(), 0.0);
  }

  #[test]
  fn test_other_arm_stays_adjustable_mid_punch() {
    let mut animator = MorphAnimator::new(DEFAULT_TICK_PERIOD);
    animator.punch(Side::Left);
    animator.tick(Side::Left);

    assert!(animator.adjust(Pose::Two, Direction::Up));
    assert!((animator.weight2() - 0.1).abs() < 1e-6);
  }

  #[test]
  fn test_effective_weight_follows_the_controller_overshoot() {
    let mut animator = MorphAnimator::new(DEFAULT_TICK_PERIOD);
    animator.punch(Side::Left);
    for _ in 0..6 {
      animator.tick(Side::Left);
    }
    assert!(animator.weight1() > 1.0);
  }

  #[test]
  fn test_completed_cycle_releases_the_weight_at_zero() {
    let mut animator = MorphAnimator::new(DEFAULT_TICK_PERIOD);
    animator.punch(Side::Left);
    let mut ticks = 0;
    while animator.is_punching(Side::Left) {
      animator.tick(Side::Left);
      ticks += 1;
      assert!(ticks < 20, "cycle failed to terminate");
    }

    assert_eq!(animator.weight1(), 0.0);
    assert!(animator.adjust(Pose::One, Direction::Up));
    assert!((animator.weight1() - 0.1).abs() < 1e-6);
  }

  #[test]
  fn test_both_arms_cycle_independently() {
    let mut animator = MorphAnimator::new(DEFAULT_TICK_PERIOD);
    animator.punch(Side::Left);
    animator.tick(Side::Left);
    animator.punch(Side::Right);

    assert!(animator.weight1() > 0.0);
    assert_eq!(animator.weight2(), 0.0);
    assert!(animator.is_punching(Side::Left));
    assert!(animator.is_punching(Side::Right));
  }
}

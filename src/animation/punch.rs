use std::time::Duration;

/// Weight added or removed by one punch tick.
pub const PUNCH_STEP: f32 = 0.2;
/// The rise flips into a fall only strictly above this. One full step past
/// full weight, so the punch holds its apex for one extra tick.
pub const RISE_LIMIT: f32 = 1.1;
/// The default period of the punch timers.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(4);

/// A periodic timer handle owned by one punch controller. Hosts wrap their
/// event loop's timer facility; the controller only ever starts it on
/// trigger and stops it when the cycle returns to the floor.
pub trait TickTimer {
  fn start(&mut self, period: Duration);
  fn stop(&mut self);
}

/// A handle for hosts that poll `is_active` instead of arming a timer.
#[derive(Debug, Default)]
pub struct NullTimer;

impl TickTimer for NullTimer {
  fn start(&mut self, _period: Duration) {}
  fn stop(&mut self) {}
}

/// The phase of one punch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchPhase {
  Idle,
  Rising,
  Falling,
}

/// A ping-pong controller driving one blend weight from the floor up past
/// full weight and back down, one fixed step per tick, self-terminating at
/// the floor. All transitions are total; the controller cannot fail.
pub struct PunchController {
  phase: PunchPhase,
  weight: f32,
  period: Duration,
  timer: Box<dyn TickTimer>,
}

/// The implementation of the punch controller.
impl PunchController {
  /// Create a new controller in the idle phase.
  /// param period: The tick period handed to the timer on trigger.
  /// param timer: The owned timer handle.
  /// return: The controller.
  pub fn new(period: Duration, timer: Box<dyn TickTimer>) -> Self {
    Self {
      phase: PunchPhase::Idle,
      weight: 0.0,
      period,
      timer,
    }
  }

  /// Start a punch cycle. Re-triggering a running cycle is a no-op.
  /// return: True when a new cycle started.
  pub fn trigger(&mut self) -> bool {
    if self.phase != PunchPhase::Idle {
      return false;
    }
    self.weight = 0.0;
    self.phase = PunchPhase::Rising;
    self.timer.start(self.period);
    true
  }

  /// Advance the cycle by one tick. Inert while idle.
  pub fn tick(&mut self) {
    match self.phase {
      PunchPhase::Idle => (),
      PunchPhase::Rising => {
        self.weight += PUNCH_STEP;
        if self.weight > RISE_LIMIT {
          self.phase = PunchPhase::Falling;
        }
      }
      PunchPhase::Falling => {
        self.weight -= PUNCH_STEP;
        if self.weight <= 0.0 {
          self.weight = 0.0;
          self.timer.stop();
          self.phase = PunchPhase::Idle;
        }
      }
    }
  }

  pub fn phase(&self) -> PunchPhase {
    self.phase
  }

  pub fn is_active(&self) -> bool {
    self.phase != PunchPhase::Idle
  }

  pub fn weight(&self) -> f32 {
    self.weight
  }
}

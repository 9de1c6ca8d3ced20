pub mod weights;
pub mod punch;
pub mod animator;

pub use weights::{
  BlendWeights,
  Direction,
  Pose,
};
pub use punch::{
  PunchController,
  PunchPhase,
  TickTimer,
};
pub use animator::{
  MorphAnimator,
  Side,
};

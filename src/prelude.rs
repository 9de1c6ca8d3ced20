pub use crate::error::MorphRendererError;
pub use crate::config::MorphConfig;
pub use crate::input::{
  Action,
  WindowCommand,
};
pub use crate::animation::{
  BlendWeights,
  Direction,
  MorphAnimator,
  Pose,
  PunchController,
  PunchPhase,
  Side,
  TickTimer,
};
pub use crate::scene::MorphVertex;
pub use crate::scene::cpu::MorphScene;
pub use crate::scene::gpu::MorphBuffer;
pub use crate::renderer::{
  MorphRenderer,
  UniformSink,
};

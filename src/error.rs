use std::path::PathBuf;

use thiserror::Error;

/// The error type of the morph-renderer crate.
#[derive(Error, Debug)]
pub enum MorphRendererError {
  /// The three poses disagree on one of the counts the morph buffer is
  /// indexed by. Fatal at load time, never retried.
  #[error("topology mismatch: {quantity} count {pose} of pose \"{name}\" differs from base count {base}")]
  TopologyMismatch {
    /// Which quantity disagrees ("vertex", "normal" or "face").
    quantity: &'static str,
    /// The name of the offending pose.
    name: String,
    /// The count in the base mesh.
    base: usize,
    /// The count in the offending pose.
    pose: usize,
  },

  /// Loading or decoding a pose asset failed.
  #[error("asset error: {message}")]
  Asset {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
  },

  /// The asset path has an extension no loader claims.
  #[error("unsupported asset \"{}\"", .0.display())]
  UnsupportedAsset(PathBuf),

  /// Parsing the settings file failed.
  #[error("config error: {0}")]
  Config(#[from] serde_json::Error),
}

/// The implementation of the error type of the morph-renderer crate.
impl MorphRendererError {
  /// Create a new asset error.
  /// param message: The message of the error.
  /// param source: The source of the error.
  /// return: The error.
  pub fn asset(message: &str, source: Option<Box<dyn std::error::Error + Send + Sync>>) -> Self {
    Self::Asset {
      message: message.to_string(),
      source,
    }
  }
}

/// Type alias for Results from morph-renderer operations.
pub type Result<T> = std::result::Result<T, MorphRendererError>;

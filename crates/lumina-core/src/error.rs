/// Result alias carrying the engine error type.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced while assembling the engine. Runtime paths are
/// infallible; only construction-time parameter validation can fail.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid engine configuration: {0}")]
    Config(String),
}

impl EngineError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }
}

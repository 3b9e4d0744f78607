use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("column count must be at least 1")]
    ZeroColumns,
    #[error("margin must be a finite, non-negative number (got {0})")]
    InvalidMargin(f64),
    #[error("{count} tiles requested, at most {max} are supported")]
    TooManyTiles { count: usize, max: usize },
    #[error("artboard name must not be empty")]
    EmptyArtboard,
    #[error("invalid value {value:?} for `{key}`")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("cannot lay out a grid with zero columns")]
    ZeroColumns,
}

/// Failures reported by the animation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{kind} `{name}` not found")]
    NotFound { kind: &'static str, name: String },
    #[error("failed to decode animation file: {0}")]
    Decode(String),
    #[error("engine call failed: {0}")]
    Js(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("renderer not acquired yet; resize the grid before ticking")]
    RendererUnavailable,
}

/// Convenience result type used across the crate.
pub type ChoroResult<T> = Result<T, ChoroError>;

#[derive(thiserror::Error, Debug)]
/// Top-level crate error type.
pub enum ChoroError {
    /// A color string is not six hex digits (optionally prefixed by `#`).
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    /// A region code has no entry in the dataset's geo dimension.
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// A year has no entry in the dataset's time dimension.
    #[error("unknown year: {0}")]
    UnknownYear(i32),

    /// The dataset has a `null` cell for this region and year.
    #[error("no value for region {region} in {year}")]
    MissingValue {
        /// Region code as passed to the lookup.
        region: String,
        /// Requested year.
        year: i32,
    },

    /// A min/max scan was asked for over nothing.
    #[error("empty series: {0}")]
    EmptySeries(&'static str),

    /// A time-dimension key does not parse as an integer year.
    #[error("malformed year: {0:?}")]
    MalformedYear(String),

    /// The anchor year lies after the target year.
    #[error("invalid range: anchor year {anchor} is after target year {target}")]
    InvalidRange {
        /// Requested first year.
        anchor: i32,
        /// Requested last year.
        target: i32,
    },

    /// A value cannot be mapped through the configured value scale.
    #[error("invalid value: {0}")]
    InvalidValue(f64),

    /// `start` was called while playback is already running.
    #[error("playback is already running")]
    AlreadyRunning,

    /// A command that needs an idle engine was issued while running.
    #[error("playback is active; stop it before reconfiguring")]
    PlaybackActive,

    /// Structural validation failure (dataset shape, options, arguments).
    #[error("validation error: {0}")]
    Validation(String),

    /// Host-side failure, typically raised by a rendering surface.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChoroError {
    /// Build a [`ChoroError::InvalidColorFormat`] error.
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColorFormat(msg.into())
    }

    /// Build a [`ChoroError::UnknownRegion`] error.
    pub fn unknown_region(code: impl Into<String>) -> Self {
        Self::UnknownRegion(code.into())
    }

    /// Build a [`ChoroError::Validation`] error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

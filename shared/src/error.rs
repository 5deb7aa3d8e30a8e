use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArenaError {
    #[error("Unknown artwork {0}. Must be 1 or 2")]
    UnknownArtwork(u8),
    #[error("Round duration must be at least one tick")]
    ZeroRoundDuration,
    #[error("Clock tick must be positive and no longer than the round")]
    InvalidTick,
    #[error("Invalid feed bounds: {min_ms}ms..{max_ms}ms")]
    InvalidFeedBounds { min_ms: i64, max_ms: i64 },
    #[error("Voter log capacity must be at least 1")]
    ZeroLogCapacity,
}

pub type Result<T> = std::result::Result<T, ArenaError>;

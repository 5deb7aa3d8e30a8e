use time::Duration;
use crate::error::{ArenaError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaConfig {
    pub round_duration: Duration,
    pub tick: Duration,
    pub feed_min: Duration,
    pub feed_max: Duration,
    pub vote_delay: Duration,
    pub log_capacity: usize,
}

impl ArenaConfig {
    pub const STANDARD: ArenaConfig = ArenaConfig {
        round_duration: Duration::hours(1),
        tick: Duration::seconds(1),
        feed_min: Duration::seconds(2),
        feed_max: Duration::seconds(5),
        vote_delay: Duration::milliseconds(500),
        log_capacity: 10,
    };

    pub fn validate(&self) -> Result<()> {
        if !self.round_duration.is_positive() {
            return Err(ArenaError::ZeroRoundDuration);
        }
        if !self.tick.is_positive() || self.tick > self.round_duration {
            return Err(ArenaError::InvalidTick);
        }
        if !self.feed_min.is_positive() || self.feed_min > self.feed_max {
            return Err(ArenaError::InvalidFeedBounds {
                min_ms: self.feed_min.whole_milliseconds() as i64,
                max_ms: self.feed_max.whole_milliseconds() as i64,
            });
        }
        if self.log_capacity == 0 {
            return Err(ArenaError::ZeroLogCapacity);
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

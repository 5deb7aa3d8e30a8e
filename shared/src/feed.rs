use time::{Duration, OffsetDateTime};
use crate::{
    arena::ArenaAction,
    artwork::ArtworkId,
    config::ArenaConfig,
    origin::REGIONS,
    random::RandomSource,
};

/// Fabricates the background votes of other visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedFeed {
    min_ms: u64,
    max_ms: u64,
}

impl SimulatedFeed {
    pub fn new(config: &ArenaConfig) -> Self {
        let min_ms = config.feed_min.whole_milliseconds().max(0) as u64;
        let max_ms = config.feed_max.whole_milliseconds().max(0) as u64;
        Self { min_ms, max_ms: max_ms.max(min_ms) }
    }

    pub fn next_delay(&self, rng: &mut dyn RandomSource) -> Duration {
        Duration::milliseconds(rng.between(self.min_ms, self.max_ms) as i64)
    }

    pub fn next_vote(&self, rng: &mut dyn RandomSource, at: OffsetDateTime) -> ArenaAction {
        let artwork = ArtworkId::ALL[rng.index(ArtworkId::ALL.len())];
        let region = REGIONS[rng.index(REGIONS.len())];
        ArenaAction::ExternalVote { artwork, region, at }
    }
}

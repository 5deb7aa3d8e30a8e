pub mod error;
pub mod artwork;
pub mod origin;
pub mod tally;
pub mod voter_log;
pub mod config;
pub mod random;
pub mod feed;
pub mod arena;
pub mod display;
pub mod timers;

pub use error::{ArenaError, Result};
pub use artwork::{artwork, Artwork, ArtworkId, ARTWORKS};
pub use origin::{Region, VoterOrigin, LOCAL_REGION, REGIONS};
pub use tally::VoteTally;
pub use voter_log::{VoterEvent, VoterLog};
pub use config::ArenaConfig;
pub use random::{RandomSource, RngSource};
pub use feed::SimulatedFeed;
pub use arena::{Arena, ArenaAction, Round, RoundSummary, Transition};
pub use display::{format_countdown, format_round_duration, format_share, Standings, VoteButtonState};
pub use timers::{ArenaTimers, Dispatch, Scheduler, SharedRandom};

#[cfg(test)]
mod tests;

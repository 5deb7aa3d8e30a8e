use time::{Duration, OffsetDateTime};
use tracing::{debug, info, trace};
use crate::{
    artwork::ArtworkId,
    config::ArenaConfig,
    display::VoteButtonState,
    origin::{Region, VoterOrigin},
    tally::VoteTally,
    voter_log::{VoterEvent, VoterLog},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub number: u32,
    pub started_at: OffsetDateTime,
    pub duration: Duration,
    pub remaining: Duration,
}

impl Round {
    fn first(config: &ArenaConfig, at: OffsetDateTime) -> Self {
        Self {
            number: 1,
            started_at: at,
            duration: config.round_duration,
            remaining: config.round_duration,
        }
    }

    fn next(&self, at: OffsetDateTime) -> Self {
        Self {
            number: self.number.saturating_add(1),
            started_at: at,
            duration: self.duration,
            remaining: self.duration,
        }
    }
}

/// What a round looked like when it closed. Logged, never kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub number: u32,
    pub tally: VoteTally,
    pub user_vote: Option<ArtworkId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaAction {
    Tick { at: OffsetDateTime },
    ResetRound { at: OffsetDateTime },
    ExternalVote { artwork: ArtworkId, region: Region, at: OffsetDateTime },
    BeginVote { artwork: ArtworkId },
    CompleteVote { at: OffsetDateTime },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Ticked,
    RoundReset(RoundSummary),
    ExternalVoteRecorded,
    VoteSubmitted,
    UserVoteRecorded,
    Ignored,
}

/// All live state of the arena. Every change goes through [`Arena::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    config: ArenaConfig,
    round: Round,
    tally: VoteTally,
    user_vote: Option<ArtworkId>,
    pending_vote: Option<ArtworkId>,
    log: VoterLog,
}

impl Arena {
    pub fn new(config: ArenaConfig, at: OffsetDateTime) -> Self {
        Self {
            round: Round::first(&config, at),
            tally: VoteTally::default(),
            user_vote: None,
            pending_vote: None,
            log: VoterLog::new(config.log_capacity),
            config,
        }
    }

    pub fn apply(&mut self, action: ArenaAction) -> Transition {
        match action {
            ArenaAction::Tick { at } => self.tick(at),
            ArenaAction::ResetRound { at } => self.reset_round(at),
            ArenaAction::ExternalVote { artwork, region, at } => {
                self.record(VoterOrigin::Remote(region), artwork, at);
                debug!(round = self.round.number, artwork = %artwork, region = region.code, "external vote");
                Transition::ExternalVoteRecorded
            }
            ArenaAction::BeginVote { artwork } => self.begin_vote(artwork),
            ArenaAction::CompleteVote { at } => self.complete_vote(at),
        }
    }

    fn tick(&mut self, at: OffsetDateTime) -> Transition {
        let remaining = self.round.remaining - self.config.tick;
        if remaining.is_positive() {
            self.round.remaining = remaining;
            Transition::Ticked
        } else {
            self.reset_round(at)
        }
    }

    fn reset_round(&mut self, at: OffsetDateTime) -> Transition {
        let summary = RoundSummary {
            number: self.round.number,
            tally: self.tally,
            user_vote: self.user_vote,
        };
        self.tally.reset();
        self.user_vote = None;
        self.log.clear();
        self.round = self.round.next(at);
        info!(
            closed = summary.number,
            first = summary.tally.get(ArtworkId::One),
            second = summary.tally.get(ArtworkId::Two),
            "🔄 Round {} started",
            self.round.number
        );
        Transition::RoundReset(summary)
    }

    fn begin_vote(&mut self, artwork: ArtworkId) -> Transition {
        if !self.can_vote() {
            trace!(artwork = %artwork, voted = ?self.user_vote, pending = ?self.pending_vote, "vote ignored");
            return Transition::Ignored;
        }
        self.pending_vote = Some(artwork);
        debug!(artwork = %artwork, "vote submitted");
        Transition::VoteSubmitted
    }

    // A submission still in flight when the round rolls over lands in the new round.
    fn complete_vote(&mut self, at: OffsetDateTime) -> Transition {
        let Some(artwork) = self.pending_vote.take() else {
            trace!("no vote in flight");
            return Transition::Ignored;
        };
        self.user_vote = Some(artwork);
        self.record(VoterOrigin::Local, artwork, at);
        debug!(round = self.round.number, artwork = %artwork, "user vote recorded");
        Transition::UserVoteRecorded
    }

    fn record(&mut self, origin: VoterOrigin, artwork: ArtworkId, at: OffsetDateTime) {
        self.tally.increment(artwork);
        self.log.record(VoterEvent { origin, artwork, at });
    }

    pub fn can_vote(&self) -> bool {
        self.user_vote.is_none() && self.pending_vote.is_none()
    }

    pub fn is_submitting(&self) -> bool { self.pending_vote.is_some() }

    pub fn has_voted(&self) -> bool { self.user_vote.is_some() }

    pub fn button_state(&self, id: ArtworkId) -> VoteButtonState {
        match (self.pending_vote, self.user_vote) {
            (Some(_), _) => VoteButtonState::Submitting,
            (None, Some(voted)) if voted == id => VoteButtonState::Voted,
            (None, Some(_)) => VoteButtonState::Closed,
            (None, None) => VoteButtonState::Open,
        }
    }

    pub fn config(&self) -> &ArenaConfig { &self.config }

    pub fn round(&self) -> &Round { &self.round }

    pub fn tally(&self) -> &VoteTally { &self.tally }

    pub fn user_vote(&self) -> Option<ArtworkId> { self.user_vote }

    pub fn pending_vote(&self) -> Option<ArtworkId> { self.pending_vote }

    pub fn log(&self) -> &VoterLog { &self.log }
}

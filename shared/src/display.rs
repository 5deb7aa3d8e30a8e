use time::Duration;
use crate::{artwork::ArtworkId, tally::VoteTally};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standings {
    pub total: u64,
    pub first_share: f64,
    pub second_share: f64,
    pub leader: Option<ArtworkId>,
}

impl Standings {
    pub fn from_tally(tally: &VoteTally) -> Self {
        let total = tally.total();
        let share = |id| {
            if total == 0 {
                50.0
            } else {
                f64::from(tally.get(id)) / total as f64 * 100.0
            }
        };
        let (first, second) = (tally.get(ArtworkId::One), tally.get(ArtworkId::Two));
        let leader = match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(ArtworkId::One),
            std::cmp::Ordering::Less => Some(ArtworkId::Two),
            std::cmp::Ordering::Equal => None,
        };

        Self {
            total,
            first_share: share(ArtworkId::One),
            second_share: share(ArtworkId::Two),
            leader,
        }
    }

    pub fn share(&self, id: ArtworkId) -> f64 {
        match id {
            ArtworkId::One => self.first_share,
            ArtworkId::Two => self.second_share,
        }
    }

    pub fn is_leading(&self, id: ArtworkId) -> bool {
        self.leader == Some(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteButtonState {
    Open,
    Submitting,
    Voted,
    Closed,
}

impl VoteButtonState {
    pub const fn label(self) -> &'static str {
        match self {
            VoteButtonState::Open => "Vote for this artwork",
            VoteButtonState::Submitting => "Voting...",
            VoteButtonState::Voted => "Voted!",
            VoteButtonState::Closed => "Vote Cast",
        }
    }

    pub const fn is_disabled(self) -> bool {
        !matches!(self, VoteButtonState::Open)
    }
}

pub fn format_countdown(remaining: Duration) -> String {
    let seconds = remaining.whole_seconds().max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn format_share(share: f64) -> String {
    format!("{:.1}", share)
}

pub fn format_round_duration(d: Duration) -> String {
    let plural = |n: i64, unit: &str| {
        if n == 1 { format!("1 {}", unit) } else { format!("{} {}s", n, unit) }
    };
    if d.whole_hours() > 0 && d.whole_minutes() % 60 == 0 {
        plural(d.whole_hours(), "Hour")
    } else if d.whole_minutes() > 0 {
        plural(d.whole_minutes(), "Minute")
    } else {
        plural(d.whole_seconds(), "Second")
    }
}

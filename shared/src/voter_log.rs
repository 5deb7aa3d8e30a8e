use std::collections::VecDeque;
use time::OffsetDateTime;
use crate::{artwork::ArtworkId, origin::VoterOrigin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoterEvent {
    pub origin: VoterOrigin,
    pub artwork: ArtworkId,
    pub at: OffsetDateTime,
}

/// Newest-first list of recent votes, bounded to `capacity` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoterLog {
    events: VecDeque<VoterEvent>,
    capacity: usize,
}

impl VoterLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, event: VoterEvent) {
        self.events.push_front(event);
        self.events.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn latest(&self) -> Option<&VoterEvent> {
        self.events.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VoterEvent> + '_ {
        self.events.iter()
    }

    pub fn len(&self) -> usize { self.events.len() }

    pub fn is_empty(&self) -> bool { self.events.is_empty() }
}

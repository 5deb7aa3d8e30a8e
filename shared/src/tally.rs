use serde::{Serialize, Deserialize};
use crate::artwork::ArtworkId;

/// Per-round vote counts. Both artworks always have an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    first: u32,
    second: u32,
}

impl VoteTally {
    pub const fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    pub const fn get(&self, id: ArtworkId) -> u32 {
        match id {
            ArtworkId::One => self.first,
            ArtworkId::Two => self.second,
        }
    }

    pub fn increment(&mut self, id: ArtworkId) {
        let count = match id {
            ArtworkId::One => &mut self.first,
            ArtworkId::Two => &mut self.second,
        };
        *count = count.saturating_add(1);
    }

    pub const fn total(&self) -> u64 {
        self.first as u64 + self.second as u64
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::error::ArenaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ArtworkId { One = 1, Two = 2 }

impl ArtworkId {
    pub const ALL: [ArtworkId; 2] = [ArtworkId::One, ArtworkId::Two];

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn other(self) -> Self {
        match self {
            ArtworkId::One => ArtworkId::Two,
            ArtworkId::Two => ArtworkId::One,
        }
    }
}

impl TryFrom<u8> for ArtworkId {
    type Error = ArenaError;

    fn try_from(v: u8) -> Result<Self, ArenaError> {
        match v {
            1 => Ok(ArtworkId::One),
            2 => Ok(ArtworkId::Two),
            n => Err(ArenaError::UnknownArtwork(n)),
        }
    }
}

impl From<ArtworkId> for u8 {
    fn from(id: ArtworkId) -> u8 {
        id.number()
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const ARTWORKS: [Artwork; 2] = [
    Artwork {
        id: ArtworkId::One,
        title: "The Data Wars - AI vs Privacy",
        image: "assets/artwork_1_data_wars.png",
        description: "The Data Wars represents the defining conflict of our digital age - the struggle between AI \
            advancement and human privacy. Inspired by the recent Reddit vs Anthropic lawsuit, this piece visualizes \
            how our personal data has become the new oil, extracted and refined by AI corporations to fuel their \
            technological empires. The towering digital fortress symbolizes the seemingly impenetrable power of these \
            tech giants, while the human figures below represent all of us - users whose digital lives are harvested, \
            analyzed, and monetized often without our full understanding or consent. The flickering scales of justice \
            remind us that the legal frameworks governing this new reality are still being written, and the outcome \
            will determine whether we live in a world where privacy is a luxury or a fundamental right. This artwork \
            challenges viewers to consider: In our rush toward an AI-powered future, what are we willing to sacrifice, \
            and who gets to decide?",
    },
    Artwork {
        id: ArtworkId::Two,
        title: "The Fracture of Power - When Titans Clash",
        image: "assets/artwork_2_titans_clash.png",
        description: "The Fracture of Power emerges from the recent public feud between two of the most influential \
            figures of our time, representing a broader conflict between technological disruption and traditional \
            authority. This piece visualizes the moment when the marriage of convenience between tech innovation and \
            political power finally breaks down, revealing the fundamental tensions that have always existed beneath \
            the surface. The two titans represent not just individuals, but entire ecosystems of power - one built on \
            innovation, disruption, and digital influence, the other on tradition, regulation, and institutional \
            authority. The fractured landscape between them shows how their conflict doesn't just affect them, but \
            tears through the fabric of society itself, disrupting markets, breaking communication channels, and \
            forcing everyone to choose sides. The falling stock charts and exploding social media notifications remind \
            us that in our interconnected world, when titans clash, the shockwaves reach every corner of our digital \
            and economic lives. This artwork asks: Can these two forms of power coexist, or are we witnessing the \
            beginning of a new kind of civil war fought not with weapons, but with tweets, regulations, and market \
            manipulation?",
    },
];

pub fn artwork(id: ArtworkId) -> &'static Artwork {
    match id {
        ArtworkId::One => &ARTWORKS[0],
        ArtworkId::Two => &ARTWORKS[1],
    }
}

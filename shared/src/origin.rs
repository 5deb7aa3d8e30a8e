#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub flag: &'static str,
}

pub const REGIONS: [Region; 15] = [
    Region { code: "US", flag: "🇺🇸" },
    Region { code: "GB", flag: "🇬🇧" },
    Region { code: "DE", flag: "🇩🇪" },
    Region { code: "FR", flag: "🇫🇷" },
    Region { code: "JP", flag: "🇯🇵" },
    Region { code: "CA", flag: "🇨🇦" },
    Region { code: "AU", flag: "🇦🇺" },
    Region { code: "BR", flag: "🇧🇷" },
    Region { code: "IN", flag: "🇮🇳" },
    Region { code: "KR", flag: "🇰🇷" },
    Region { code: "NL", flag: "🇳🇱" },
    Region { code: "SE", flag: "🇸🇪" },
    Region { code: "CH", flag: "🇨🇭" },
    Region { code: "SG", flag: "🇸🇬" },
    Region { code: "IL", flag: "🇮🇱" },
];

/// The page has no idea where its user is, so local votes are shown under the US flag.
pub const LOCAL_REGION: Region = REGIONS[0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoterOrigin {
    Local,
    Remote(Region),
}

impl VoterOrigin {
    pub const fn region(self) -> Region {
        match self {
            VoterOrigin::Local => LOCAL_REGION,
            VoterOrigin::Remote(region) => region,
        }
    }

    pub const fn flag(self) -> &'static str {
        self.region().flag
    }

    pub const fn is_local(self) -> bool {
        matches!(self, VoterOrigin::Local)
    }
}

use shared::ArenaConfig;

pub struct Config {
    pub arena: ArenaConfig,
    pub analytics_script: Option<&'static str>,
    pub log_level: log::Level,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            arena: ArenaConfig::STANDARD,
            analytics_script: Some("/_vercel/insights/script.js"),
            log_level: log::Level::Info,
        }
    }
}

pub const CONFIG: Config = Config::new();

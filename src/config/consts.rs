// src/config/consts.rs

// Net config
pub const WIKI_HOST: &str = "https://en.wikipedia.org";
pub const USER_AGENT: &str = concat!("goal500/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Scrape
pub const WORKERS: usize = 1; // sequential unless asked otherwise
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite

// Files
pub const DEFAULT_STATS_FILE: &str = "player_stats.csv";
pub const DEFAULT_CHART_FILE: &str = "cumulative_goals.png";
pub const DEFAULT_ANIMATION_FILE: &str = "cumulative_goals.gif";

// Chart
pub const DEFAULT_TITLE: &str = "Cumulative goals";
pub const DEFAULT_SUBTITLE: &str = "Active players with most goals";
pub const SOURCE_NOTE: &str = "Source: Wikipedia";
pub const CHART_WIDTH: u32 = 1200;
pub const CHART_HEIGHT: u32 = 800;
pub const Y_HEADROOM: f64 = 1.1;

// Animation
pub const DEFAULT_FPS: u32 = 2;
pub const DEFAULT_HOLD_SECS: u32 = 5;
pub const GIF_SPEED: i32 = 10; // 1 best quality .. 30 fastest

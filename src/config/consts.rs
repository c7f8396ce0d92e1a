// src/config/consts.rs

// Net config
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) leaderboard_scrape/0.1";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

// Extraction
pub const MIN_MODEL_CHARS: usize = 1; // model must be longer than this
pub const MAX_MODEL_CHARS: usize = 60;
pub const MIN_SCORE_CHARS: usize = 3;
pub const UNKNOWN_MODEL: &str = "unknown";

// Output
pub const DEFAULT_OUT_DIR: &str = "output";
pub const DEFAULT_JSON_NAME: &str = "latest_data.json";
pub const DEFAULT_HTML_NAME: &str = "ai_leaderboard_comparison.html";
pub const NA_GLYPH: &str = "—";

// Environment toggles
pub const ENV_OUT_DIR: &str = "LEADERBOARD_OUT_DIR";
pub const ENV_JSON_NAME: &str = "LEADERBOARD_JSON_NAME";
pub const ENV_HTML_NAME: &str = "LEADERBOARD_HTML_NAME";
pub const ENV_TIMEOUT_SECS: &str = "LEADERBOARD_TIMEOUT_SECS";
pub const ENV_OFFLINE: &str = "LEADERBOARD_OFFLINE";

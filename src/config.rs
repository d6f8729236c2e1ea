// Build-time settings. Set ACTIVITY_BOARD_API_BASE when running `trunk build`
// to point the board at a backend on another origin, e.g.
//   ACTIVITY_BOARD_API_BASE=http://127.0.0.1:8000 trunk serve
pub const API_BASE: &str = match option_env!("ACTIVITY_BOARD_API_BASE") {
    Some(base) => base,
    None => "",
};

/// How long a status message stays up before it is hidden.
pub const MESSAGE_TTL_MS: u32 = 5_000;

/// Joins `path` (which must start with '/') onto the configured base.
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE.trim_end_matches('/'), path)
}

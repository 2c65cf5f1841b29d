use log::Level;

pub const CHAT_MODEL: &str = "gemini-2.0-flash";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn get_chat_api_url() -> &'static str {
    "https://generativelanguage.googleapis.com/v1beta"
}

/// Baked in at build time, e.g. `INJURYSHIELD_CHAT_API_KEY=... trunk build`.
pub fn get_chat_api_key() -> Option<&'static str> {
    option_env!("INJURYSHIELD_CHAT_API_KEY").filter(|key| !key.is_empty())
}

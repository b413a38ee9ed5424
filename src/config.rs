use std::time::Duration;

use crate::cdn::DEFAULT_CDN_BASE;

pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";
pub const DEFAULT_PORT: u16 = 39100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Name of the environment variable holding the bot token.
pub const BOT_TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bot_token: Option<String>,
    pub api_base: String,
    pub cdn_base: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bot_token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            cdn_base: DEFAULT_CDN_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout_secs = std::env::var("DISCORD_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            bot_token: std::env::var(BOT_TOKEN_VAR)
                .ok()
                .filter(|t| !t.trim().is_empty()),
            api_base: std::env::var("DISCORD_API_BASE").unwrap_or(defaults.api_base),
            cdn_base: std::env::var("DISCORD_CDN_BASE").unwrap_or(defaults.cdn_base),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn with_bot_token(mut self, token: impl Into<String>) -> Self {
        self.bot_token = Some(token.into());
        self
    }
}

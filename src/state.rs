use crate::config::Config;
use crate::discord::DiscordClient;
use crate::error::LookupError;

#[derive(Clone)]
pub struct AppState {
    pub discord: DiscordClient,
    pub cdn_base: String,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        Ok(Self {
            discord: DiscordClient::new(config)?,
            cdn_base: config.cdn_base.clone(),
        })
    }
}

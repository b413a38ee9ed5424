use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Response, StatusCode, Url};
use tracing::{debug, warn};

use crate::config::{Config, BOT_TOKEN_VAR};
use crate::error::LookupError;
use crate::models::profile::RawProfile;
use crate::models::user::{ApiUser, RawUser};

/// Authenticated client for the two user endpoints of the Discord REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct DiscordClient {
    client: Client,
    api_base: Url,
    bot_token: Option<String>,
}

impl DiscordClient {
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let api_base = Url::parse(&config.api_base)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| LookupError::InvalidApiBase(config.api_base.clone()))?;

        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            api_base,
            bot_token: config.bot_token.clone(),
        })
    }

    fn auth_header(&self) -> Result<String, LookupError> {
        self.bot_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bot {t}"))
            .ok_or(LookupError::MissingCredential {
                name: BOT_TOKEN_VAR,
            })
    }

    /// `<base>/users/<id>[/profile]`, with the id percent-encoded as one segment.
    fn user_url(&self, user_id: &str, profile: bool) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(user_id);
            if profile {
                segments.push("profile");
            }
        }
        url
    }

    async fn get(&self, auth: String, url: Url) -> Result<Response, reqwest::Error> {
        debug!("GET {url}");
        self.client
            .get(url)
            .header(AUTHORIZATION, auth)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
    }

    /// Fetch the primary user record. Any non-success status is an error.
    pub async fn fetch_user(&self, user_id: &str) -> Result<RawUser, LookupError> {
        let auth = self.auth_header()?;
        let resp = self.get(auth, self.user_url(user_id, false)).await?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(rate_limited(&resp));
        }
        if !status.is_success() {
            let status = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LookupError::RemoteRequestFailed { status, body });
        }

        let user: ApiUser = resp.json().await?;
        Ok(user.into())
    }

    /// Fetch the extended profile.
    ///
    /// Only a missing token and rate limiting are errors. The endpoint is
    /// forbidden for most bot tokens, and every other failure also degrades to
    /// an empty profile.
    pub async fn fetch_user_profile(&self, user_id: &str) -> Result<RawProfile, LookupError> {
        let auth = self.auth_header()?;
        let resp = match self.get(auth, self.user_url(user_id, true)).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("profile request for {user_id} failed: {e}");
                return Ok(RawProfile::empty());
            }
        };

        let status = resp.status();
        if status == StatusCode::FORBIDDEN {
            debug!("profile for {user_id} is not accessible with this token");
            return Ok(RawProfile::empty());
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(rate_limited(&resp));
        }
        if !status.is_success() {
            warn!("profile request for {user_id} returned {status}, continuing without it");
            return Ok(RawProfile::empty());
        }

        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("failed to read profile body for {user_id}: {e}");
                return Ok(RawProfile::empty());
            }
        };
        match serde_json::from_str(&body) {
            Ok(json) => Ok(RawProfile::from_json(&json)),
            Err(e) => {
                warn!("unparseable profile body for {user_id}: {e}");
                Ok(RawProfile::empty())
            }
        }
    }
}

fn rate_limited(resp: &Response) -> LookupError {
    let retry_after = resp
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    warn!(
        "rate limited by Discord, retry after {}",
        retry_after.as_deref().unwrap_or("unknown")
    );
    LookupError::RateLimited { retry_after }
}

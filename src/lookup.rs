use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::discord::DiscordClient;
use crate::error::LookupError;
use crate::models::profile::ProfileView;

/// Outcome handed to the presentation layer: either the full view or a
/// message to show verbatim. Serializes as `{"ok": true, "data": ...}` or
/// `{"ok": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireResult", try_from = "WireResult")]
pub enum LookupResult {
    Success(ProfileView),
    Failure(String),
}

#[derive(Serialize, Deserialize)]
struct WireResult {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ProfileView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<LookupResult> for WireResult {
    fn from(result: LookupResult) -> Self {
        match result {
            LookupResult::Success(data) => WireResult {
                ok: true,
                data: Some(data),
                error: None,
            },
            LookupResult::Failure(error) => WireResult {
                ok: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<WireResult> for LookupResult {
    type Error = String;

    fn try_from(wire: WireResult) -> Result<Self, Self::Error> {
        match (wire.ok, wire.data, wire.error) {
            (true, Some(data), _) => Ok(LookupResult::Success(data)),
            (false, _, Some(error)) => Ok(LookupResult::Failure(error)),
            (ok, _, _) => Err(format!("lookup result with ok={ok} is missing its payload")),
        }
    }
}

impl LookupResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, LookupResult::Success(_))
    }

    pub fn data(&self) -> Option<&ProfileView> {
        match self {
            LookupResult::Success(data) => Some(data),
            LookupResult::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LookupResult::Success(_) => None,
            LookupResult::Failure(error) => Some(error),
        }
    }
}

impl From<Result<ProfileView, LookupError>> for LookupResult {
    fn from(result: Result<ProfileView, LookupError>) -> Self {
        match result {
            Ok(data) => LookupResult::Success(data),
            Err(e) => LookupResult::Failure(e.to_string()),
        }
    }
}

/// Resolve a raw user id into a merged profile view.
///
/// The primary record is fetched first so that a failure there never costs a
/// second request. The profile fetch only fails the lookup when rate limited.
pub async fn lookup_user(
    client: &DiscordClient,
    cdn_base: &str,
    raw_input: &str,
) -> Result<ProfileView, LookupError> {
    let user_id = raw_input.trim();
    if user_id.is_empty() {
        return Err(LookupError::InvalidInput);
    }

    let user = client.fetch_user(user_id).await?;
    let profile = client.fetch_user_profile(user_id).await?;
    debug!("fetched user {user_id} (profile bio: {})", profile.bio.is_some());

    Ok(ProfileView::merge(&user, &profile, cdn_base))
}

/// Boundary form of [`lookup_user`]: every failure is flattened into its message.
pub async fn lookup(client: &DiscordClient, cdn_base: &str, raw_input: &str) -> LookupResult {
    lookup_user(client, cdn_base, raw_input).await.into()
}

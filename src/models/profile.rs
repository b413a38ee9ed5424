use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::non_empty;
use super::user::RawUser;
use crate::cdn;

const BIO_PATHS: &[&str] = &["/user_profile/bio", "/bio"];
const BANNER_PATHS: &[&str] = &["/user/banner", "/banner"];

/// Extended profile data. Both fields are best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProfile {
    pub bio: Option<String>,
    pub banner: Option<String>,
}

impl RawProfile {
    /// A profile with no additional data, used when the endpoint is unavailable.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read bio and banner from a `/users/{id}/profile` body. The endpoint is
    /// undocumented and has moved fields around, so each one is looked up at
    /// the current location first and the legacy location second.
    pub fn from_json(body: &Value) -> Self {
        Self {
            bio: first_string(body, BIO_PATHS),
            banner: first_string(body, BANNER_PATHS),
        }
    }
}

fn first_string(body: &Value, paths: &[&str]) -> Option<String> {
    paths.iter().find_map(|path| {
        non_empty(
            body.pointer(path)
                .and_then(Value::as_str)
                .map(str::to_string),
        )
    })
}

/// The merged, caller-facing view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub bio: Option<String>,
    pub decoration_url: Option<String>,
}

impl ProfileView {
    /// Combine both records without touching either of them.
    ///
    /// The profile's bio wins over the user's; the user's banner wins over the
    /// profile's.
    pub fn merge(user: &RawUser, profile: &RawProfile, cdn_base: &str) -> Self {
        let bio = profile.bio.as_ref().or(user.bio.as_ref()).cloned();
        let banner = user.banner.as_deref().or(profile.banner.as_deref());

        Self {
            id: user.id.clone(),
            username: user.display_username(),
            display_name: user.display_name.clone(),
            avatar_url: cdn::avatar_url(cdn_base, &user.id, user.avatar.as_deref()),
            banner_url: cdn::banner_url(cdn_base, &user.id, banner),
            bio,
            decoration_url: cdn::avatar_decoration_url(user.avatar_decoration.as_deref()),
        }
    }
}

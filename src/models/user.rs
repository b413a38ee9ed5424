use serde::{Deserialize, Serialize};

use super::non_empty;

/// User object as returned by `GET /users/{id}`.
#[derive(Debug, Deserialize)]
pub struct ApiUser {
    pub id: String,
    pub username: String,
    pub global_name: Option<String>,
    pub discriminator: Option<String>,
    pub avatar: Option<String>,
    pub banner: Option<String>,
    pub bio: Option<String>,
    pub avatar_decoration_data: Option<AvatarDecorationData>,
}

#[derive(Debug, Deserialize)]
pub struct AvatarDecorationData {
    pub asset: Option<String>,
}

/// Primary user record. Absent or empty remote fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUser {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub discriminator: Option<String>,
    pub avatar: Option<String>,
    pub banner: Option<String>,
    pub bio: Option<String>,
    pub avatar_decoration: Option<String>,
}

impl From<ApiUser> for RawUser {
    fn from(user: ApiUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            display_name: non_empty(user.global_name),
            discriminator: non_empty(user.discriminator),
            avatar: non_empty(user.avatar),
            banner: non_empty(user.banner),
            bio: non_empty(user.bio),
            avatar_decoration: non_empty(user.avatar_decoration_data.and_then(|d| d.asset)),
        }
    }
}

impl RawUser {
    /// `name#1234` for legacy accounts, plain `name` once the discriminator is `"0"` or gone.
    pub fn display_username(&self) -> String {
        match self.discriminator.as_deref() {
            Some(tag) if tag != "0" => format!("{}#{tag}", self.username),
            _ => self.username.clone(),
        }
    }
}

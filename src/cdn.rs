/// Public CDN serving user avatars and banners.
pub const DEFAULT_CDN_BASE: &str = "https://cdn.discordapp.com";

/// Hashes starting with this marker refer to animated assets.
pub const ANIMATED_PREFIX: &str = "a_";

pub const AVATAR_SIZE: u32 = 512;
pub const BANNER_SIZE: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Avatar,
    Banner,
}

impl AssetKind {
    /// CDN path segment for this kind of asset.
    pub fn path(self) -> &'static str {
        match self {
            AssetKind::Avatar => "avatars",
            AssetKind::Banner => "banners",
        }
    }

    pub fn default_size(self) -> u32 {
        match self {
            AssetKind::Avatar => AVATAR_SIZE,
            AssetKind::Banner => BANNER_SIZE,
        }
    }
}

/// `gif` for animated hashes, `png` for everything else.
pub fn image_extension(hash: &str) -> &'static str {
    if hash.starts_with(ANIMATED_PREFIX) {
        "gif"
    } else {
        "png"
    }
}

/// Build `<cdn>/<kind>/<owner>/<hash>.<ext>?size=<size>`.
/// Returns `None` when there is no hash; never fails otherwise.
pub fn derive_url(
    cdn_base: &str,
    kind: AssetKind,
    owner_id: &str,
    hash: Option<&str>,
    size: u32,
) -> Option<String> {
    let hash = hash.filter(|h| !h.is_empty())?;
    Some(format!(
        "{}/{}/{owner_id}/{hash}.{}?size={size}",
        cdn_base.trim_end_matches('/'),
        kind.path(),
        image_extension(hash),
    ))
}

pub fn avatar_url(cdn_base: &str, owner_id: &str, hash: Option<&str>) -> Option<String> {
    derive_url(cdn_base, AssetKind::Avatar, owner_id, hash, AVATAR_SIZE)
}

pub fn banner_url(cdn_base: &str, owner_id: &str, hash: Option<&str>) -> Option<String> {
    derive_url(cdn_base, AssetKind::Banner, owner_id, hash, BANNER_SIZE)
}

/// Avatar decorations have no documented, stable CDN path, so no URL is
/// produced even when the user has one. Guessing a format would render as a
/// broken image.
pub fn avatar_decoration_url(_asset: Option<&str>) -> Option<String> {
    None
}

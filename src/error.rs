use std::fmt;

#[derive(Debug)]
pub enum LookupError {
    /// Blank identifier; no request was made.
    InvalidInput,
    /// A required credential is not configured.
    MissingCredential { name: &'static str },
    RateLimited { retry_after: Option<String> },
    RemoteRequestFailed { status: u16, body: String },
    InvalidResponse(String),
    InvalidApiBase(String),
    Http(reqwest::Error),
}

impl LookupError {
    /// Only throttling is worth retrying later; everything else fails the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LookupError::RateLimited { .. })
    }

    pub fn retry_after(&self) -> Option<&str> {
        match self {
            LookupError::RateLimited { retry_after } => retry_after.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::RateLimited { .. } => Some(429),
            LookupError::RemoteRequestFailed { status, .. } => Some(*status),
            LookupError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::InvalidInput => write!(f, "Please provide a Discord user ID."),
            LookupError::MissingCredential { name } => write!(f, "Missing {name}"),
            LookupError::RateLimited { retry_after } => write!(
                f,
                "Rate limited by Discord. Retry after {} seconds.",
                retry_after.as_deref().unwrap_or("a bit")
            ),
            LookupError::RemoteRequestFailed { status, body } => {
                write!(f, "Failed to fetch user: {status} {body}")
            }
            LookupError::InvalidResponse(e) => write!(f, "Invalid response from Discord: {e}"),
            LookupError::InvalidApiBase(base) => write!(f, "Invalid Discord API base URL: {base}"),
            LookupError::Http(e) => write!(f, "Failed to reach Discord: {e}"),
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LookupError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            LookupError::InvalidResponse(e.to_string())
        } else {
            LookupError::Http(e)
        }
    }
}

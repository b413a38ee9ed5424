pub mod profile;
pub mod user;

/// Collapse empty strings to `None`; the remote API sometimes sends `""` for unset fields.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

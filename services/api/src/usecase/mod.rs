pub mod auth;
pub mod gear;
pub mod location;
pub mod thread;
pub mod token;

/// `None` for absent, empty, or whitespace-only input.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

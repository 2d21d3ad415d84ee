/// A failure raised by the memcached client's own logic, as opposed to an
/// I/O fault or any other error passing through it.
///
/// Only code inside this crate can construct one directly. Everything else
/// either receives it through a [`crate::Result`] or rebuilds it from a
/// serialized record (with the `serde` feature, on by default).
///
/// ```compile_fail
/// let err = memcached_error::MemcachedError::new("forged");
/// ```
///
/// ```compile_fail
/// let err = memcached_error::MemcachedError { message: "forged".into() };
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct MemcachedError {
    message: String,
}

impl MemcachedError {
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The diagnostic message this error was raised with.
    pub fn message(&self) -> &str {
        &self.message
    }
}

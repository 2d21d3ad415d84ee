use crate::{ErrorPolicy, MemcachedError, Result};

/// Extension trait for `Result` that reports errors through an
/// [`ErrorPolicy`] without changing control flow.
///
/// ```rust,ignore
/// use memcached_error::{ErrorPolicy, Result, ResultExt};
///
/// fn fetch(policy: &impl ErrorPolicy) -> Result<Vec<u8>> {
///     client.get("session:42").emit_error(policy) // still Err for the caller
/// }
/// ```
pub trait ResultExt<T> {
    /// If the result is an error, emit it through the policy. The result is
    /// returned unchanged either way.
    fn emit_error(self, policy: &impl ErrorPolicy) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn emit_error(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            policy.emit(e);
        }
        self
    }
}

/// Helpers over iterators of `Result`, for batch operations.
///
/// - `collect_ok`: collects `Ok` items, stopping at the first error.
/// - `first_error`: returns the first error without allocating.
pub trait IterResultExt<T>: Sized {
    /// Collect every `Ok` value, or return the first error.
    fn collect_ok(self) -> Result<Vec<T>>;
    /// The first error in the sequence, if any.
    fn first_error(self) -> Option<MemcachedError>;
}

impl<I, T> IterResultExt<T> for I
where
    I: IntoIterator<Item = Result<T>>,
{
    fn collect_ok(self) -> Result<Vec<T>> {
        let mut out = Vec::new();
        for r in self {
            out.push(r?);
        }
        Ok(out)
    }

    fn first_error(self) -> Option<MemcachedError> {
        self.into_iter().find_map(|r| r.err())
    }
}

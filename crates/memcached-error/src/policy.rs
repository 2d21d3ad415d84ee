//! Policies for reporting errors at application boundaries.
//!
//! The client never logs on its own; it returns [`crate::Result`] and leaves
//! reporting to whatever `ErrorPolicy` the application installs.
//!
//! ```rust,ignore
//! use memcached_error::{ErrorPolicy, MemcachedError};
//!
//! struct PrintPolicy;
//! impl ErrorPolicy for PrintPolicy {
//!     fn emit(&self, e: &MemcachedError) { eprintln!("memcached: {e}"); }
//! }
//! ```
use crate::MemcachedError;

pub trait ErrorPolicy: Send + Sync {
    /// Report the error (log it, forward it to a UI, count it, ...).
    fn emit(&self, error: &MemcachedError);
}

/// Drops every error.
#[derive(Debug, Clone, Default)]
pub struct NoopPolicy;

impl ErrorPolicy for NoopPolicy {
    fn emit(&self, _error: &MemcachedError) {}
}

/// Emits each error as a `tracing` event at `ERROR` level.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Default)]
pub struct TracingPolicy;

#[cfg(feature = "tracing")]
impl ErrorPolicy for TracingPolicy {
    fn emit(&self, error: &MemcachedError) {
        tracing::error!(error = %error, "memcached client error");
    }
}

/// Emits through every inner policy, in the order they were added.
///
/// ```rust,ignore
/// use memcached_error::{CombinedPolicy, NoopPolicy};
///
/// let policy = CombinedPolicy::new().push(NoopPolicy);
/// // #[cfg(feature = "tracing")] let policy = policy.push(memcached_error::TracingPolicy);
/// ```
#[derive(Default)]
pub struct CombinedPolicy {
    policies: Vec<Box<dyn ErrorPolicy>>,
}

impl CombinedPolicy {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            policies: Vec::with_capacity(capacity),
        }
    }

    /// Add a policy by value. Consumes and returns `Self` for chaining.
    pub fn push<P: ErrorPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    pub fn add_boxed(mut self, policy: Box<dyn ErrorPolicy>) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl ErrorPolicy for CombinedPolicy {
    fn emit(&self, error: &MemcachedError) {
        for p in &self.policies {
            p.emit(error);
        }
    }
}

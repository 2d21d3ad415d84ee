//! The error type raised by the memcached client.
//!
//! [`MemcachedError`] is the single failure kind the client defines for
//! itself. Callers tell it apart from other errors by type, read its message,
//! and may ship it across a process boundary with serde.

pub mod domain;
pub mod policy;
pub mod result_ext;

// public exports
pub use domain::MemcachedError;
pub use policy::{CombinedPolicy, ErrorPolicy, NoopPolicy};
#[cfg(feature = "tracing")]
pub use policy::TracingPolicy;
pub use result_ext::{IterResultExt, ResultExt};

pub type Result<T, E = MemcachedError> = std::result::Result<T, E>;

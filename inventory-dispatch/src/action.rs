//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions are cloned for logging, printed with `Debug`, and sent across
/// threads from async tasks, hence the bounds.
pub trait Action: Clone + Debug + Send + 'static {
    /// Variant name for logging and filtering
    fn name(&self) -> &'static str;

    /// One-line description for logs; defaults to the `Debug` output
    ///
    /// Override for actions carrying large payloads.
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}

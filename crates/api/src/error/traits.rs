//! Extension traits for error handling

use super::types::Result;

/// Extension methods for `Result<T>` that rewrite error context
pub trait ResultExt<T> {
    /// Replace the error's context label, keeping its variant and payload
    fn context(self, context: &'static str) -> Result<T>;

    /// Attach a formatted message to the error (std only)
    #[cfg(feature = "std")]
    fn message(self, message: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    #[cfg(feature = "std")]
    fn message(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_message(message))
    }
}

//! Library error types

use thiserror::Error;

/// Errors raised during classification and dashboard generation.
///
/// Generation is all-or-nothing: any error aborts the run before a plan
/// is produced. Unrecognized resources are not errors, they are dropped
/// during classification with a log line.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A discovery record had no identifying ARN. Region and service
    /// derivation are impossible without it, so the whole run aborts.
    #[error("resource record at index {index} is missing ResourceARN")]
    MissingResourceArn { index: usize },
}

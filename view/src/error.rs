use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuestionViewError>;

/// The narrow error surface of the question view.
///
/// Anomalies in host-supplied data (unknown selection values, duplicate
/// answer values) are tolerated rather than raised; only genuine host bugs
/// fail fast.
#[derive(Debug, Error)]
pub enum QuestionViewError {
    /// The configuration cannot produce a usable view, e.g. an answer entry
    /// with an empty value or label.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A method other than `teardown` was invoked after `teardown`.
    #[error("question view used after teardown")]
    UseAfterTeardown,
}

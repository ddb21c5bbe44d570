/// Errors surfaced by the anagram index. Only construction can fail;
/// `insert` and `lookup` treat unusable input as a no-op.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndexError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl IndexError {
    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        IndexError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

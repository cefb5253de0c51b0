pub type ScrollkitResult<T> = Result<T, ScrollkitError>;

#[derive(thiserror::Error, Debug)]
pub enum ScrollkitError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("content error: {0}")]
    Content(String),

    #[error("trigger error: {0}")]
    Trigger(String),

    #[error("evaluation error: {0}")]
    Evaluation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollkitError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    pub fn trigger(msg: impl Into<String>) -> Self {
        Self::Trigger(msg.into())
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            ScrollkitError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            ScrollkitError::content("x")
                .to_string()
                .contains("content error:")
        );
        assert!(
            ScrollkitError::trigger("x")
                .to_string()
                .contains("trigger error:")
        );
        assert!(
            ScrollkitError::evaluation("x")
                .to_string()
                .contains("evaluation error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = ScrollkitError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}

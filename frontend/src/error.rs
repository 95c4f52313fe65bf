use thiserror::Error;

/// Failures that replace the whole storefront with an error page.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorefrontError {
    #[error("Creator not found (No slug detected)")]
    NoSlug,
    #[error("Creator \"{0}\" not found in our directory.")]
    NotFound(String),
    #[error("Failed to load creator data (Status: {0})")]
    Status(u16),
    #[error("Failed to load creator data ({0})")]
    Network(String),
    #[error("Creator data could not be read ({0})")]
    Decode(String),
}

impl StorefrontError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorefrontError::NoSlug | StorefrontError::NotFound(_))
    }

    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            StorefrontError::Status(_) | StorefrontError::Network(_) | StorefrontError::Decode(_)
        )
    }

    pub fn title(&self) -> &'static str {
        if self.is_not_found() {
            "Oops!"
        } else {
            "Something went wrong"
        }
    }
}

/// Metadata lookups only decorate the page, so these never reach the user.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LookupError {
    #[error("metadata request failed: {0}")]
    Network(String),
    #[error("metadata service returned status {0}")]
    Status(u16),
    #[error("metadata response could not be parsed: {0}")]
    Decode(String),
    #[error("metadata service reported \"{0}\"")]
    Unsuccessful(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failures_and_not_found_are_disjoint() {
        let all = [
            StorefrontError::NoSlug,
            StorefrontError::NotFound("ada".into()),
            StorefrontError::Status(500),
            StorefrontError::Network("offline".into()),
            StorefrontError::Decode("eof".into()),
        ];
        for err in &all {
            assert_ne!(err.is_not_found(), err.is_fetch_failure(), "{err:?}");
        }
    }

    #[test]
    fn messages_distinguish_status_from_missing_creator() {
        assert_eq!(
            StorefrontError::Status(500).to_string(),
            "Failed to load creator data (Status: 500)"
        );
        assert_eq!(
            StorefrontError::NotFound("ada".into()).to_string(),
            "Creator \"ada\" not found in our directory."
        );
    }
}

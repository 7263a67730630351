use thiserror::Error;

/// Failures tied to user records: registration, login and user lookups.
#[derive(Debug, Error)]
pub enum UserError {
    /// Another account is already registered with this email.
    #[error("user already exists: {email}")]
    AlreadyExists { email: String },

    /// No account matches the supplied email and password pair.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// No user carries the requested id.
    #[error("user not found: {user_id}")]
    NotFound { user_id: String },

    /// A user attempted to follow themselves.
    #[error("user {user_id} cannot follow themselves")]
    SelfFollow { user_id: String },
}

/// Failures tied to post records.
#[derive(Debug, Error)]
pub enum PostError {
    /// No post carries the requested id.
    #[error("post not found: {post_id}")]
    NotFound { post_id: String },
}

/// Returned by operations that resolve both a user and a post.
#[derive(Debug, Error)]
pub enum SocialError {
    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Post(#[from] PostError),
}

impl SocialError {
    /// True when the referenced user or post does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SocialError::User(UserError::NotFound { .. }) | SocialError::Post(PostError::NotFound { .. })
        )
    }
}

/// Collection of validation issues encountered while checking a draft.
#[derive(Debug, Clone, Error)]
#[error("validation errors: {issues:?}")]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        Self {
            issues: issues.into_iter().collect(),
        }
    }

    /// Convenience helper for constructing a single-field validation error.
    pub fn single(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new([ValidationIssue::new(field, code, message)])
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if any issue was raised for `field` with the given `code`.
    pub fn has_issue(&self, field: &str, code: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field && issue.code == code)
    }
}

/// Detailed validation failure for a single draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Result alias returned by draft validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

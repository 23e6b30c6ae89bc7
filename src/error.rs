//! Error taxonomy shared by the API client, the refresh controller and the dispatcher.
//!
//! Every remote or local failure is one [`ApiError`]. Its `Display` output is the
//! human-readable reason embedded in user-facing notifications.

/// Service message token signalling that the slug change/creation quota is used up.
pub const LIMIT_REACHED_TOKEN: &str = "change_shortname_limit_reached";

/// Service error code accompanying [`LIMIT_REACHED_TOKEN`].
pub const LIMIT_REACHED_CODE: u16 = 422;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Local input failed a precondition. No network call was made.
    #[error("{0}")]
    Validation(String),

    #[error("Access denied. Please check your authentication credentials.")]
    Auth(String),

    #[error("You have reached the limit for changing short names.")]
    RateLimit(String),

    #[error("The requested resource was not found.")]
    NotFound(String),

    /// The response shape violates the expected contract.
    #[error("Unexpected response from the service: {0}")]
    Protocol(String),

    /// No response was received.
    #[error("No response from the server. Please check your connection.")]
    Transport(String),

    #[error("Unexpected Error: {message}")]
    Remote { status: u16, message: String },
}

/// Fieldless discriminant of [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Auth,
    RateLimit,
    NotFound,
    Protocol,
    Transport,
    Remote,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    /// Credentials are missing or only half configured.
    pub fn not_authenticated() -> Self {
        Self::Auth("Please configure X-Auth-Id and X-Auth-Key first.".to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Validation(_) => ErrorKind::Validation,
            ApiError::Auth(_) => ErrorKind::Auth,
            ApiError::RateLimit(_) => ErrorKind::RateLimit,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::Protocol(_) => ErrorKind::Protocol,
            ApiError::Transport(_) => ErrorKind::Transport,
            ApiError::Remote { .. } => ErrorKind::Remote,
        }
    }

    /// Diagnostic detail for logs. Never shown to the user verbatim.
    pub fn detail(&self) -> &str {
        match self {
            ApiError::Validation(d)
            | ApiError::Auth(d)
            | ApiError::RateLimit(d)
            | ApiError::NotFound(d)
            | ApiError::Protocol(d)
            | ApiError::Transport(d) => d,
            ApiError::Remote { message, .. } => message,
        }
    }

    pub fn is_rate_limit(&self) -> bool {
        self.kind() == ErrorKind::RateLimit
    }
}

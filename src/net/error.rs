//! Transport error type and per-workflow error classification.
//!
//! Classification is a pure mapping from a raw [`ApiError`] to one member of
//! a fixed error-code enumeration, decoupled from the transport that raised
//! it. Anything outside the enumeration collapses to the workflow's default
//! code, so the user always gets a message and the workflow never crashes on
//! an unrecognized failure.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error raised by the REST gateway.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status, possibly carrying a
    /// machine-readable error code in the body.
    #[error("server rejected the request with status {status}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Error code from the response body, if one could be parsed.
        code: Option<String>,
    },
    /// The request never produced a server response.
    #[error("network error: {0}")]
    Network(String),
    /// Requests are only possible in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// The server-supplied error code, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Server { code, .. } => code.as_deref(),
            Self::Network(_) | Self::Unavailable => None,
        }
    }
}

/// Classified outcome codes for the channel-registration workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelCreateError {
    /// The channel is already in the catalog.
    ConflictChannel,
    /// A registration request for this channel is already pending.
    ConflictRequest,
    /// The username resolves to something that is not a channel.
    ConflictWrongEntity,
    /// The selected category does not exist anymore.
    NotFoundCategory,
    /// No chat with the given username exists.
    NotFoundChat,
    /// The chat's full record could not be loaded.
    NotFoundFullChat,
    /// No statistics collector is available to take the channel.
    NotFoundWorker,
    /// The collector failed while processing the channel.
    TotalError,
    /// Anything not in the enumeration above.
    Default,
}

impl ChannelCreateError {
    /// Map a raw gateway error onto the workflow's error-code enumeration.
    #[must_use]
    pub fn classify(error: &ApiError) -> Self {
        match error.code() {
            Some("CONFLICT_CHANNEL") => Self::ConflictChannel,
            Some("CONFLICT_REQUEST") => Self::ConflictRequest,
            Some("CONFLICT_WRONG_ENTITY") => Self::ConflictWrongEntity,
            Some("NOT_FOUND_CATEGORY") => Self::NotFoundCategory,
            Some("NOT_FOUND_CHAT") => Self::NotFoundChat,
            Some("NOT_FOUND_FULL_CHAT") => Self::NotFoundFullChat,
            Some("NOT_FOUND_WORKER") => Self::NotFoundWorker,
            Some("TOTAL_ERROR") => Self::TotalError,
            _ => Self::Default,
        }
    }

    /// Localization key for the user-facing message.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Self::ConflictChannel => "add.channel.errors.CONFLICT_CHANNEL",
            Self::ConflictRequest => "add.channel.errors.CONFLICT_REQUEST",
            Self::ConflictWrongEntity => "add.channel.errors.CONFLICT_WRONG_ENTITY",
            Self::NotFoundCategory => "add.channel.errors.NOT_FOUND_CATEGORY",
            Self::NotFoundChat => "add.channel.errors.NOT_FOUND_CHAT",
            Self::NotFoundFullChat => "add.channel.errors.NOT_FOUND_FULL_CHAT",
            Self::NotFoundWorker => "add.channel.errors.NOT_FOUND_WORKER",
            Self::TotalError => "add.channel.errors.TOTAL_ERROR",
            Self::Default => "add.channel.errors.default",
        }
    }
}

/// Classified outcome codes for the topic-creation workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopicCreateError {
    /// The user is not signed in.
    Unauthorized,
    /// A topic with the same link already exists.
    Conflict,
    /// Anything not in the enumeration above.
    Default,
}

impl TopicCreateError {
    /// Map a raw gateway error onto the workflow's error-code enumeration.
    #[must_use]
    pub fn classify(error: &ApiError) -> Self {
        match error.code() {
            Some("UNAUTHORIZED") => Self::Unauthorized,
            Some("CONFLICT") => Self::Conflict,
            _ => Self::Default,
        }
    }

    /// Localization key for the user-facing message.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Self::Unauthorized => "topics.modals.create.notifications.errors.UNAUTHORIZED",
            Self::Conflict => "topics.modals.create.notifications.errors.CONFLICT",
            Self::Default => "topics.modals.create.notifications.errors.default",
        }
    }
}

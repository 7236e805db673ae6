//! Public error taxonomy.
//!
//! Every operation converts transport failures into one of these variants at
//! its own boundary; nothing deeper leaks out. The enum is `Clone` and
//! `PartialEq` so errors can sit in UI signals and be asserted in tests.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Login or token-endpoint failure, with a user-displayable message.
    #[error("{0}")]
    Auth(String),

    /// Field-level rejection during registration, one `field: message` line
    /// per rejected field.
    #[error("{0}")]
    Validation(String),

    /// Profile update failure.
    #[error("{0}")]
    Profile(String),

    /// Favorite toggle failure; cached state is left untouched.
    #[error("could not update favorite")]
    Favorite,

    /// The subscribe endpoint reported the address as already subscribed.
    #[error("email is already subscribed")]
    AlreadySubscribed,

    /// The unsubscribe endpoint reported the address as not subscribed.
    #[error("email is not subscribed")]
    NotSubscribed,

    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Network(String),

    /// The server rejected the request with no more specific mapping.
    #[error("unexpected status {status}")]
    Status { status: u16, detail: Option<String> },
}

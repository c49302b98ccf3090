use reqwest::StatusCode;
use thiserror::Error;

/// All errors that can be returned by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport or JSON decoding failure in the underlying HTTP client.
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),

    /// The remote service answered a required fetch with a non-OK status.
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(StatusCode),

    /// The supplied topic reference is neither an absolute forum URL nor a
    /// numeric id. Raised before any network access.
    #[error("`{0}` is neither a thread url nor a numeric topic id")]
    InvalidIdentifier(String),

    /// A post references an author id that its own page's user list does
    /// not contain. The upstream data is malformed.
    #[error("author {0} is missing from the page's user list")]
    UnknownAuthor(u64),
}

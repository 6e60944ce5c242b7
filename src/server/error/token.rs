use thiserror::Error;

/// Reasons a bearer token can be rejected or fail to be minted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Token was signed with a different secret or algorithm.
    #[error("token signature is invalid")]
    InvalidSignature,

    /// Token `exp` claim lies in the past.
    #[error("token has expired")]
    Expired,

    /// Token could not be decoded as a JWT carrying the expected claims.
    #[error("token is malformed")]
    Malformed,

    /// Signing a new token failed.
    #[error("failed to sign token: {0}")]
    Signing(String),
}

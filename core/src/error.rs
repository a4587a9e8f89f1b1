//! Errors.

/// The errors that can be produced when converting untrusted
/// values into grid coordinates.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid cube coordinates ({q},{r},{s}): q + r + s must be 0")]
    InvalidCube { q: i32, r: i32, s: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;

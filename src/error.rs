use thiserror::Error;

/// Errors returned by lookups on a [SkipList](crate::SkipList).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("key not found")]
    NotFound,
}

pub type Result<T> = core::result::Result<T, Error>;

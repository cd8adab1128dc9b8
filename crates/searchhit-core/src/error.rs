// crates/searchhit-core/src/error.rs
use crate::kind::HitKind;
use thiserror::Error;

/// Errors produced by the hit codecs and the configuration layer.
///
/// Identifier parsing never produces one of these; it returns `None` instead.
#[derive(Debug, Error)]
pub enum HitError {
    /// The wire reader ran past the end of the buffer.
    #[error("wire data truncated: needed {needed} bytes at offset {offset}, buffer is {len} bytes")]
    Truncated {
        needed: usize,
        offset: usize,
        len: usize,
    },

    /// The kind word on the wire is not a single known kind bit.
    #[error("unknown hit kind 0x{0:x}")]
    UnknownKind(u32),

    /// An info entry carried a kind code outside the known table.
    #[error("unknown info entry kind {0}")]
    UnknownInfoKind(u32),

    /// A region slot was filled with a hit that is not a region kind.
    #[error("{0:?} hit cannot be used as a region")]
    NotARegion(HitKind),

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A configuration layer could not be read or extracted.
    #[error(transparent)]
    Config(#[from] figment::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HitError>;

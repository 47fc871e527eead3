use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Rejected before any network call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Fetch(#[from] FetchFailure),
}

/// Terminal failure of a single page request. Aborts the whole search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchFailure {
    #[error("transport error on page {page}: {message}")]
    Transport { page: u32, message: String },

    #[error("page {page} returned HTTP {status}")]
    Status { page: u32, status: u16 },

    #[error("page {page} body is not a catalog page: {message}")]
    Decode { page: u32, message: String },
}

impl FetchFailure {
    pub fn page(&self) -> u32 {
        match self { FetchFailure::Transport { page, .. } | FetchFailure::Status { page, .. } | FetchFailure::Decode { page, .. } => *page }
    }
    /// Label used for the failure counter.
    pub fn kind(&self) -> &'static str {
        match self { FetchFailure::Transport { .. } => "transport", FetchFailure::Status { .. } => "status", FetchFailure::Decode { .. } => "decode" }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid input: grid is empty")]
    Empty,

    #[error("invalid input: row {row} has length {found}, expected {expected} (all rows must have equal length)")]
    IrregularRows { row: usize, expected: usize, found: usize },

    #[error("invalid input: cell ({row},{col}) is {value}, only 0 and 1 are allowed")]
    DisallowedValue { row: usize, col: usize, value: i64 },
}

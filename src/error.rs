use thiserror::Error;

/// Errors surfaced by the experiment pipeline.
///
/// Sorting and the threshold search cannot fail; everything here comes from
/// configuration, aggregation, or the report sink.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot summarize an empty sample series")]
    EmptySeries,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

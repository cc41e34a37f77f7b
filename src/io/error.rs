use crate::model::grid::RaggedGridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error(transparent)]
    RaggedGrid(#[from] RaggedGridError),
}

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read directory {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    pub fn traversal(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Traversal {
            path: path.into(),
            source,
        }
    }
}

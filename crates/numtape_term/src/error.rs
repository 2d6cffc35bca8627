use std::path::PathBuf;

use numtape::error::TapeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TermError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("{}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: TapeError,
    },

    #[error(transparent)]
    Widget(#[from] TapeError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

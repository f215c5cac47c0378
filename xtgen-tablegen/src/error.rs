use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("opcode {0:?} has no encoding variants")]
    NoVariant(String),

    #[error("cannot write {destination}: {source}")]
    Write {
        destination: String,
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

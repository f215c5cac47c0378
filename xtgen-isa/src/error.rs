use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid operand flag {flag:?} at position {position} in {code:?}")]
    InvalidFlag {
        code: String,
        position: usize,
        flag: char,
    },

    #[error("operand flag string {0:?} is longer than 4 characters")]
    FlagsTooLong(String),
}

pub type Result<T> = std::result::Result<T, Error>;

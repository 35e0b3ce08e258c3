use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty input")]
    EmptyInput,

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("{numerators} numerator block(s) but {denominators} denominator block(s)")]
    MismatchedStageCount {
        numerators: usize,
        denominators: usize,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("wrong format: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<A> = std::result::Result<A, Error>;

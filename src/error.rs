use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("rule number {0} does not fit in 8 bits")]
    InvalidRuleNumber(i64),

    #[error("a generation must contain at least one cell")]
    InvalidGeneration,

    #[error("step {0} is negative")]
    InvalidStep(i64),

    #[error("missing {0} line")]
    MissingLine(&'static str),

    #[error("invalid rule line: {0:?}")]
    InvalidRuleLine(String),

    #[error("invalid symbol line: {0:?}")]
    InvalidSymbols(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

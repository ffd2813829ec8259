use std::io;

pub type OutputResult<T> = Result<T, OutputError>;

#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CxtabError {
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type CxtabResult<T> = Result<T, CxtabError>;

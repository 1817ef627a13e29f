use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error(
        "Unknown function '{name}', valid functions are: {}",
        .available.join(", ")
    )]
    Lookup {
        name: String,
        available: Vec<String>,
    },
}

impl BlockForgeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

pub type BfResult<T> = Result<T, BlockForgeError>;

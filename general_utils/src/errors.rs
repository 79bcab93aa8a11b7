use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Cannot convert {input:?} to an integer: {reason}")]
    Conversion { input: String, reason: String },

    #[error("Character {0:?} has no ISO-8859-9 encoding")]
    Encoding(char),

    #[error("Invalid date/time value: {0:?}")]
    DateFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

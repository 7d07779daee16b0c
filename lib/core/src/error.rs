use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error at line {line}: {message}")]
    Csv { line: u64, message: String },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Missing value for column '{column}' in row {row}")]
    MissingField { row: usize, column: String },

    #[error("Empty vocabulary: the corpus contains no terms after stop-word removal")]
    EmptyVocabulary,

    #[error("Skill not found in database")]
    SkillNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map(|p| p.line()).unwrap_or(0);
        let message = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(io) => Error::Io(io),
            _ => Error::Csv { line, message },
        }
    }
}

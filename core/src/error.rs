use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourneyError {
    #[error("Team '{name}' already exists")]
    DuplicateTeam { name: String },

    #[error("Team '{name}' not found")]
    TeamNotFound { name: String },

    #[error("Invalid team: {reason}")]
    InvalidTeam { reason: String },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type TourneyResult<T> = Result<T, TourneyError>;

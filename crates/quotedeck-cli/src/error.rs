use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] quotedeck_core::ValidationError),

    #[error(transparent)]
    Fetch(#[from] quotedeck_core::FetchError),

    #[error("no quotes could be fetched for any of the {requested} requested symbol(s)")]
    EmptyResult { requested: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::EmptyResult { .. } => 5,
            Self::Fetch(_) => 10,
            Self::Serialization(_) => 10,
        }
    }
}

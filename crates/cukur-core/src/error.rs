use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl Error {
    /// Machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            Error::Database(_) => "DATABASE_ERROR",
        }
    }

    pub fn is_database(&self) -> bool {
        matches!(self, Error::Database(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

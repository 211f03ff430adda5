use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("internal server error")]
    InternalServerError,

    #[error("resource not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("name is already taken")]
    NameTaken,
}

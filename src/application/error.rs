/// Failure taxonomy shared by ports, use cases and handlers. Every
/// handler-visible failure is one of these; the HTTP mapping lives in
/// `presentation::http::error`.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} already exists")]
    Conflict(&'static str),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

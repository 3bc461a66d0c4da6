// src/error.rs
use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;

const NOT_FOUND_PAGE: &str = include_str!("../templates/404.html");

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no question with id {0}")]
    NotFound(i64),

    #[error("malformed question id: {0}")]
    MalformedId(String),

    #[error("{field} must be at most {max} characters")]
    Validation { field: &'static str, max: usize },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("template registration error: {0}")]
    TemplateRegistration(#[from] Box<handlebars::TemplateError>),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound(id) => {
                tracing::debug!(question_id = id, "question not found");
                (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response()
            }
            Error::MalformedId(reason) => {
                tracing::debug!(%reason, "unroutable question id");
                (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response()
            }
            Error::Validation { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            err => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

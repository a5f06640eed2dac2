use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::{domain::chart::ChartError, services::ExtractError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("could not read page: {0}")]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Extract(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Chart(ChartError::UnknownChartType(_) | ChartError::UnknownLibrary(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Chart(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Template(_) => {
                log::error!("Failed to render page: {:?}", self);
                "internal server error".to_string()
            }
            _ => self.to_string(),
        };

        HttpResponse::build(self.status_code()).body(message)
    }
}

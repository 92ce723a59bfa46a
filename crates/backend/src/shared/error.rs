use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::columns::UnknownColumn;
use serde::Serialize;
use thiserror::Error;

/// Ошибки построения отчётов
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Dataset file missing, unreadable, without a required column or with a malformed row.
    #[error("Data load error: {0}")]
    DataLoad(String),

    /// Invalid or out-of-domain date arithmetic or selection.
    #[error("Date range error: {0}")]
    DateRange(String),

    /// The requested slice has no rows at all.
    #[error("No data: {0}")]
    NoData(String),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    pub fn data_load(msg: impl Into<String>) -> Self {
        Self::DataLoad(msg.into())
    }

    pub fn date_range(msg: impl Into<String>) -> Self {
        Self::DateRange(msg.into())
    }

    pub fn no_data(msg: impl Into<String>) -> Self {
        Self::NoData(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::DataLoad(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DashboardError::DateRange(_) | DashboardError::InvalidColumn(_) => {
                StatusCode::BAD_REQUEST
            }
            DashboardError::NoData(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<UnknownColumn> for DashboardError {
    fn from(e: UnknownColumn) -> Self {
        Self::InvalidColumn(e.0)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

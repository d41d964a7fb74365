//! HTTP handlers for advert view endpoints.
//!
//! These handlers connect Axum routes to the application layer query
//! handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    AdvertViewError, GetPreviewHandler, GetPreviewQuery, GetSectionOverviewHandler,
    GetSectionOverviewQuery, GetSummaryHandler, GetSummaryQuery,
};
use crate::domain::definition::AdvertDefinition;
use crate::domain::foundation::{AdvertId, SchemeId};
use crate::ports::{AdvertReader, SchemeReader};

use super::dto::{AdvertPreview, AdvertSummary, ErrorResponse, SectionOverview};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Advert API error that implements IntoResponse.
pub enum AdvertApiError {
    BadRequest(String),
    NotFound(String),
    Forbidden(String),
    Internal(String),
}

impl IntoResponse for AdvertApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AdvertApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AdvertApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            AdvertApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorResponse::forbidden(msg)),
            AdvertApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<AdvertViewError> for AdvertApiError {
    fn from(error: AdvertViewError) -> Self {
        match error {
            AdvertViewError::AdvertNotFound(id) => {
                AdvertApiError::NotFound(format!("Advert {} not found", id))
            }
            AdvertViewError::SchemeNotFound(id) => {
                AdvertApiError::NotFound(format!("Scheme {} not found", id))
            }
            AdvertViewError::AccessDenied => {
                AdvertApiError::Forbidden("You do not have access to this advert".to_string())
            }
            AdvertViewError::Integrity(err) => {
                AdvertApiError::Internal(format!("Advert data integrity error: {}", err))
            }
            AdvertViewError::Storage(msg) => {
                AdvertApiError::Internal(format!("Store error: {}", msg))
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing the advert view dependencies.
#[derive(Clone)]
pub struct AdvertAppState {
    pub advert_reader: Arc<dyn AdvertReader>,
    pub scheme_reader: Arc<dyn SchemeReader>,
    pub definition: Arc<AdvertDefinition>,
}

impl AdvertAppState {
    pub fn section_overview_handler(&self) -> GetSectionOverviewHandler {
        GetSectionOverviewHandler::new(
            self.advert_reader.clone(),
            self.scheme_reader.clone(),
            self.definition.clone(),
        )
    }

    pub fn summary_handler(&self) -> GetSummaryHandler {
        GetSummaryHandler::new(
            self.advert_reader.clone(),
            self.scheme_reader.clone(),
            self.definition.clone(),
        )
    }

    pub fn preview_handler(&self) -> GetPreviewHandler {
        GetPreviewHandler::new(self.advert_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

fn parse_scheme_id(raw: &str) -> Result<SchemeId, AdvertApiError> {
    raw.parse()
        .map_err(|_| AdvertApiError::BadRequest("Invalid scheme ID format".to_string()))
}

fn parse_advert_id(raw: &str) -> Result<AdvertId, AdvertApiError> {
    raw.parse()
        .map_err(|_| AdvertApiError::BadRequest("Invalid advert ID format".to_string()))
}

/// GET /api/schemes/:scheme_id/adverts/:advert_id/section-overview
///
/// Returns the builder's task list with effective statuses and the
/// publish gate.
pub async fn get_section_overview(
    State(state): State<AdvertAppState>,
    Path((scheme_id_str, advert_id_str)): Path<(String, String)>,
) -> Result<Json<SectionOverview>, AdvertApiError> {
    let query = GetSectionOverviewQuery {
        scheme_id: parse_scheme_id(&scheme_id_str)?,
        advert_id: parse_advert_id(&advert_id_str)?,
    };

    let handler = state.section_overview_handler();
    let overview = handler.handle(query).await?;

    Ok(Json(overview))
}

/// GET /api/schemes/:scheme_id/adverts/:advert_id/summary
///
/// Returns the full definition tree with rendered answers.
pub async fn get_summary(
    State(state): State<AdvertAppState>,
    Path((scheme_id_str, advert_id_str)): Path<(String, String)>,
) -> Result<Json<AdvertSummary>, AdvertApiError> {
    let query = GetSummaryQuery {
        scheme_id: parse_scheme_id(&scheme_id_str)?,
        advert_id: parse_advert_id(&advert_id_str)?,
    };

    let handler = state.summary_handler();
    let summary = handler.handle(query).await?;

    Ok(Json(summary))
}

/// GET /api/adverts/:advert_id/preview
///
/// Returns the public preview document.
pub async fn get_preview(
    State(state): State<AdvertAppState>,
    Path(advert_id_str): Path<String>,
) -> Result<Json<AdvertPreview>, AdvertApiError> {
    let query = GetPreviewQuery {
        advert_id: parse_advert_id(&advert_id_str)?,
    };

    let handler = state.preview_handler();
    let preview = handler.handle(query).await?;

    Ok(Json(preview))
}

//! HTTP routes for advert view endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_preview, get_section_overview, get_summary, AdvertAppState};

/// Creates the advert view router with all routes.
pub fn advert_routes(state: AdvertAppState) -> Router {
    Router::new()
        // GET /api/schemes/:scheme_id/adverts/:advert_id/section-overview
        .route(
            "/api/schemes/:scheme_id/adverts/:advert_id/section-overview",
            get(get_section_overview),
        )
        // GET /api/schemes/:scheme_id/adverts/:advert_id/summary
        .route(
            "/api/schemes/:scheme_id/adverts/:advert_id/summary",
            get(get_summary),
        )
        // GET /api/adverts/:advert_id/preview
        .route("/api/adverts/:advert_id/preview", get(get_preview))
        .with_state(state)
}

use axum::{
    Router,
    routing::post,
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/v1/businesses/:business_id/padel-courts/:court_ref/available-matches",
        post(handlers::available_matches::create_available_matches)
            .get(handlers::available_matches::list_available_matches)
            .patch(handlers::available_matches::reserve_available_match)
            .delete(handlers::available_matches::delete_available_matches),
    )
}

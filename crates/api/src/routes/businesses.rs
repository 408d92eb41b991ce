use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/v1/businesses", post(handlers::businesses::create_business))
        .route(
            "/api/v1/businesses/:business_id",
            get(handlers::businesses::get_business),
        )
        .route(
            "/api/v1/businesses/:business_id/padel-courts",
            post(handlers::businesses::create_court)
                .get(handlers::businesses::list_courts),
        )
        .route(
            "/api/v1/businesses/:business_id/padel-courts/:court_ref",
            get(handlers::businesses::get_court)
                .patch(handlers::businesses::update_court),
        )
}

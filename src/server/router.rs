use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use super::state::AppState;
use crate::core::regroup::regroup;
use crate::core::ErrorBody;
use crate::utils::error::UPSTREAM_FAILURE_MESSAGE;

pub const WELCOME_MESSAGE: &str = "Welcome to the People in Space Microservice!";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/astronauts", get(astronauts_handler))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

async fn welcome_handler() -> &'static str {
    WELCOME_MESSAGE
}

async fn astronauts_handler(State(state): State<AppState>) -> impl IntoResponse {
    info!("FETCH REQUEST RECEIVED for space data");

    match state.source().fetch().await {
        Ok(astro_data) => {
            let rearranged = regroup(astro_data);
            info!(
                people = rearranged.number_of_people,
                spacecrafts = rearranged.spacecrafts.len(),
                "Returning processed space data"
            );
            debug!("Processed space data: {:?}", rearranged);
            (StatusCode::OK, Json(rearranged)).into_response()
        }
        Err(err) => {
            error!("Error fetching space data: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(UPSTREAM_FAILURE_MESSAGE)),
            )
                .into_response()
        }
    }
}

use super::types::{Acknowledgement, ErrorResponse};
use crate::relay::{BirthQuery, Relay};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

pub async fn submit_birth_info(
    State(state): State<AppState>,
    payload: Result<Json<BirthQuery>, JsonRejection>,
) -> Result<Json<Acknowledgement>, (StatusCode, Json<ErrorResponse>)> {
    let Json(query) = payload.map_err(|rejection| {
        let error = rejection.body_text();
        warn!("Failed to bind JSON request: {}", error);
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
    })?;

    info!(
        birth_time = %query.birth_time,
        birth_place = %query.birth_place,
        contact = %query.contact,
        way = %query.way,
        gender = %query.gender,
        "Received birth request"
    );

    // The caller is not told how the relay ends; dropping the handle detaches it.
    let handle = state.relay.submit(query);
    info!(task_id = %handle.id(), "Relay scheduled");

    Ok(Json(Acknowledgement::default()))
}

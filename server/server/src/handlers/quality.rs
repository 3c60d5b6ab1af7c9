use axum::{Json, extract::State};
use axum_extra::extract::{Form, FormRejection};
use tracing::info;

use crate::{
    handlers::{
        form_or_default,
        models::quality::{AddRequest, AddResponse, ListResponse},
    },
    models::clock,
    state::AppState,
};

pub async fn list(State(state): State<AppState>) -> Json<ListResponse> {
    let (records, stats) = state.store.quality_overview().await;
    Json(ListResponse { records, stats })
}

pub async fn add(
    State(state): State<AppState>,
    payload: Result<Form<AddRequest>, FormRejection>,
) -> Json<AddResponse> {
    let payload: AddRequest = form_or_default(payload);
    let record = state
        .store
        .append_quality(payload.into(), clock::now())
        .await;
    info!(
        "quality({}): {} batch {:?} inspected by {:?}, result {:?}, {} defect(s)",
        record.id,
        record.product,
        record.batch,
        record.inspector,
        record.result,
        record.defects.len()
    );
    Json(AddResponse {
        success: true,
        record,
    })
}

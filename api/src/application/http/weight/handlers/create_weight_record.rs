use axum::extract::State;
use healthhub_core::domain::weight::{ports::WeightService, value_objects::AddWeightRecordInput};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    weight::validators::{CreateWeightRecordValidator, WeightRecordResponse},
};

#[utoipa::path(
    post,
    path = "",
    tag = "weight",
    summary = "Add weight record",
    description = "Stores a weight measurement and computes its BMI.",
    responses(
        (status = 201, body = WeightRecordResponse),
        (status = 404, description = "User not found")
    ),
    request_body = CreateWeightRecordValidator
)]
pub async fn create_weight_record(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateWeightRecordValidator>,
) -> Result<Response<WeightRecordResponse>, ApiError> {
    let record = state
        .service
        .add_weight_record(AddWeightRecordInput {
            user_id: payload.user_id,
            date: payload.date,
            weight: payload.weight,
            height: payload.height,
            memo: payload.memo,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(WeightRecordResponse::from(record)))
}

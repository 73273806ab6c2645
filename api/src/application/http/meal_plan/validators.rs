use healthhub_core::domain::meal_plan::{DEFAULT_MEAL_TIME, MealRequest, NONE_SENTINEL};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_meal_time() -> String {
    DEFAULT_MEAL_TIME.to_string()
}

fn default_none() -> String {
    NONE_SENTINEL.to_string()
}

/// Biometric fields are required: a body without them is rejected before any
/// completion call is made.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanValidator {
    /// 아침, 점심, 저녁, 간식 or 전체. Anything else plans every slot.
    #[serde(default = "default_meal_time")]
    pub meal_time: String,

    #[serde(default)]
    pub notes: String,

    pub age: u32,

    pub gender: String,

    pub height: f64,

    pub weight: f64,

    pub activity_level: String,

    pub goal: String,

    pub target_kcal: u32,

    #[serde(default = "default_none")]
    pub allergies: String,

    #[serde(default = "default_none")]
    pub preferences: String,
}

impl From<MealPlanValidator> for MealRequest {
    fn from(payload: MealPlanValidator) -> Self {
        Self {
            meal_time: payload.meal_time,
            notes: payload.notes,
            age: payload.age,
            gender: payload.gender,
            height: payload.height,
            weight: payload.weight,
            activity_level: payload.activity_level,
            goal: payload.goal,
            target_kcal: payload.target_kcal,
            allergies: payload.allergies,
            preferences: payload.preferences,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, http::StatusCode, routing::post};
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use super::*;
    use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};

    async fn echo(
        ValidateJson(payload): ValidateJson<MealPlanValidator>,
    ) -> Result<Json<MealPlanValidator>, ApiError> {
        Ok(Json(payload))
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/ai/meal", post(echo))).unwrap()
    }

    fn body() -> Value {
        json!({
            "mealTime": "아침",
            "notes": "편의점",
            "age": 31,
            "gender": "여",
            "height": 163.0,
            "weight": 55.0,
            "activityLevel": "보통",
            "goal": "다이어트",
            "targetKcal": 1800
        })
    }

    #[tokio::test]
    async fn test_optional_fields_take_defaults() {
        let mut body = body();
        let object = body.as_object_mut().unwrap();
        object.remove("mealTime");
        object.remove("notes");

        let response = server().post("/ai/meal").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let echoed: Value = response.json();
        assert_eq!(echoed["mealTime"], "전체");
        assert_eq!(echoed["notes"], "");
        assert_eq!(echoed["allergies"], "없음");
        assert_eq!(echoed["preferences"], "없음");
    }

    #[tokio::test]
    async fn test_missing_biometric_field_is_bad_request() {
        for field in ["age", "gender", "height", "weight", "activityLevel", "goal", "targetKcal"] {
            let mut body = body();
            body.as_object_mut().unwrap().remove(field);

            let response = server().post("/ai/meal").json(&body).await;
            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{field}");
        }
    }

    #[tokio::test]
    async fn test_wrong_type_is_bad_request() {
        let mut body = body();
        body["targetKcal"] = json!("1800kcal");

        let response = server().post("/ai/meal").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_zero_target_kcal_is_accepted() {
        let mut body = body();
        body["targetKcal"] = json!(0);
        body["mealTime"] = json!("간식");

        let response = server().post("/ai/meal").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let echoed: Value = response.json();
        assert_eq!(echoed["targetKcal"], 0);
    }

    #[tokio::test]
    async fn test_negative_target_kcal_is_bad_request() {
        let mut body = body();
        body["targetKcal"] = json!(-300);

        let response = server().post("/ai/meal").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_converts_into_meal_request() {
        let payload: MealPlanValidator = serde_json::from_value(body()).unwrap();
        let request = MealRequest::from(payload);

        assert_eq!(request.meal_time, "아침");
        assert_eq!(request.target_kcal, 1800);
        assert_eq!(request.activity_level, "보통");
    }
}

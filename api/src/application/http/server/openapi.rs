use utoipa::OpenApi;

use crate::application::http::{
    health::router::HealthApiDoc, health_metric::router::HealthMetricApiDoc,
    meal_plan::router::MealPlanApiDoc, user::router::UserApiDoc, weight::router::WeightApiDoc,
    workout::router::WorkoutApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HealthHub API"
    ),
    nest(
        (path = "/ai", api = MealPlanApiDoc),
        (path = "/weight", api = WeightApiDoc),
        (path = "/workouts", api = WorkoutApiDoc),
        (path = "/health-metrics", api = HealthMetricApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// User routes sit at the root (`/register`, `/users/...`) so they are
    /// merged rather than nested.
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut openapi = Self::openapi();
        openapi.merge(UserApiDoc::openapi());
        openapi
    }
}

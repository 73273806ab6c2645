use std::time::Instant;

use tracing::{info, warn};

use crate::domain::{
    common::services::Service,
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    health_metric::ports::HealthMetricRepository,
    meal_plan::{
        context::{FoodContext, classify},
        entities::MealPlanResult,
        errors::MealPlanFailure,
        ports::{CompletionClient, MealPlanService},
        prompt,
        slot_policy::{SlotSet, active_slots},
        validator,
        value_objects::MealRequest,
    },
    user::ports::UserRepository,
    weight::ports::WeightRecordRepository,
    workout::ports::WorkoutRepository,
};

impl<U, H, W, WO, HM, HC, LLM> Service<U, H, W, WO, HM, HC, LLM>
where
    LLM: CompletionClient,
{
    async fn try_recommend(
        &self,
        request: &MealRequest,
        slots: &SlotSet,
        context: FoodContext,
    ) -> Result<MealPlanResult, MealPlanFailure> {
        let completion_request = prompt::build(request, slots, context)
            .map_err(|e| MealPlanFailure::Completion(e.to_string()))?;

        let raw_text = tokio::time::timeout(
            self.completion_timeout,
            self.completion_client.complete(completion_request),
        )
        .await
        .map_err(|_| MealPlanFailure::Timeout(self.completion_timeout))?
        .map_err(|e| MealPlanFailure::Completion(e.to_string()))?;

        validator::try_validate(&raw_text, request)
    }
}

impl<U, H, W, WO, HM, HC, LLM> MealPlanService for Service<U, H, W, WO, HM, HC, LLM>
where
    U: UserRepository,
    H: HasherRepository,
    W: WeightRecordRepository,
    WO: WorkoutRepository,
    HM: HealthMetricRepository,
    HC: HealthCheckRepository,
    LLM: CompletionClient,
{
    async fn recommend(&self, request: MealRequest) -> MealPlanResult {
        let slots = active_slots(&request.meal_time);
        let context = classify(&request.notes);
        let started = Instant::now();

        match self.try_recommend(&request, &slots, context).await {
            Ok(result) => {
                info!(
                    meal_time = slots.meal_time().label(),
                    context = context.marker().unwrap_or("default"),
                    latency_ms = started.elapsed().as_millis() as u64,
                    "Meal plan generated"
                );
                result
            }
            Err(failure) => {
                warn!(
                    meal_time = slots.meal_time().label(),
                    context = context.marker().unwrap_or("default"),
                    failure = failure.kind(),
                    error = %failure,
                    latency_ms = started.elapsed().as_millis() as u64,
                    "Meal plan fell back"
                );
                MealPlanResult::fallback(request.target_kcal, &failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError,
        meal_plan::entities::FALLBACK_TITLE,
        test_support::{TestService, service_with, service_with_timeout},
    };

    const BREAKFAST_OUTPUT: &str = r#"{
        "title": "편의점 단백질 아침",
        "breakfast": "삶은 계란 2개, 저지방 우유, 바나나 1개",
        "lunch": "",
        "dinner": "",
        "snack": "",
        "totalKcal": 420,
        "tip": "아침 단백질을 챙기세요",
        "nutrition": { "carbs": "50g", "protein": "25g", "fat": "10g" }
    }"#;

    fn breakfast_request() -> MealRequest {
        MealRequest {
            meal_time: "아침".to_string(),
            notes: "편의점에서 살 수 있는 걸로".to_string(),
            age: 28,
            gender: "남".to_string(),
            height: 178.0,
            weight: 74.0,
            activity_level: "보통".to_string(),
            goal: "다이어트".to_string(),
            target_kcal: 1800,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_breakfast_convenience_store_prompt() {
        let service: TestService = service_with(|ports| {
            ports
                .completion
                .expect_complete()
                .withf(|request| {
                    request.system.contains("아침 식사만 실제 추천 대상이다")
                        && request.system.contains("편의점(GS25, CU, 세븐일레븐)")
                        && request.user.contains("\"breakfast\": \"반드시 채워라\"")
                        && request.user.contains("\"lunch\": \"빈 문자열로 둬라\"")
                        && request.user.contains("\"totalKcal\": 1800")
                })
                .times(1)
                .returning(|_| Box::pin(async { Ok(BREAKFAST_OUTPUT.to_string()) }));
        });

        let result = service.recommend(breakfast_request()).await;

        assert_eq!(result.title, "편의점 단백질 아침");
        assert_eq!(result.breakfast, "삶은 계란 2개, 저지방 우유, 바나나 1개");
        assert!(result.lunch.is_empty());
        assert_eq!(result.total_kcal, 1800);
        assert_eq!(result.nutrition.protein, "25g");
        assert!(!result.is_fallback());
    }

    #[tokio::test]
    async fn test_client_error_falls_back() {
        let service: TestService = service_with(|ports| {
            ports.completion.expect_complete().returning(|_| {
                Box::pin(async {
                    Err(CoreError::ExternalServiceError("status 429".to_string()))
                })
            });
        });

        let result = service.recommend(breakfast_request()).await;

        assert_eq!(result.title, FALLBACK_TITLE);
        assert_eq!(result.total_kcal, 1800);
        assert!(result.tip.starts_with("AI 오류 발생: "));
        assert!(result.tip.contains("status 429"));
        assert!(result.breakfast.is_empty());
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let service: TestService = service_with_timeout(Duration::from_millis(20), |ports| {
            ports
                .completion
                .expect_complete()
                .returning(|_| Box::pin(std::future::pending::<Result<String, CoreError>>()));
        });

        let result = service.recommend(breakfast_request()).await;

        assert!(result.is_fallback());
        assert!(result.tip.contains("timed out"));
        assert_eq!(result.total_kcal, 1800);
    }

    #[tokio::test]
    async fn test_prose_output_falls_back() {
        let service: TestService = service_with(|ports| {
            ports.completion.expect_complete().returning(|_| {
                Box::pin(async { Ok("다음은 추천 식단입니다: 현미밥과 닭가슴살".to_string()) })
            });
        });

        let result = service.recommend(breakfast_request()).await;

        assert!(result.is_fallback());
        assert_eq!(result.total_kcal, 1800);
    }

    #[tokio::test]
    async fn test_unknown_meal_time_targets_all_slots() {
        let service: TestService = service_with(|ports| {
            ports
                .completion
                .expect_complete()
                .withf(|request| {
                    request.system.contains("전체 식사만 실제 추천 대상이다")
                        && !request.user.contains("빈 문자열로 둬라")
                })
                .returning(|_| Box::pin(async { Ok(BREAKFAST_OUTPUT.to_string()) }));
        });

        let request = MealRequest {
            meal_time: "브런치".to_string(),
            ..breakfast_request()
        };

        assert!(!service.recommend(request).await.is_fallback());
    }
}

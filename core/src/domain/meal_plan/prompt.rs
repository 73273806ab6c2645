use crate::domain::meal_plan::{
    context::FoodContext,
    entities::{MealPlanResult, Nutrition},
    schema::get_meal_plan_schema,
    slot_policy::{MealSlot, SlotSet},
    value_objects::{CompletionRequest, MealRequest},
};

const PERSONA: &str = "너는 한국어로 답변하는 전문 영양사다.";

/// Output template shown to the model: every slot carries its fill/empty rule.
fn output_template(request: &MealRequest, slots: &SlotSet) -> MealPlanResult {
    let mut template = MealPlanResult {
        title: String::new(),
        breakfast: String::new(),
        lunch: String::new(),
        dinner: String::new(),
        snack: String::new(),
        total_kcal: request.target_kcal,
        tip: String::new(),
        nutrition: Nutrition::default(),
    };

    for slot in MealSlot::ALL {
        template.set_slot(slot, slots.rule(slot).instruction().to_string());
    }

    template
}

fn system_instruction(slots: &SlotSet, context: FoodContext) -> String {
    format!(
        "{PERSONA}\n\n\
         절대 규칙:\n\
         - 반드시 JSON만 반환\n\
         - 설명, 문장, 마크다운, 주석 금지\n\
         - {} 식사만 실제 추천 대상이다\n\
         - {}\n",
        slots.meal_time().label(),
        context.description()
    )
}

fn user_instruction(request: &MealRequest, slots: &SlotSet, template: &str) -> String {
    format!(
        "입력 정보:\n\
         나이: {}\n\
         성별: {}\n\
         키: {}\n\
         체중: {}\n\
         활동 수준: {}\n\
         목표: {}\n\
         목표 칼로리: {}\n\
         식사 시간: {}\n\
         알레르기: {}\n\
         선호: {}\n\
         추가 요청: {}\n\n\
         JSON 형식:\n\
         {template}\n",
        request.age,
        request.gender,
        request.height,
        request.weight,
        request.activity_level,
        request.goal,
        request.target_kcal,
        slots.meal_time().label(),
        request.allergies,
        request.preferences,
        request.notes,
    )
}

pub fn build(
    request: &MealRequest,
    slots: &SlotSet,
    context: FoodContext,
) -> Result<CompletionRequest, serde_json::Error> {
    let template = serde_json::to_string_pretty(&output_template(request, slots))?;

    Ok(CompletionRequest {
        system: system_instruction(slots, context),
        user: user_instruction(request, slots, &template),
        response_schema: get_meal_plan_schema(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meal_plan::{
        context::classify,
        slot_policy::{SlotRule, active_slots},
    };

    fn breakfast_request() -> MealRequest {
        MealRequest {
            meal_time: "아침".to_string(),
            notes: "편의점".to_string(),
            age: 31,
            gender: "여".to_string(),
            height: 162.5,
            weight: 58.0,
            activity_level: "보통 활동 (주 3-5회 운동)".to_string(),
            goal: "체중 감량".to_string(),
            target_kcal: 1800,
            ..Default::default()
        }
    }

    fn template_of(completion: &CompletionRequest) -> serde_json::Value {
        let (_, template) = completion
            .user
            .split_once("JSON 형식:\n")
            .expect("template marker");
        serde_json::from_str(template.trim()).expect("template is valid JSON")
    }

    #[test]
    fn test_breakfast_convenience_store_prompt() {
        let request = breakfast_request();
        let slots = active_slots(&request.meal_time);
        let context = classify(&request.notes);

        let completion = build(&request, &slots, context).unwrap();

        assert!(completion.system.contains(PERSONA));
        assert!(completion.system.contains("반드시 JSON만 반환"));
        assert!(completion.system.contains("아침 식사만 실제 추천 대상이다"));
        assert!(
            completion
                .system
                .contains(FoodContext::ConvenienceStore.description())
        );

        let template = template_of(&completion);
        assert_eq!(template["breakfast"], SlotRule::Fill.instruction());
        assert_eq!(template["lunch"], SlotRule::Empty.instruction());
        assert_eq!(template["dinner"], SlotRule::Empty.instruction());
        assert_eq!(template["snack"], SlotRule::Empty.instruction());
        assert_eq!(template["totalKcal"], 1800);
        assert_eq!(template["title"], "");
        assert_eq!(template["nutrition"]["carbs"], "");
    }

    #[test]
    fn test_user_instruction_embeds_biometrics() {
        let request = breakfast_request();
        let slots = active_slots(&request.meal_time);

        let completion = build(&request, &slots, FoodContext::Default).unwrap();

        for line in [
            "나이: 31",
            "성별: 여",
            "키: 162.5",
            "체중: 58",
            "활동 수준: 보통 활동 (주 3-5회 운동)",
            "목표: 체중 감량",
            "목표 칼로리: 1800",
            "식사 시간: 아침",
            "알레르기: 없음",
            "선호: 없음",
            "추가 요청: 편의점",
        ] {
            assert!(completion.user.contains(line), "missing {line:?}");
        }
    }

    #[test]
    fn test_unknown_meal_time_fills_every_slot() {
        let request = MealRequest {
            meal_time: "brunch".to_string(),
            ..breakfast_request()
        };
        let slots = active_slots(&request.meal_time);

        let completion = build(&request, &slots, FoodContext::Default).unwrap();

        assert!(completion.system.contains("전체 식사만 실제 추천 대상이다"));
        let template = template_of(&completion);
        for key in ["breakfast", "lunch", "dinner", "snack"] {
            assert_eq!(template[key], SlotRule::Fill.instruction());
        }
    }

    #[test]
    fn test_response_schema_is_attached() {
        let request = breakfast_request();
        let completion =
            build(&request, &active_slots("점심"), FoodContext::DiningOut).unwrap();

        assert_eq!(completion.response_schema, get_meal_plan_schema());
    }
}

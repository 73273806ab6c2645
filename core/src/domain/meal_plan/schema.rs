use serde_json::json;

/// Returns the JSON schema for meal plan LLM responses
pub fn get_meal_plan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "breakfast": { "type": "string" },
            "lunch": { "type": "string" },
            "dinner": { "type": "string" },
            "snack": { "type": "string" },
            "totalKcal": { "type": "number" },
            "tip": { "type": "string" },
            "nutrition": {
                "type": "object",
                "properties": {
                    "carbs": { "type": "string" },
                    "protein": { "type": "string" },
                    "fat": { "type": "string" }
                },
                "required": ["carbs", "protein", "fat"],
                "additionalProperties": false
            }
        },
        "required": [
            "title", "breakfast", "lunch", "dinner", "snack",
            "totalKcal", "tip", "nutrition"
        ],
        "additionalProperties": false
    })
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserValidator {
    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[validate(length(min = 4, message = "password must be at least 4 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 50.0, max = 250.0, message = "height must be in centimeters"))]
    pub height: f64,

    #[validate(range(min = 20.0, max = 300.0, message = "target_weight must be in kilograms"))]
    pub target_weight: f64,

    #[validate(length(min = 1, message = "goal is required"))]
    pub goal: String,

    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    pub age: i32,

    #[validate(length(min = 1, message = "gender is required"))]
    pub gender: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(range(min = 50.0, max = 250.0, message = "height must be in centimeters"))]
    pub height: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 20.0, max = 300.0, message = "target_weight must be in kilograms"))]
    pub target_weight: Option<f64>,

    #[serde(default)]
    pub goal: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    pub age: Option<i32>,

    #[serde(default)]
    pub gender: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConditionQuery {
    /// Day to score, `YYYY-MM-DD`. Defaults to today (UTC).
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_bad_email() {
        let payload = RegisterUserValidator {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
            name: "김하늘".to_string(),
            height: 165.0,
            target_weight: 55.0,
            goal: "다이어트".to_string(),
            age: 27,
            gender: "여".to_string(),
        };

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_update_allows_empty_body() {
        let payload: UpdateUserValidator = serde_json::from_str("{}").unwrap();
        assert!(payload.validate().is_ok());
    }
}

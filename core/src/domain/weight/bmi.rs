use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body mass index rounded to one decimal. Height is in centimetres.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return 0.0;
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    (bmi * 10.0).round() / 10.0
}

/// Asia-Pacific BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BmiStatus {
    #[serde(rename = "저체중")]
    Underweight,
    #[serde(rename = "정상")]
    Normal,
    #[serde(rename = "과체중")]
    Overweight,
    #[serde(rename = "비만")]
    Obese,
}

impl BmiStatus {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiStatus::Underweight
        } else if bmi < 23.0 {
            BmiStatus::Normal
        } else if bmi < 25.0 {
            BmiStatus::Overweight
        } else {
            BmiStatus::Obese
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_bmi_rounds_to_one_decimal() {
        assert_eq!(calculate_bmi(70.0, 175.0), 22.9);
        assert_eq!(calculate_bmi(58.0, 162.5), 22.0);
    }

    #[test]
    fn test_calculate_bmi_without_measurements() {
        assert_eq!(calculate_bmi(0.0, 175.0), 0.0);
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
    }

    #[test]
    fn test_bmi_status_bands() {
        assert_eq!(BmiStatus::from_bmi(18.4), BmiStatus::Underweight);
        assert_eq!(BmiStatus::from_bmi(18.5), BmiStatus::Normal);
        assert_eq!(BmiStatus::from_bmi(22.9), BmiStatus::Normal);
        assert_eq!(BmiStatus::from_bmi(23.0), BmiStatus::Overweight);
        assert_eq!(BmiStatus::from_bmi(25.0), BmiStatus::Obese);
    }
}

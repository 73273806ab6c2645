use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Normal,
    Warning,
    Danger,
}

impl StatusLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StatusLevel::Normal => "정상",
            StatusLevel::Warning => "주의",
            StatusLevel::Danger => "위험",
        }
    }
}

pub fn blood_pressure_status(systolic: i32, diastolic: i32) -> StatusLevel {
    if systolic < 120 && diastolic < 80 {
        StatusLevel::Normal
    } else if systolic < 140 && diastolic < 90 {
        StatusLevel::Warning
    } else {
        StatusLevel::Danger
    }
}

/// Fasting blood sugar in mg/dL.
pub fn blood_sugar_status(blood_sugar: i32) -> StatusLevel {
    if blood_sugar < 100 {
        StatusLevel::Normal
    } else if blood_sugar < 126 {
        StatusLevel::Warning
    } else {
        StatusLevel::Danger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_pressure_bands() {
        assert_eq!(blood_pressure_status(119, 79), StatusLevel::Normal);
        assert_eq!(blood_pressure_status(120, 70), StatusLevel::Warning);
        assert_eq!(blood_pressure_status(110, 85), StatusLevel::Warning);
        assert_eq!(blood_pressure_status(139, 89), StatusLevel::Warning);
        assert_eq!(blood_pressure_status(140, 70), StatusLevel::Danger);
        assert_eq!(blood_pressure_status(118, 95), StatusLevel::Danger);
    }

    #[test]
    fn test_blood_sugar_bands() {
        assert_eq!(blood_sugar_status(99), StatusLevel::Normal);
        assert_eq!(blood_sugar_status(100), StatusLevel::Warning);
        assert_eq!(blood_sugar_status(125), StatusLevel::Warning);
        assert_eq!(blood_sugar_status(126), StatusLevel::Danger);
    }
}

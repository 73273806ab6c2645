use crate::domain::health_metric::{entities::HealthMetric, status::StatusLevel};

const WEIGHT_POINTS: u32 = 15;
const WORKOUT_POINTS: u32 = 35;
const BLOOD_PRESSURE_POINTS: u32 = 10;
const BLOOD_SUGAR_POINTS: u32 = 10;

fn sleep_points(sleep_hours: f64) -> u32 {
    if (7.0..=9.0).contains(&sleep_hours) {
        30
    } else if sleep_hours >= 6.0 {
        20
    } else if sleep_hours > 0.0 {
        10
    } else {
        0
    }
}

/// Daily score in `0..=100`.
pub fn calculate_condition_score(
    weight_logged: bool,
    workout_completed: bool,
    sleep_hours: f64,
    last_metric: Option<&HealthMetric>,
) -> u32 {
    let mut score = sleep_points(sleep_hours);

    if weight_logged {
        score += WEIGHT_POINTS;
    }
    if workout_completed {
        score += WORKOUT_POINTS;
    }
    if let Some(metric) = last_metric {
        if metric.blood_pressure_status() == StatusLevel::Normal {
            score += BLOOD_PRESSURE_POINTS;
        }
        if metric.blood_sugar_status() == StatusLevel::Normal {
            score += BLOOD_SUGAR_POINTS;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::domain::health_metric::entities::HealthMetricConfig;

    fn metric(systolic: i32, diastolic: i32, blood_sugar: i32) -> HealthMetric {
        HealthMetric::new(HealthMetricConfig {
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            systolic,
            diastolic,
            blood_sugar,
            sleep_hours: 8.0,
        })
    }

    #[test]
    fn test_perfect_day() {
        let metric = metric(115, 75, 90);
        assert_eq!(calculate_condition_score(true, true, 8.0, Some(&metric)), 100);
    }

    #[test]
    fn test_nothing_logged() {
        assert_eq!(calculate_condition_score(false, false, 0.0, None), 0);
    }

    #[test]
    fn test_sleep_bands() {
        assert_eq!(sleep_points(7.0), 30);
        assert_eq!(sleep_points(9.0), 30);
        assert_eq!(sleep_points(6.5), 20);
        assert_eq!(sleep_points(10.0), 20);
        assert_eq!(sleep_points(4.0), 10);
        assert_eq!(sleep_points(0.0), 0);
    }

    #[test]
    fn test_abnormal_metrics_earn_nothing() {
        let metric = metric(145, 95, 130);
        assert_eq!(calculate_condition_score(true, false, 5.0, Some(&metric)), 25);
    }
}

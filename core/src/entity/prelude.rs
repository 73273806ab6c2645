pub use super::health_metrics::Entity as HealthMetrics;
pub use super::users::Entity as Users;
pub use super::weight_records::Entity as WeightRecords;
pub use super::workout_records::Entity as WorkoutRecords;

pub mod mappers;
pub mod repositories;

pub use repositories::health_metric_repository::PostgresHealthMetricRepository;

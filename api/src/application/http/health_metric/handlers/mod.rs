pub mod create_health_metric;
pub mod get_health_metrics;

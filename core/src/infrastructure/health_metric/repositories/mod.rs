pub mod health_metric_repository;

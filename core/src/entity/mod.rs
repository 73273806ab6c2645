//! sea-orm entities for the PostgreSQL schema in `core/migrations`.

pub mod prelude;

pub mod health_metrics;
pub mod users;
pub mod weight_records;
pub mod workout_records;

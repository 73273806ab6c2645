pub mod entities;
pub mod ports;
pub mod services;
pub mod status;
pub mod value_objects;

pub use entities::HealthMetric;
pub use ports::{HealthMetricRepository, HealthMetricService};
pub use status::{StatusLevel, blood_pressure_status, blood_sugar_status};

pub mod health;
pub mod health_metric;
pub mod meal_plan;
pub mod server;
pub mod user;
pub mod weight;
pub mod workout;

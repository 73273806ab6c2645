pub mod crypto;
pub mod db;
pub mod health;
pub mod health_metric;
pub mod llm;
pub mod user;
pub mod weight;
pub mod workout;

pub mod common;
pub mod condition;
pub mod crypto;
pub mod health;
pub mod health_metric;
pub mod meal_plan;
pub mod user;
pub mod weight;
pub mod workout;

#[cfg(test)]
pub(crate) mod test_support;

pub mod context;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;
pub mod slot_policy;
pub mod validator;
pub mod value_objects;

pub use context::{FoodContext, classify};
pub use entities::*;
pub use errors::MealPlanFailure;
pub use ports::*;
pub use slot_policy::{DEFAULT_MEAL_TIME, MealSlot, MealTime, SlotRule, SlotSet, active_slots};
pub use value_objects::*;

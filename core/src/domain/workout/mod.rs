pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Intensity, WorkoutRecord};
pub use ports::{WorkoutRepository, WorkoutService};

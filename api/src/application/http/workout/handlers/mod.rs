pub mod create_workout;
pub mod get_workouts;

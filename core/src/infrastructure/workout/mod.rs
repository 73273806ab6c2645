pub mod mappers;
pub mod repositories;

pub use repositories::workout_repository::PostgresWorkoutRepository;

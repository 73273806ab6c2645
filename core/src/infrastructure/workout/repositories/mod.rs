pub mod workout_repository;

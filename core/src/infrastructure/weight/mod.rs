pub mod mappers;
pub mod repositories;

pub use repositories::weight_record_repository::PostgresWeightRecordRepository;

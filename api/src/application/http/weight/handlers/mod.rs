pub mod create_weight_record;
pub mod get_weight_records;

pub mod weight_record_repository;

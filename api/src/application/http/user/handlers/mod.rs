pub mod get_condition;
pub mod get_user;
pub mod get_users;
pub mod login;
pub mod register_user;
pub mod update_user;

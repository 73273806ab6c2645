use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::User,
        value_objects::{LoginInput, RegisterUserInput, UpdateUserInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(
        &self,
        user: User,
        password_hash: String,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(&self, user_id: Uuid)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_password_hash(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;

    fn update_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn register(
        &self,
        input: RegisterUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn login(&self, input: LoginInput) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_users(&self) -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;

    fn get_user(&self, user_id: Uuid) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(
        &self,
        user_id: Uuid,
        input: UpdateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}

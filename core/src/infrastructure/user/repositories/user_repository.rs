use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{entities::User, ports::UserRepository},
    },
    entity::users::{ActiveModel, Column, Entity},
    infrastructure::db::errors::map_insert_error,
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: User, password_hash: String) -> Result<User, CoreError> {
        let active_model = ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            password_hash: Set(password_hash),
            name: Set(user.name.clone()),
            height: Set(user.height),
            target_weight: Set(user.target_weight),
            goal: Set(user.goal.clone()),
            age: Set(user.age),
            gender: Set(user.gender.clone()),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_insert_error(e, "Failed to create user", "Email already registered"))?;

        Ok(User::from(created))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, CoreError> {
        let user = Entity::find_by_id(id).one(&self.db).await.map_err(|e| {
            error!("Failed to get user by id: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(user.map(User::from))
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn get_password_hash(&self, user_id: Uuid) -> Result<Option<String>, CoreError> {
        Entity::find_by_id(user_id)
            .select_only()
            .column(Column::PasswordHash)
            .into_tuple::<String>()
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get password hash: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn list_users(&self) -> Result<Vec<User>, CoreError> {
        let users = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list users: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(users.iter().map(User::from).collect())
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        let updated = Entity::update(ActiveModel {
            id: Set(user.id),
            email: NotSet,
            password_hash: NotSet,
            name: Set(user.name.clone()),
            height: Set(user.height),
            target_weight: Set(user.target_weight),
            goal: Set(user.goal.clone()),
            age: Set(user.age),
            gender: Set(user.gender.clone()),
            created_at: NotSet,
            updated_at: Set(user.updated_at.fixed_offset()),
        })
        .exec(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to update user: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(User::from(updated))
    }
}

use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    health_metric::ports::HealthMetricRepository,
    meal_plan::ports::CompletionClient,
    user::{
        entities::{User, UserConfig},
        ports::{UserRepository, UserService},
        value_objects::{LoginInput, RegisterUserInput, UpdateUserInput},
    },
    weight::ports::WeightRecordRepository,
    workout::ports::WorkoutRepository,
};

impl<U, H, W, WO, HM, HC, LLM> UserService for Service<U, H, W, WO, HM, HC, LLM>
where
    U: UserRepository,
    H: HasherRepository,
    W: WeightRecordRepository,
    WO: WorkoutRepository,
    HM: HealthMetricRepository,
    HC: HealthCheckRepository,
    LLM: CompletionClient,
{
    async fn register(&self, input: RegisterUserInput) -> Result<User, CoreError> {
        if self
            .user_repository
            .get_by_email(input.email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict("Email already registered".to_string()));
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;

        let user = User::new(UserConfig {
            email: input.email,
            name: input.name,
            height: input.height,
            target_weight: input.target_weight,
            goal: input.goal,
            age: input.age,
            gender: input.gender,
        });

        let user = self
            .user_repository
            .create_user(user, password_hash)
            .await?;

        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    async fn login(&self, input: LoginInput) -> Result<User, CoreError> {
        let user = self
            .user_repository
            .get_by_email(input.email)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let password_hash = self
            .user_repository
            .get_password_hash(user.id)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let is_valid = self
            .hasher_repository
            .verify_password(input.password, password_hash)
            .await?;

        if !is_valid {
            return Err(CoreError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn get_users(&self) -> Result<Vec<User>, CoreError> {
        self.user_repository.list_users().await
    }

    async fn get_user(&self, user_id: Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_user(&self, user_id: Uuid, input: UpdateUserInput) -> Result<User, CoreError> {
        let mut user = self
            .user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if !user.update(input) {
            return Ok(user);
        }

        self.user_repository.update_user(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{TestService, sample_user, service_with};

    fn register_input() -> RegisterUserInput {
        RegisterUserInput {
            email: "kim@example.com".to_string(),
            password: "secret".to_string(),
            name: "김하늘".to_string(),
            height: 170.0,
            target_weight: 62.0,
            goal: "다이어트".to_string(),
            age: 29,
            gender: "여".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let service: TestService = service_with(|ports| {
            ports
                .users
                .expect_get_by_email()
                .returning(|_| Box::pin(async { Ok(None) }));
            ports
                .hasher
                .expect_hash_password()
                .withf(|password| password == "secret")
                .returning(|_| Box::pin(async { Ok("hashed".to_string()) }));
            ports
                .users
                .expect_create_user()
                .withf(|user, hash| user.email == "kim@example.com" && hash == "hashed")
                .returning(|user, _| Box::pin(async move { Ok(user) }));
        });

        let user = service.register(register_input()).await.unwrap();
        assert_eq!(user.name, "김하늘");
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let service: TestService = service_with(|ports| {
            ports
                .users
                .expect_get_by_email()
                .returning(|_| Box::pin(async { Ok(Some(sample_user())) }));
            ports.users.expect_create_user().never();
        });

        let err = service.register(register_input()).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() {
        let service: TestService = service_with(|ports| {
            ports
                .users
                .expect_get_by_email()
                .returning(|_| Box::pin(async { Ok(Some(sample_user())) }));
            ports
                .users
                .expect_get_password_hash()
                .returning(|_| Box::pin(async { Ok(Some("hashed".to_string())) }));
            ports
                .hasher
                .expect_verify_password()
                .returning(|_, _| Box::pin(async { Ok(false) }));
        });

        let err = service
            .login(LoginInput {
                email: "kim@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let service: TestService = service_with(|ports| {
            ports
                .users
                .expect_get_by_email()
                .returning(|_| Box::pin(async { Ok(None) }));
        });

        let err = service
            .login(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_update_without_fields_skips_write() {
        let service: TestService = service_with(|ports| {
            ports
                .users
                .expect_get_by_id()
                .returning(|_| Box::pin(async { Ok(Some(sample_user())) }));
            ports.users.expect_update_user().never();
        });

        let user = service
            .update_user(Uuid::new_v4(), UpdateUserInput::default())
            .await
            .unwrap();
        assert_eq!(user.goal, "건강유지");
    }

    #[tokio::test]
    async fn test_update_applies_fields() {
        let service: TestService = service_with(|ports| {
            ports
                .users
                .expect_get_by_id()
                .returning(|_| Box::pin(async { Ok(Some(sample_user())) }));
            ports
                .users
                .expect_update_user()
                .returning(|user| Box::pin(async move { Ok(user) }));
        });

        let user = service
            .update_user(
                Uuid::new_v4(),
                UpdateUserInput {
                    goal: Some("체중증량".to_string()),
                    age: Some(34),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(user.goal, "체중증량");
        assert_eq!(user.age, 34);
        assert_eq!(user.name, "이서준");
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let service: TestService = service_with(|ports| {
            ports
                .users
                .expect_get_by_id()
                .returning(|_| Box::pin(async { Ok(None) }));
        });

        assert_eq!(
            service.get_user(Uuid::new_v4()).await.unwrap_err(),
            CoreError::NotFound
        );
    }
}

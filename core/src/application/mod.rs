use crate::{
    domain::common::{HealthHubConfig, services::Service},
    infrastructure::{
        crypto::Argon2HasherRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        health_metric::PostgresHealthMetricRepository,
        llm::OpenAILLMClient,
        user::PostgresUserRepository,
        weight::PostgresWeightRecordRepository,
        workout::PostgresWorkoutRepository,
    },
};

pub type HealthHubService = Service<
    PostgresUserRepository,
    Argon2HasherRepository,
    PostgresWeightRecordRepository,
    PostgresWorkoutRepository,
    PostgresHealthMetricRepository,
    PostgresHealthCheckRepository,
    OpenAILLMClient,
>;

pub async fn create_service(config: HealthHubConfig) -> Result<HealthHubService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    Ok(Service::new(
        PostgresUserRepository::new(postgres.get_db()),
        Argon2HasherRepository::new(),
        PostgresWeightRecordRepository::new(postgres.get_db()),
        PostgresWorkoutRepository::new(postgres.get_db()),
        PostgresHealthMetricRepository::new(postgres.get_db()),
        PostgresHealthCheckRepository::new(postgres.get_db()),
        OpenAILLMClient::new(&config.llm),
        config.llm.timeout,
    ))
}

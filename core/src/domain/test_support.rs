use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    common::services::Service,
    crypto::ports::MockHasherRepository,
    health::ports::MockHealthCheckRepository,
    health_metric::ports::MockHealthMetricRepository,
    meal_plan::ports::MockCompletionClient,
    user::{entities::User, ports::MockUserRepository},
    weight::ports::MockWeightRecordRepository,
    workout::ports::MockWorkoutRepository,
};

pub type TestService = Service<
    MockUserRepository,
    MockHasherRepository,
    MockWeightRecordRepository,
    MockWorkoutRepository,
    MockHealthMetricRepository,
    MockHealthCheckRepository,
    MockCompletionClient,
>;

pub struct MockPorts {
    pub users: MockUserRepository,
    pub hasher: MockHasherRepository,
    pub weights: MockWeightRecordRepository,
    pub workouts: MockWorkoutRepository,
    pub metrics: MockHealthMetricRepository,
    pub health: MockHealthCheckRepository,
    pub completion: MockCompletionClient,
}

pub fn service_with(configure: impl FnOnce(&mut MockPorts)) -> TestService {
    service_with_timeout(Duration::from_secs(5), configure)
}

pub fn service_with_timeout(
    timeout: Duration,
    configure: impl FnOnce(&mut MockPorts),
) -> TestService {
    let mut ports = MockPorts {
        users: MockUserRepository::new(),
        hasher: MockHasherRepository::new(),
        weights: MockWeightRecordRepository::new(),
        workouts: MockWorkoutRepository::new(),
        metrics: MockHealthMetricRepository::new(),
        health: MockHealthCheckRepository::new(),
        completion: MockCompletionClient::new(),
    };
    configure(&mut ports);

    Service::new(
        ports.users,
        ports.hasher,
        ports.weights,
        ports.workouts,
        ports.metrics,
        ports.health,
        ports.completion,
        timeout,
    )
}

pub fn sample_user() -> User {
    let now = Utc::now();

    User {
        id: Uuid::new_v4(),
        email: "seojun@example.com".to_string(),
        name: "이서준".to_string(),
        height: 175.0,
        target_weight: 70.0,
        goal: "건강유지".to_string(),
        age: 32,
        gender: "남".to_string(),
        created_at: now,
        updated_at: now,
    }
}

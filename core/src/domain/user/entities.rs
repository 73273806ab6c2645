use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, user::value_objects::UpdateUserInput};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub height: f64,
    pub target_weight: f64,
    pub goal: String,
    pub age: i32,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserConfig {
    pub email: String,
    pub name: String,
    pub height: f64,
    pub target_weight: f64,
    pub goal: String,
    pub age: i32,
    pub gender: String,
}

impl User {
    pub fn new(config: UserConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            email: config.email,
            name: config.name,
            height: config.height,
            target_weight: config.target_weight,
            goal: config.goal,
            age: config.age,
            gender: config.gender,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the provided fields. Returns `false` when nothing was provided.
    pub fn update(&mut self, input: UpdateUserInput) -> bool {
        let mut changed = false;

        if let Some(name) = input.name {
            self.name = name;
            changed = true;
        }
        if let Some(height) = input.height {
            self.height = height;
            changed = true;
        }
        if let Some(target_weight) = input.target_weight {
            self.target_weight = target_weight;
            changed = true;
        }
        if let Some(goal) = input.goal {
            self.goal = goal;
            changed = true;
        }
        if let Some(age) = input.age {
            self.age = age;
            changed = true;
        }
        if let Some(gender) = input.gender {
            self.gender = gender;
            changed = true;
        }

        if changed {
            let (now, _) = generate_timestamp();
            self.updated_at = now;
        }

        changed
    }
}
